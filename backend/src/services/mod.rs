//! HTTP routes of the host binary. The car API itself lives elsewhere; this
//! server only ships the compiled frontend and reports its own health.

pub mod assets;
pub mod health;
