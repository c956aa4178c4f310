pub mod create;
pub mod filter;
