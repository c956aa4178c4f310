//! Root controller of the car catalog: state, messages and the transition
//! function, kept free of any rendering so the host view only wires input
//! events and network completions to `update`.

mod messages;
mod state;
mod update;

pub use messages::{CatalogMsg, Command};
pub use state::{CatalogState, Modal};
pub use update::{initial_command, update};
