//! Platform-independent core of the DriveSphere car catalog.
//!
//! Shared by the Yew frontend and usable natively: the entity model, request
//! payloads, list query encoding, endpoint paths, API errors, form logic and
//! the root controller's state machine.

pub mod catalog;
pub mod details;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod model;
pub mod query;
pub mod requests;
pub mod selection;
