//! notekeeper - Interactive in-memory note manager
//!
//! Reads line-based commands (add, list, get, delete, edit, search), keeps a
//! transient collection of titled notes, and answers every command with a
//! uniform result.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotekeeperError;
