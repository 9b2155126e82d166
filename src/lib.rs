//! quotebook - Quote manager with remote sync
//!
//! Keeps a list of categorized quotes on disk, shows random or filtered
//! quotes, and reconciles the list with a remote endpoint where the remote
//! copy always wins.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::QuotebookError;
