//! Infrastructure layer - Storage, configuration and the remote endpoint

pub mod config;
pub mod quote_store;
pub mod remote;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use quote_store::QuoteStore;
pub use remote::{HttpRemote, RemoteSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
