//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod quote_book;
pub mod scheduler;
pub mod sync;
pub mod transfer;

#[cfg(test)]
pub(crate) mod testing;

pub use manage_config::ConfigService;
pub use quote_book::{PushTask, QuoteBook};
pub use scheduler::{SchedulerHandle, SyncScheduler};
pub use sync::{sync_cycle, SyncGuard, SyncOutcome};
