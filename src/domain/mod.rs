//! Domain layer - Quote records and collection rules

pub mod collection;
pub mod filter;
pub mod quote;

pub use collection::QuoteCollection;
pub use filter::CategoryFilter;
pub use quote::Quote;
