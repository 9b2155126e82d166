//! Output formatting utilities

use crate::application::SyncOutcome;
use crate::domain::Quote;

pub const NO_MATCHING_QUOTES: &str = "No quotes available for this category.";

pub fn format_quote(quote: &Quote) -> String {
    quote.to_string()
}

/// Format quotes as a numbered list
pub fn format_quote_list(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return NO_MATCHING_QUOTES.to_string();
    }

    let mut output = String::new();
    for (i, quote) in quotes.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, quote));
    }
    output
}

pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

pub fn format_sync_outcome(outcome: SyncOutcome) -> String {
    match outcome {
        SyncOutcome::Replaced { count } => format!("Synced {} quotes from remote", count),
        SyncOutcome::Unchanged => "Sync failed; local quotes unchanged".to_string(),
        SyncOutcome::Skipped => "Sync skipped; another sync is in progress".to_string(),
        SyncOutcome::Cancelled => "Sync cancelled".to_string(),
    }
}
