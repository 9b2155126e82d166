//! Quote record

use crate::error::{QuotebookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote and the category it is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from user input, trimming both fields.
    ///
    /// Fails when either field is empty after trimming.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuotebookError::Validation(
                "quote text must not be empty".to_string(),
            ));
        }
        if category.is_empty() {
            return Err(QuotebookError::Validation(
                "category must not be empty".to_string(),
            ));
        }

        Ok(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// The quotes a fresh quotebook starts with
    pub fn defaults() -> Vec<Quote> {
        [
            (
                "The only limit to our realization of tomorrow is our doubts of today.",
                "Motivation",
            ),
            (
                "Life is what happens when you're busy making other plans.",
                "Life",
            ),
            ("In the middle of difficulty lies opportunity.", "Inspiration"),
        ]
        .into_iter()
        .map(|(text, category)| Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
        .collect()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}
