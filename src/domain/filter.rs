//! Category filter selection

use std::fmt;
use std::str::FromStr;

/// Which quotes a view is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every quote regardless of category
    #[default]
    All,
    /// Quotes whose category matches exactly
    Category(String),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            "" => Err("Category filter must not be empty".to_string()),
            name => Ok(CategoryFilter::Category(name.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(name) => write!(f, "{}", name),
        }
    }
}
