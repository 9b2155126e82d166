//! JSON file export and import

use crate::domain::Quote;
use crate::error::{QuotebookError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// Write quotes as an indented JSON array of `{text, category}` objects
pub fn export_to_file(quotes: &[Quote], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(quotes)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn import_from_file(path: &Path) -> Result<Vec<Quote>> {
    let contents = fs::read_to_string(path)?;
    parse_import(&contents)
}

/// Parse an import file body.
///
/// The top-level value must be an array whose elements are quote objects.
/// Field contents are taken as-is.
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|e| QuotebookError::ImportFormat(format!("not valid JSON ({})", e)))?;

    if !value.is_array() {
        return Err(QuotebookError::ImportFormat(
            "expected a JSON array at the top level".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        QuotebookError::ImportFormat(format!(
            "array elements must be objects with text and category ({})",
            e
        ))
    })
}
