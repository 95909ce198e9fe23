use serde::Serialize;
use thiserror::Error;

use crate::types::Symbol;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Symbol must not be empty")]
    EmptySymbol,
    #[error("Record {0} declares no keywords")]
    NoKeywords(String),
    #[error("Record {0} declares a blank keyword")]
    BlankKeyword(String),
}

/// One symbol with its descriptive keywords and category tag.
///
/// Only constructible through [`SymbolRecord::new`], so every record holds a
/// non-empty symbol and at least one non-blank lowercase keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolRecord {
    symbol: Symbol,
    keywords: Vec<String>,
    category: String,
}

impl SymbolRecord {
    /// Validate and normalize a record.
    ///
    /// Keywords are trimmed and lowercased. Keyword order is preserved and
    /// duplicates are kept; the index deduplicates per keyword.
    pub fn new(
        symbol: impl Into<String>,
        keywords: impl IntoIterator<Item = impl AsRef<str>>,
        category: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(RecordError::EmptySymbol);
        }

        let mut normalized = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(RecordError::BlankKeyword(symbol));
            }
            normalized.push(keyword);
        }

        if normalized.is_empty() {
            return Err(RecordError::NoKeywords(symbol));
        }

        Ok(SymbolRecord {
            symbol: Symbol::new(symbol),
            keywords: normalized,
            category: category.into(),
        })
    }

    /// Built-in table entries, already lowercase and non-blank.
    pub(crate) fn from_static(symbol: &str, keywords: &[&str], category: &str) -> Self {
        SymbolRecord {
            symbol: Symbol::new(symbol),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: category.to_string(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
