// This is intentionally thin:
// no mutation
// no "update" methods
// runtime reads only

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::knowledge::corpus::BUILTIN_RECORDS;
use crate::knowledge::index::KeywordIndex;
use crate::knowledge::record::{RecordError, SymbolRecord};
use crate::types::{CorpusVersion, Symbol};

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Corpus is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid record at position {position}: {source}")]
    InvalidRecord {
        position: usize,
        source: RecordError,
    },
}

/// On-disk shape of a corpus entry, validated into a [`SymbolRecord`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    symbol: String,
    keywords: Vec<String>,
    category: String,
}

static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(|| {
    let records = BUILTIN_RECORDS
        .iter()
        .map(|(symbol, keywords, category)| SymbolRecord::from_static(symbol, keywords, category))
        .collect();
    KnowledgeBase::from_records(records)
});

/// The static corpus plus its derived keyword index.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<SymbolRecord>,
    index: KeywordIndex,
    version: CorpusVersion,
}

impl KnowledgeBase {
    /// The corpus compiled into the crate. Built on first use.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn from_records(records: Vec<SymbolRecord>) -> Self {
        let index = KeywordIndex::build(&records);
        let version = corpus_version(&records);

        debug!(
            records = records.len(),
            keywords = index.len(),
            version = version.as_str(),
            "knowledge base built"
        );

        Self {
            records,
            index,
            version,
        }
    }

    /// Parse a JSON array of `{ "symbol", "keywords", "category" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeBaseError> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;

        let mut records = Vec::with_capacity(raw.len());
        for (position, entry) in raw.into_iter().enumerate() {
            let record = SymbolRecord::new(entry.symbol, entry.keywords, entry.category)
                .map_err(|source| KnowledgeBaseError::InvalidRecord { position, source })?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let kb = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            records = kb.records.len(),
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// Direct index hit. The key is trimmed and lowercased first.
    pub fn lookup_exact(&self, keyword: &str) -> &[Symbol] {
        self.index.get(&keyword.trim().to_lowercase())
    }

    /// Symbols whose record category equals `category`, in corpus order.
    pub fn records_by_category(&self, category: &str, limit: usize) -> Vec<Symbol> {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .take(limit)
            .map(|r| r.symbol().clone())
            .collect()
    }

    pub fn all_records(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.version
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.category())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// First record declaring `symbol`.
    pub fn record(&self, symbol: &str) -> Option<&SymbolRecord> {
        self.records.iter().find(|r| r.symbol() == symbol)
    }
}

/// sha256 over every record's fields, in corpus order.
fn corpus_version(records: &[SymbolRecord]) -> CorpusVersion {
    // 0x1f separates fields, 0x1e separates keywords, '\n' ends a record
    let mut content = Vec::new();
    for record in records {
        content.extend_from_slice(record.symbol().as_str().as_bytes());
        content.push(0x1f);
        for keyword in record.keywords() {
            content.extend_from_slice(keyword.as_bytes());
            content.push(0x1e);
        }
        content.push(0x1f);
        content.extend_from_slice(record.category().as_bytes());
        content.push(b'\n');
    }
    CorpusVersion::from_content(&content)
}
