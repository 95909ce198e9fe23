// Derived from the record list once; never mutated afterwards.

use std::collections::HashMap;

use crate::knowledge::record::SymbolRecord;
use crate::types::Symbol;

#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub keyword: String,
    pub symbols: Vec<Symbol>,
}

/// Keyword → symbols declaring it.
///
/// Entries iterate in the order their keyword was first declared, and each
/// entry lists its symbols in declaration order without duplicates. Ranking
/// ties downstream depend on this order.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    entries: Vec<KeywordEntry>,
    positions: HashMap<String, usize>,
}

impl KeywordIndex {
    pub fn build(records: &[SymbolRecord]) -> Self {
        let mut index = KeywordIndex::default();

        for record in records {
            for keyword in record.keywords() {
                index.insert(keyword.to_lowercase(), record.symbol());
            }
        }

        index
    }

    fn insert(&mut self, keyword: String, symbol: &Symbol) {
        let pos = match self.positions.get(&keyword) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.positions.insert(keyword.clone(), pos);
                self.entries.push(KeywordEntry {
                    keyword,
                    symbols: Vec::new(),
                });
                pos
            }
        };

        let symbols = &mut self.entries[pos].symbols;
        if !symbols.contains(symbol) {
            symbols.push(symbol.clone());
        }
    }

    /// Symbols for an already-normalized keyword.
    pub fn get(&self, keyword: &str) -> &[Symbol] {
        self.positions
            .get(keyword)
            .map(|&pos| self.entries[pos].symbols.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
