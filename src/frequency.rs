use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{HuffmanError, Result};

/// Occurrence count of every distinct symbol of an input.
///
/// Entries keep the order in which each symbol first appeared; the tree builder
/// uses that order to break ties between equal weights.
#[derive(Debug, Clone)]
pub struct FrequencyTable<Symbol> {
    entries: Vec<(Symbol, usize)>,
    index: HashMap<Symbol, usize>,
}

impl<Symbol> FrequencyTable<Symbol>
where
    Symbol: Hash + Eq + Clone,
{
    /// Count every symbol of `symbols` in a single pass.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut entries: Vec<(Symbol, usize)> = Vec::new();
        let mut index: HashMap<Symbol, usize> = HashMap::new();

        for s in symbols {
            match index.get(&s) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(s.clone(), entries.len());
                    entries.push((s, 1));
                }
            }
        }

        Self { entries, index }
    }

    /// Build a table from explicit counts, keeping their order.
    ///
    /// Zero counts, repeated symbols and counts whose sum does not fit in a
    /// `usize` are rejected.
    pub fn from_entries(entries: impl IntoIterator<Item = (Symbol, usize)>) -> Result<Self> {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        let mut total = 0usize;

        for (s, count) in entries {
            let position = table.entries.len();
            total = total.checked_add(count).ok_or_else(|| {
                HuffmanError::invalid_frequencies(format!(
                    "total count overflows at entry {}",
                    position
                ))
            })?;
            if count == 0 {
                return Err(HuffmanError::invalid_frequencies(format!(
                    "entry {} has a zero count",
                    position
                )));
            }
            if table.index.insert(s.clone(), position).is_some() {
                return Err(HuffmanError::invalid_frequencies(format!(
                    "entry {} repeats an earlier symbol",
                    position
                )));
            }
            table.entries.push((s, count));
        }

        Ok(table)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }
}

impl<Symbol> FrequencyTable<Symbol> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // every table is built with a checked total, so this cannot overflow
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// `(symbol, count)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, usize)> {
        self.entries.iter().map(|(s, c)| (s, *c))
    }
}

// The index is derived from the entries.
impl<Symbol: PartialEq> PartialEq for FrequencyTable<Symbol> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<Symbol: Eq> Eq for FrequencyTable<Symbol> {}

// Stored as a plain list of (symbol, count) pairs so that the rebuilt tree
// keeps the same tie-break order.
impl<Symbol> Serialize for FrequencyTable<Symbol>
where
    Symbol: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de, Symbol> Deserialize<'de> for FrequencyTable<Symbol>
where
    Symbol: Deserialize<'de> + Hash + Eq + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<(Symbol, usize)>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(<D::Error as de::Error>::custom)
    }
}
