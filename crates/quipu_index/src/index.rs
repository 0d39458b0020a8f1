//! Symbol index keyed by package, category, and canonical name.
//!
//! The index is built once per documentation run by an external source parser
//! and handed to the expansion engine read-only.

use crate::record::{SymbolCategory, SymbolRecord};

/// Pre-built index of every documentable symbol, in insertion order.
///
/// Insertion order is the producer's definition order, and queries preserve
/// it, so resolution is deterministic when several packages export the same
/// name. A linear scan is fine at this scale: indexes hold at most a few
/// thousand entries and are queried once per reference.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    /// Canonical (upper-case) package name.
    package: String,
    record: SymbolRecord,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under `package`.
    ///
    /// The package name is canonicalized to upper case, so producers and
    /// prose-case scope strings agree. Record names are expected canonical
    /// already (producers emit them upper-case).
    pub fn insert(&mut self, package: &str, record: SymbolRecord) {
        self.entries.push(IndexEntry {
            package: package.to_uppercase(),
            record,
        });
    }

    /// All records matching `category` and exact canonical `name`, restricted
    /// to `package` when one is given, in insertion order.
    pub fn query<'a>(
        &'a self,
        category: SymbolCategory,
        package: Option<&str>,
        name: &str,
    ) -> impl Iterator<Item = &'a SymbolRecord> + 'a {
        let package = package.map(str::to_uppercase);
        let name = name.to_string();
        self.entries
            .iter()
            .filter(move |entry| {
                entry.record.category() == category
                    && entry.record.name() == name
                    && package.as_deref().is_none_or(|p| entry.package == p)
            })
            .map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
