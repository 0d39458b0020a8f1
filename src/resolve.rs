//! Symbol resolution against the pre-built index.
//!
//! Resolution canonicalizes the author's spelling and defers entirely to the
//! index: no scoring, no fuzzy matching, no fallback search. The first
//! inserted match wins, so resolution is deterministic across runs.

use quipu_index::{SymbolCategory, SymbolIndex, SymbolRecord};

/// Find the record a reference names.
///
/// `symbol_name` is canonicalized to upper case before lookup, matching the
/// case convention index producers emit. With `package` set, only records
/// from that package match; otherwise every package is searched in insertion
/// order.
///
/// Returns `None` when nothing matches. Reporting is the caller's concern.
pub fn resolve<'a>(
    index: &'a SymbolIndex,
    category: SymbolCategory,
    symbol_name: &str,
    package: Option<&str>,
) -> Option<&'a SymbolRecord> {
    let canonical = symbol_name.to_uppercase();
    tracing::trace!(
        ?category,
        symbol = %canonical,
        package = package.unwrap_or("*"),
        "resolving reference"
    );
    index.query(category, package, &canonical).next()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quipu_index::{OperatorDetails, RecordDetails, SymbolRecord};

    fn sample_index() -> SymbolIndex {
        let mut index = SymbolIndex::new();
        index.insert(
            "ALPHA",
            SymbolRecord::Function(OperatorDetails::new("FROB", "Alpha frob.", vec![])),
        );
        index.insert(
            "BETA",
            SymbolRecord::Function(OperatorDetails::new("FROB", "Beta frob.", vec![])),
        );
        index.insert(
            "BETA",
            SymbolRecord::Macro(OperatorDetails::new("FROB", "Beta frob macro.", vec![])),
        );
        index.insert(
            "BETA",
            SymbolRecord::Class(RecordDetails::new("FROB", "Beta frob class.", vec![])),
        );
        index
    }

    #[test]
    fn prose_case_resolves_canonical_records() {
        let index = sample_index();
        let record = resolve(&index, SymbolCategory::Function, "frob", None).unwrap();
        assert_eq!(record.name(), "FROB");
        let record = resolve(&index, SymbolCategory::Function, "Frob", None).unwrap();
        assert_eq!(record.name(), "FROB");
    }

    #[test]
    fn category_separates_same_named_records() {
        let index = sample_index();
        let record = resolve(&index, SymbolCategory::Macro, "frob", None).unwrap();
        assert_eq!(record.docstring(), "Beta frob macro.");
        let record = resolve(&index, SymbolCategory::Class, "frob", None).unwrap();
        assert_eq!(record.docstring(), "Beta frob class.");
    }

    #[test]
    fn first_inserted_match_wins_without_a_scope() {
        let index = sample_index();
        let record = resolve(&index, SymbolCategory::Function, "frob", None).unwrap();
        assert_eq!(record.docstring(), "Alpha frob.");
    }

    #[test]
    fn package_scope_narrows_resolution() {
        let index = sample_index();
        let record = resolve(&index, SymbolCategory::Function, "frob", Some("BETA")).unwrap();
        assert_eq!(record.docstring(), "Beta frob.");
        assert!(resolve(&index, SymbolCategory::Function, "frob", Some("GAMMA")).is_none());
    }

    #[test]
    fn unknown_symbols_miss() {
        let index = sample_index();
        assert!(resolve(&index, SymbolCategory::Function, "blorb", None).is_none());
        assert!(resolve(&index, SymbolCategory::Variable, "frob", None).is_none());
    }
}
