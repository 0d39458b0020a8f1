#![forbid(unsafe_code)]
//! Quipu Documentation Expansion Engine
//!
//! Quipu turns annotated manuals into self-contained documents. Input trees
//! carry reference macros (`@doc`, `@package`, `@param`); this crate resolves
//! them against a symbol index and splices in generated per-symbol documents,
//! producing a macro-free tagged tree ready for any emitter.
//!
//! ## Example
//!
//! ```
//! use quipu::{QuipuMarkup, SymbolIndex, SymbolRecord, expand};
//! use quipu_index::OperatorDetails;
//!
//! let mut index = SymbolIndex::new();
//! index.insert(
//!     "APP",
//!     SymbolRecord::Function(OperatorDetails::new(
//!         "MAKE-WIDGET",
//!         "Builds a widget.",
//!         vec!["NAME".to_string()],
//!     )),
//! );
//!
//! let doc = quipu_doc::markup::parse("See @doc(function make-widget).");
//! let expanded = expand(doc, &index, &QuipuMarkup)?;
//!
//! assert!(!expanded.contains_macros());
//! assert!(expanded.plain_text().contains("make-widget"));
//! # Ok::<(), quipu::ExpandError>(())
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Authoring
//!   mistakes in input documents become `error`-tagged output nodes, never panics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents an engine bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod expand;
pub mod resolve;

pub use expand::{ExpandError, Expander, MAX_EXPANSION_DEPTH, expand};

pub use quipu_doc::{DocNode, ListItem, MacroNode, MarkupParser, QuipuMarkup, Tag, TagSet};
pub use quipu_index::{SymbolIndex, SymbolRecord};
