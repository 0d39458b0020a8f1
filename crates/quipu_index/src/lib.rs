//! Shared symbol vocabulary and index for the quipu documentation engine.
//!
//! This crate is intentionally small and dependency-free. It defines the data
//! an index producer (a source parser run ahead of expansion) emits, and the
//! read-only index the expansion engine resolves references against.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no engine
//!   types. Producers fill a [`SymbolIndex`]; the engine only queries it.
//! - Canonical case is upper case for symbol and package names, matching the
//!   source-language convention the records come from.

pub mod index;
pub mod record;
pub mod tags;

pub use index::SymbolIndex;
pub use record::{
    OperatorDetails, RecordDetails, SlotRecord, SymbolCategory, SymbolRecord, VariableDetails,
};
