//! Shared document model for the quipu documentation engine: tagged trees
//! and the markup frontend that produces them.
//!
//! This crate is dependency-light and intended for reuse across the engine,
//! index producers, and future renderers.
//!
//! ## Notes
//! - This crate is intentionally "structure-only": it does not resolve
//!   symbols or expand references. That lives in the engine crate.
//! - The tag vocabulary is closed; see [`tree::Tag`].
//!
//! ## Examples
//! ```rust
//! use quipu_doc::markup;
//!
//! let doc = markup::parse("call `frob` with @param{count}");
//! assert!(doc.contains_macros());
//! assert_eq!(doc.plain_text(), "call frob with count");
//! ```

pub mod markup;
pub mod tree;

pub use markup::{MarkupParser, QuipuMarkup};
pub use tree::{DocNode, ListItem, MacroNode, Tag, TagSet};
