//! Type-tag vocabulary for symbol references.
//!
//! This registry covers the author-facing tag spellings (`function`, `macro`,
//! `cstruct`, ...) that select which kind of record a reference documents.
//!
//! ## Notes
//! - Lookup via [`category_for`] is **case-sensitive**; tags are always lower case.
//! - The vocabulary is closed: a spelling outside this table is an authoring
//!   error, reported inline by the expansion engine rather than resolved loosely.
//! - Not every [`SymbolCategory`] has a tag. `Condition` records exist in
//!   indexes, but the vocabulary has no spelling for them yet.
//!
//! ## Examples
//! ```rust
//! use quipu_index::tags;
//! use quipu_index::SymbolCategory;
//!
//! assert_eq!(tags::category_for("function"), Some(SymbolCategory::Function));
//! assert_eq!(tags::category_for("cstruct"), Some(SymbolCategory::ForeignStruct));
//! assert_eq!(tags::category_for("condition"), None);
//! ```

use crate::record::SymbolCategory;

/// Metadata for one author-facing type tag.
#[derive(Debug, Clone, Copy)]
pub struct TypeTagInfo {
    pub tag: &'static str,
    pub category: SymbolCategory,
    pub description: &'static str,
}

/// Registry of author-facing type tags.
pub const TYPE_TAGS: &[TypeTagInfo] = &[
    info(
        "function",
        SymbolCategory::Function,
        "Ordinary function definition.",
    ),
    info("macro", SymbolCategory::Macro, "Macro definition."),
    info(
        "generic-function",
        SymbolCategory::GenericFunction,
        "Generic function (dispatching on argument types).",
    ),
    info(
        "method",
        SymbolCategory::Method,
        "Method of a generic function.",
    ),
    info(
        "variable",
        SymbolCategory::Variable,
        "Special or global variable binding.",
    ),
    info("struct", SymbolCategory::Struct, "Structure type."),
    info("class", SymbolCategory::Class, "Class definition."),
    info("type", SymbolCategory::Type, "Named type definition."),
    info(
        "cfunction",
        SymbolCategory::ForeignFunction,
        "Foreign (C) function binding.",
    ),
    info(
        "ctype",
        SymbolCategory::ForeignType,
        "Foreign (C) type alias.",
    ),
    info(
        "cstruct",
        SymbolCategory::ForeignStruct,
        "Foreign (C) structure type.",
    ),
    info(
        "cunion",
        SymbolCategory::ForeignUnion,
        "Foreign (C) union type.",
    ),
    info(
        "cenum",
        SymbolCategory::ForeignEnum,
        "Foreign (C) enumeration type.",
    ),
    info(
        "cbitfield",
        SymbolCategory::ForeignBitfield,
        "Foreign (C) bitfield type.",
    ),
];

/// Resolve a tag spelling to a [`SymbolCategory`].
///
/// ## Parameters
/// - `tag`: Candidate tag spelling, as written by the documentation author.
///
/// ## Returns
/// - `Some(SymbolCategory)` if the spelling matches this registry.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn category_for(tag: &str) -> Option<SymbolCategory> {
    TYPE_TAGS.iter().find(|t| t.tag == tag).map(|t| t.category)
}

/// Return the tag spelling for a [`SymbolCategory`], if the vocabulary has one.
///
/// ## Parameters
/// - `category`: Record kind.
///
/// ## Returns
/// - `Some(&str)` with the tag spelling.
/// - `None` for kinds the vocabulary cannot name (e.g. `Condition`).
pub fn tag_for(category: SymbolCategory) -> Option<&'static str> {
    TYPE_TAGS
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.tag)
}

const fn info(
    tag: &'static str,
    category: SymbolCategory,
    description: &'static str,
) -> TypeTagInfo {
    TypeTagInfo {
        tag,
        category,
        description,
    }
}
