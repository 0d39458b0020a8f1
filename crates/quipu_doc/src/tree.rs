//! Generic tagged document tree.
//!
//! This module defines the node types every pipeline stage exchanges: plain
//! content trees for finished documentation, and macro nodes for the
//! references the expansion engine still has to resolve. Nodes carry no
//! rendering information; renderers downstream key off tags alone.

use std::fmt;

// ============================================================================
// Tags
// ============================================================================

/// Semantic tag attached to document nodes.
///
/// The vocabulary is closed. Renderers and tests match on these spellings, so
/// new tags are a cross-cutting change, not a local one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    DocNode,
    Function,
    Macro,
    GenericFunction,
    Method,
    Operator,
    Struct,
    Class,
    Variable,
    Type,
    Name,
    LambdaList,
    TypeDef,
    Docstring,
    SlotList,
    Slot,
    Param,
    Error,
    NoType,
    NoNode,
    UnsupportedNodeError,
}

impl Tag {
    /// Every tag, in vocabulary order.
    pub const ALL: &'static [Tag] = &[
        Tag::DocNode,
        Tag::Function,
        Tag::Macro,
        Tag::GenericFunction,
        Tag::Method,
        Tag::Operator,
        Tag::Struct,
        Tag::Class,
        Tag::Variable,
        Tag::Type,
        Tag::Name,
        Tag::LambdaList,
        Tag::TypeDef,
        Tag::Docstring,
        Tag::SlotList,
        Tag::Slot,
        Tag::Param,
        Tag::Error,
        Tag::NoType,
        Tag::NoNode,
        Tag::UnsupportedNodeError,
    ];

    /// Canonical spelling, as emitted into rendered output classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::DocNode => "doc-node",
            Tag::Function => "function",
            Tag::Macro => "macro",
            Tag::GenericFunction => "generic-function",
            Tag::Method => "method",
            Tag::Operator => "operator",
            Tag::Struct => "struct",
            Tag::Class => "class",
            Tag::Variable => "variable",
            Tag::Type => "type",
            Tag::Name => "name",
            Tag::LambdaList => "lambda-list",
            Tag::TypeDef => "type-def",
            Tag::Docstring => "docstring",
            Tag::SlotList => "slot-list",
            Tag::Slot => "slot",
            Tag::Param => "param",
            Tag::Error => "error",
            Tag::NoType => "no-type",
            Tag::NoNode => "no-node",
            Tag::UnsupportedNodeError => "unsupported-node-error",
        }
    }

    /// Resolve a spelling back to a tag. Case-sensitive.
    pub fn from_spelling(spelling: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.as_str() == spelling)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small ordered set of tags.
///
/// Insertion order is preserved and duplicates are dropped, so display output
/// is stable for snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(tags: &[Tag]) -> Self {
        let mut set = Self::new();
        for &tag in tags {
            set.insert(tag);
        }
        set
    }

    pub fn insert(&mut self, tag: Tag) {
        if !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// One node of a document tree.
///
/// `Text` and `Code` are leaves holding literal text; `Code` renders in a
/// monospace context and is never re-parsed. `Macro` nodes are placeholders
/// the expansion engine replaces; a finished document contains none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Content { tags: TagSet, children: Vec<DocNode> },
    Text { tags: TagSet, text: String },
    Code { tags: TagSet, text: String },
    List { tags: TagSet, items: Vec<ListItem> },
    Macro(MacroNode),
}

/// One item of a `List` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub tags: TagSet,
    pub children: Vec<DocNode>,
}

impl ListItem {
    pub fn new(tags: TagSet, children: Vec<DocNode>) -> Self {
        Self { tags, children }
    }
}

/// Unexpanded reference macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroNode {
    /// `@doc(<type-tag> <symbol-name>)`: replace with the symbol's document.
    SymbolDoc { text: String },
    /// `@package(NAME){...}`: expand children under an ambient package scope.
    PackageScope { package: String, children: Vec<DocNode> },
    /// `@param{...}`: highlight a parameter name inside running prose.
    ParamHighlight { children: Vec<DocNode> },
}

impl DocNode {
    pub fn content(tags: TagSet, children: Vec<DocNode>) -> Self {
        DocNode::Content { tags, children }
    }

    /// Untagged text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text {
            tags: TagSet::new(),
            text: text.into(),
        }
    }

    pub fn code(tags: TagSet, text: impl Into<String>) -> Self {
        DocNode::Code {
            tags,
            text: text.into(),
        }
    }

    pub fn list(tags: TagSet, items: Vec<ListItem>) -> Self {
        DocNode::List { tags, items }
    }

    /// Tags of this node. Macro nodes carry none; they are replaced before
    /// anything renders.
    pub fn tags(&self) -> Option<&TagSet> {
        match self {
            DocNode::Content { tags, .. }
            | DocNode::Text { tags, .. }
            | DocNode::Code { tags, .. }
            | DocNode::List { tags, .. } => Some(tags),
            DocNode::Macro(_) => None,
        }
    }

    /// True if any macro node remains anywhere below (or at) this node.
    pub fn contains_macros(&self) -> bool {
        match self {
            DocNode::Macro(_) => true,
            DocNode::Text { .. } | DocNode::Code { .. } => false,
            DocNode::Content { children, .. } => children.iter().any(DocNode::contains_macros),
            DocNode::List { items, .. } => items
                .iter()
                .any(|item| item.children.iter().any(DocNode::contains_macros)),
        }
    }

    /// Concatenated literal text of the subtree, ignoring structure.
    ///
    /// Unexpanded `@doc` references contribute nothing; scope and highlight
    /// macros contribute their children's text.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.plain_text_into(&mut out);
        out
    }

    fn plain_text_into(&self, out: &mut String) {
        match self {
            DocNode::Text { text, .. } | DocNode::Code { text, .. } => out.push_str(text),
            DocNode::Content { children, .. } => {
                for child in children {
                    child.plain_text_into(out);
                }
            }
            DocNode::List { items, .. } => {
                for item in items {
                    for child in &item.children {
                        child.plain_text_into(out);
                    }
                }
            }
            DocNode::Macro(MacroNode::SymbolDoc { .. }) => {}
            DocNode::Macro(MacroNode::PackageScope { children, .. })
            | DocNode::Macro(MacroNode::ParamHighlight { children }) => {
                for child in children {
                    child.plain_text_into(out);
                }
            }
        }
    }

    /// Indented structural dump, one node per line. This is the stable test
    /// and snapshot surface; renderers live elsewhere.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    fn outline_into(&self, out: &mut String, depth: usize) {
        if !out.is_empty() {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            DocNode::Content { tags, children } => {
                out.push_str("content");
                push_tags(out, tags);
                for child in children {
                    child.outline_into(out, depth + 1);
                }
            }
            DocNode::Text { tags, text } => {
                out.push_str("text");
                push_tags(out, tags);
                out.push(' ');
                out.push_str(&format!("{text:?}"));
            }
            DocNode::Code { tags, text } => {
                out.push_str("code");
                push_tags(out, tags);
                out.push(' ');
                out.push_str(&format!("{text:?}"));
            }
            DocNode::List { tags, items } => {
                out.push_str("list");
                push_tags(out, tags);
                for item in items {
                    out.push('\n');
                    for _ in 0..depth + 1 {
                        out.push_str("  ");
                    }
                    out.push_str("item");
                    push_tags(out, &item.tags);
                    for child in &item.children {
                        child.outline_into(out, depth + 2);
                    }
                }
            }
            DocNode::Macro(MacroNode::SymbolDoc { text }) => {
                out.push_str(&format!("macro doc {text:?}"));
            }
            DocNode::Macro(MacroNode::PackageScope { package, children }) => {
                out.push_str(&format!("macro package {package:?}"));
                for child in children {
                    child.outline_into(out, depth + 1);
                }
            }
            DocNode::Macro(MacroNode::ParamHighlight { children }) => {
                out.push_str("macro param");
                for child in children {
                    child.outline_into(out, depth + 1);
                }
            }
        }
    }
}

fn push_tags(out: &mut String, tags: &TagSet) {
    if !tags.is_empty() {
        out.push_str(&format!(" [{tags}]"));
    }
}
