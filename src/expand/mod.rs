//! Reference-macro expansion pass over document trees.
//!
//! This module walks an input tree depth-first and replaces every macro node:
//!
//! 1. `@doc` requests resolve a record and splice in its document
//! 2. `@package` scopes set the ambient package around their children
//! 3. `@param` highlights flatten into `param`-tagged code
//!
//! Expansion recurses into its own output (docstrings parse into fresh macro
//! nodes), so the returned tree is guaranteed macro-free. A depth limit turns
//! pathological self-referential docstrings into a hard error instead of
//! unbounded recursion.
//!
//! # Architecture
//!
//! - `errors` - hard failures ([`ExpandError`]) and inline error nodes
//! - `node` - record-to-document construction
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut expander = Expander::new(&index, &QuipuMarkup);
//! let expanded = expander.expand_document(doc)?;
//! ```

mod errors;
mod node;

use quipu_doc::{DocNode, ListItem, MacroNode, MarkupParser, Tag, TagSet};
use quipu_index::{SymbolIndex, tags};

use crate::resolve;

pub use errors::ExpandError;

/// Depth limit for macro re-expansion.
///
/// Depth counts how many macro replacements are stacked on one path, not how
/// deep the input tree nests: static structure is bounded by the input, only
/// macro output can diverge. Sixty-four levels is far past any real manual.
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Expansion pass context.
///
/// Holds what one pass needs: the read-only index, the markup dialect for
/// docstrings, and the ambient package scope. The scope is the one piece of
/// mutable state and lives exactly as long as a pass; concurrent passes each
/// own their context and may share the index freely.
pub struct Expander<'a> {
    index: &'a SymbolIndex,
    markup: &'a dyn MarkupParser,
    /// Current `@package` scope, unset outside any scope macro.
    package: Option<String>,
}

impl<'a> Expander<'a> {
    pub fn new(index: &'a SymbolIndex, markup: &'a dyn MarkupParser) -> Self {
        Self {
            index,
            markup,
            package: None,
        }
    }

    /// Expand every macro node in `doc`.
    ///
    /// # Errors
    ///
    /// Fails on malformed reference requests and on expansion that keeps
    /// producing macros past [`MAX_EXPANSION_DEPTH`]. Authoring mistakes
    /// (unknown tags, unresolved symbols) do not fail; they surface as
    /// `error`-tagged nodes in the output.
    #[tracing::instrument(skip_all, fields(symbols = self.index.len()))]
    pub fn expand_document(&mut self, doc: DocNode) -> Result<DocNode, ExpandError> {
        self.package = None;
        self.expand_node(doc, 0)
    }

    fn expand_node(&mut self, node: DocNode, depth: usize) -> Result<DocNode, ExpandError> {
        if depth > MAX_EXPANSION_DEPTH {
            return Err(ExpandError::RecursionLimit {
                limit: MAX_EXPANSION_DEPTH,
            });
        }
        match node {
            DocNode::Content { tags, children } => Ok(DocNode::Content {
                tags,
                children: self.expand_children(children, depth)?,
            }),
            DocNode::List { tags, items } => {
                let items = items
                    .into_iter()
                    .map(|item| {
                        Ok(ListItem::new(
                            item.tags,
                            self.expand_children(item.children, depth)?,
                        ))
                    })
                    .collect::<Result<Vec<_>, ExpandError>>()?;
                Ok(DocNode::List { tags, items })
            }
            leaf @ (DocNode::Text { .. } | DocNode::Code { .. }) => Ok(leaf),
            DocNode::Macro(mac) => self.expand_macro(mac, depth),
        }
    }

    fn expand_children(
        &mut self,
        children: Vec<DocNode>,
        depth: usize,
    ) -> Result<Vec<DocNode>, ExpandError> {
        children
            .into_iter()
            .map(|child| self.expand_node(child, depth))
            .collect()
    }

    /// Replace one macro node. Anything a macro produces or uncovers is
    /// expanded one level deeper before it is returned.
    fn expand_macro(&mut self, mac: MacroNode, depth: usize) -> Result<DocNode, ExpandError> {
        match mac {
            MacroNode::SymbolDoc { text } => {
                let replacement = self.expand_request(&text)?;
                self.expand_node(replacement, depth + 1)
            }
            MacroNode::PackageScope { package, children } => {
                tracing::debug!(package = %package, "entering package scope");
                let saved = self.package.replace(package);
                let result = self.expand_children(children, depth + 1);
                // Restore before propagating so a failed child cannot leak
                // scope into whatever the caller expands next.
                self.package = saved;
                Ok(DocNode::content(TagSet::new(), result?))
            }
            MacroNode::ParamHighlight { children } => {
                let expanded = self.expand_children(children, depth + 1)?;
                let mut text = String::new();
                for child in &expanded {
                    text.push_str(&child.plain_text());
                }
                Ok(DocNode::code(TagSet::of(&[Tag::Param]), text))
            }
        }
    }

    /// Resolve a `@doc` request into its replacement document.
    fn expand_request(&mut self, text: &str) -> Result<DocNode, ExpandError> {
        let mut tokens = text.split_whitespace();
        let (Some(type_tag), Some(symbol_name)) = (tokens.next(), tokens.next()) else {
            return Err(ExpandError::MalformedRequest {
                text: text.to_string(),
            });
        };
        // Tokens past the first two are reserved for producers; tokenized,
        // never consumed.
        let Some(category) = tags::category_for(type_tag) else {
            tracing::debug!(tag = type_tag, "unknown type tag in reference");
            return Ok(errors::no_type_error(type_tag));
        };
        let Some(record) =
            resolve::resolve(self.index, category, symbol_name, self.package.as_deref())
        else {
            tracing::debug!(symbol = symbol_name, "reference did not resolve");
            return Ok(errors::no_node_error(symbol_name));
        };
        Ok(node::expand_record(record, self.markup))
    }
}

/// Expand every macro node in `doc` against `index`, one-shot.
///
/// See [`Expander::expand_document`].
pub fn expand(
    doc: DocNode,
    index: &SymbolIndex,
    markup: &dyn MarkupParser,
) -> Result<DocNode, ExpandError> {
    Expander::new(index, markup).expand_document(doc)
}
