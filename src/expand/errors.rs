//! Expansion failures and inline error nodes.
//!
//! Authoring mistakes (a tag outside the vocabulary, a symbol the index does
//! not know) become error-tagged nodes in the output document, so one typo
//! cannot take a whole manual down. Structural defects (malformed requests,
//! runaway self-reference) abort the pass with [`ExpandError`].

use miette::Diagnostic;
use thiserror::Error;

use quipu_doc::{DocNode, Tag, TagSet};

/// Hard failure of an expansion pass.
#[derive(Debug, Error, Diagnostic)]
pub enum ExpandError {
    /// A reference request did not have the `<type-tag> <symbol-name>` shape.
    /// Requests come from tooling, not prose, so this is a producer bug.
    #[error("malformed symbol reference `{text}`: expected `<type-tag> <symbol-name>`")]
    #[diagnostic(code(quipu::expand::malformed_request))]
    MalformedRequest { text: String },

    /// Macro output kept producing new macros past the depth limit.
    #[error("expansion exceeded {limit} levels; a docstring reference expands into itself")]
    #[diagnostic(code(quipu::expand::recursion_limit))]
    RecursionLimit { limit: usize },
}

/// Inline error for a request naming a tag outside the vocabulary.
pub fn no_type_error(type_tag: &str) -> DocNode {
    inline_error(Tag::NoType, "No type with name ", type_tag)
}

/// Inline error for a request no record matched.
pub fn no_node_error(symbol_name: &str) -> DocNode {
    inline_error(Tag::NoNode, "No node with name ", symbol_name)
}

/// Inline error for record kinds the expander cannot document yet.
pub fn unsupported_node_error(kind_name: &str) -> DocNode {
    DocNode::Text {
        tags: TagSet::of(&[Tag::Error, Tag::UnsupportedNodeError]),
        text: format!("Unsupported node type {kind_name}."),
    }
}

fn inline_error(kind: Tag, message: &'static str, offender: &str) -> DocNode {
    DocNode::content(
        TagSet::of(&[Tag::Error, kind]),
        vec![
            DocNode::text(message),
            DocNode::code(TagSet::new(), offender),
            DocNode::text("."),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn inline_errors_carry_the_offending_spelling() {
        let node = no_type_error("widget");
        assert!(node.tags().unwrap().contains(Tag::Error));
        assert!(node.tags().unwrap().contains(Tag::NoType));
        assert_eq!(node.plain_text(), "No type with name widget.");

        let node = no_node_error("blorb");
        assert!(node.tags().unwrap().contains(Tag::NoNode));
        assert_eq!(node.plain_text(), "No node with name blorb.");
    }

    #[test]
    fn unsupported_kinds_become_a_text_leaf() {
        let node = unsupported_node_error("condition");
        assert!(matches!(&node, DocNode::Text { text, .. } if text == "Unsupported node type condition."));
        assert!(node.tags().unwrap().contains(Tag::UnsupportedNodeError));
    }

    #[test]
    fn hard_errors_render_with_context() {
        let err = ExpandError::MalformedRequest {
            text: "function".to_string(),
        };
        assert!(err.to_string().contains("`function`"));

        let err = ExpandError::RecursionLimit { limit: 64 };
        assert!(err.to_string().contains("64"));
    }
}
