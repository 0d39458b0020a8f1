//! Markup frontend for docstrings and hand-written documentation.
//!
//! Handles the built-in dialect:
//! - Paragraphs split on blank lines
//! - `` `text` `` code spans
//! - `@doc(<type-tag> <symbol-name>)` reference macros
//! - `@package(NAME){...}` scope macros
//! - `@param{...}` parameter highlights
//!
//! Parsing is total: malformed markup degrades to literal text, it never
//! errors. Docstrings come from arbitrary third-party sources, so a stray
//! `@` or an unclosed backtick must not take the whole document down.
//!
//! Directive bodies are parsed as inline content; paragraph splitting applies
//! outside directives only, so a directive cannot span a blank line.

use crate::tree::{DocNode, MacroNode, TagSet};

/// Boundary between the expansion engine and whatever markup dialect the
/// embedding tool uses for docstrings.
pub trait MarkupParser {
    /// Parse raw docstring text into a document fragment.
    fn parse(&self, text: &str) -> DocNode;
}

/// The built-in dialect described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuipuMarkup;

impl MarkupParser for QuipuMarkup {
    fn parse(&self, text: &str) -> DocNode {
        parse(text)
    }
}

/// Parse `text` in the built-in dialect.
///
/// Returns an untagged content node holding one untagged content node per
/// paragraph. Empty input yields an empty content node.
pub fn parse(text: &str) -> DocNode {
    tracing::trace!(len = text.len(), "parsing markup");
    let paragraphs = split_paragraphs(text)
        .into_iter()
        .map(|block| {
            let children = Parser::new(&block).parse_inline(false);
            DocNode::content(TagSet::new(), children)
        })
        .collect();
    DocNode::content(TagSet::new(), paragraphs)
}

/// Group lines into blocks separated by blank lines.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

// ============================================================================
// Inline parser
// ============================================================================

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Parse inline content. With `stop_at_brace`, stop (without consuming)
    /// at the first `}` that does not belong to a nested directive.
    fn parse_inline(&mut self, stop_at_brace: bool) -> Vec<DocNode> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '}' if stop_at_brace => break,
                '`' => {
                    self.advance();
                    let start = self.pos;
                    match self.scan_until('`') {
                        Some(code) => {
                            flush_text(&mut nodes, &mut text);
                            nodes.push(DocNode::code(TagSet::new(), code));
                        }
                        // Unclosed span: the backtick was literal after all.
                        None => {
                            self.pos = start;
                            text.push('`');
                        }
                    }
                }
                '@' => {
                    let start = self.pos;
                    match self.parse_directive() {
                        Some(node) => {
                            flush_text(&mut nodes, &mut text);
                            nodes.push(node);
                        }
                        None => {
                            self.pos = start + 1;
                            text.push('@');
                        }
                    }
                }
                _ => {
                    self.advance();
                    text.push(c);
                }
            }
        }

        flush_text(&mut nodes, &mut text);
        nodes
    }

    /// Parse one directive starting at `@`. Returns `None` on any malformed
    /// shape; the caller rewinds and keeps the text literal.
    fn parse_directive(&mut self) -> Option<DocNode> {
        self.advance();
        let name = self.scan_name();
        match name.as_str() {
            "doc" => {
                self.expect('(')?;
                let text = self.scan_until(')')?;
                Some(DocNode::Macro(MacroNode::SymbolDoc {
                    text: text.trim().to_string(),
                }))
            }
            "package" => {
                self.expect('(')?;
                let package = self.scan_until(')')?;
                self.expect('{')?;
                let children = self.parse_inline(true);
                self.expect('}')?;
                Some(DocNode::Macro(MacroNode::PackageScope {
                    package: package.trim().to_string(),
                    children,
                }))
            }
            "param" => {
                self.expect('{')?;
                let children = self.parse_inline(true);
                self.expect('}')?;
                Some(DocNode::Macro(MacroNode::ParamHighlight { children }))
            }
            _ => None,
        }
    }

    /// Scan a directive name: ASCII letters and hyphens.
    fn scan_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() || c == '-' {
                self.advance();
                name.push(c);
            } else {
                break;
            }
        }
        name
    }

    /// Consume up to and including `terminator`, returning the text before
    /// it. `None` if the paragraph ends first.
    fn scan_until(&mut self, terminator: char) -> Option<String> {
        let mut out = String::new();
        while let Some(c) = self.advance() {
            if c == terminator {
                return Some(out);
            }
            out.push(c);
        }
        None
    }

    fn expect(&mut self, want: char) -> Option<()> {
        if self.peek() == Some(want) {
            self.advance();
            Some(())
        } else {
            None
        }
    }
}

fn flush_text(nodes: &mut Vec<DocNode>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(DocNode::text(std::mem::take(text)));
    }
}
