//! Record-to-document expansion.
//!
//! Builds the replacement subtree for one resolved symbol record. The shapes
//! are fixed per record kind: operators get name, lambda list, and docstring;
//! record types get name, docstring, and a slot list. Outputs may contain
//! fresh macro nodes (docstrings are parsed as markup), so the engine runs
//! them through expansion again before splicing.

use quipu_doc::{DocNode, ListItem, MarkupParser, Tag, TagSet};
use quipu_index::{OperatorDetails, RecordDetails, SlotRecord, SymbolRecord, VariableDetails};

use super::errors;

/// Whether slot items carry the slot docstring.
///
/// Struct slots never do, even when the record has one; class slots always
/// do, even when it is empty. The asymmetry is load-bearing for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotDocstrings {
    Emit,
    Omit,
}

/// Build the document for one record.
///
/// Total: every record kind maps to some node. Kinds without a fixed shape
/// degrade to a visible placeholder instead of failing the document.
pub(super) fn expand_record(record: &SymbolRecord, markup: &dyn MarkupParser) -> DocNode {
    match record {
        SymbolRecord::Function(op) => operator_doc(op, Tag::Function, markup),
        SymbolRecord::Macro(op) => operator_doc(op, Tag::Macro, markup),
        SymbolRecord::GenericFunction(op) => operator_doc(op, Tag::GenericFunction, markup),
        SymbolRecord::Method(op) => operator_doc(op, Tag::Method, markup),
        SymbolRecord::Type(op) => type_doc(op, markup),
        SymbolRecord::Variable(var) => variable_doc(var, markup),
        SymbolRecord::Struct(rec) => record_doc(rec, Tag::Struct, SlotDocstrings::Omit, markup),
        SymbolRecord::Class(rec) => record_doc(rec, Tag::Class, SlotDocstrings::Emit, markup),
        // Foreign kinds reuse the shape of their structural analogue.
        SymbolRecord::ForeignFunction(op) => operator_doc(op, Tag::Operator, markup),
        SymbolRecord::ForeignType(op) => type_doc(op, markup),
        SymbolRecord::ForeignStruct(rec)
        | SymbolRecord::ForeignUnion(rec)
        | SymbolRecord::ForeignEnum(rec)
        | SymbolRecord::ForeignBitfield(rec) => {
            record_doc(rec, Tag::Struct, SlotDocstrings::Omit, markup)
        }
        // Index producers gain record kinds faster than the tag vocabulary
        // grows; Condition lands here today.
        other => errors::unsupported_node_error(other.kind_name()),
    }
}

fn operator_doc(op: &OperatorDetails, kind: Tag, markup: &dyn MarkupParser) -> DocNode {
    DocNode::content(
        TagSet::of(&[Tag::DocNode, kind]),
        vec![
            name_node(&op.name),
            lambda_list_node(&op.lambda_list, TagSet::of(&[Tag::LambdaList])),
            docstring_node(&op.docstring, markup),
        ],
    )
}

/// Same shape as an operator, with the lambda list doubling as the type
/// definition form.
fn type_doc(op: &OperatorDetails, markup: &dyn MarkupParser) -> DocNode {
    DocNode::content(
        TagSet::of(&[Tag::DocNode, Tag::Type]),
        vec![
            name_node(&op.name),
            lambda_list_node(&op.lambda_list, TagSet::of(&[Tag::LambdaList, Tag::TypeDef])),
            docstring_node(&op.docstring, markup),
        ],
    )
}

fn variable_doc(var: &VariableDetails, markup: &dyn MarkupParser) -> DocNode {
    DocNode::content(
        TagSet::of(&[Tag::DocNode, Tag::Variable]),
        vec![
            name_node(&var.name),
            docstring_node(&var.docstring, markup),
        ],
    )
}

fn record_doc(
    rec: &RecordDetails,
    kind: Tag,
    slot_docs: SlotDocstrings,
    markup: &dyn MarkupParser,
) -> DocNode {
    let items = rec
        .slots
        .iter()
        .map(|slot| slot_item(slot, slot_docs, markup))
        .collect();
    DocNode::content(
        TagSet::of(&[Tag::DocNode, kind]),
        vec![
            name_node(&rec.name),
            docstring_node(&rec.docstring, markup),
            DocNode::list(TagSet::of(&[Tag::SlotList]), items),
        ],
    )
}

fn slot_item(slot: &SlotRecord, slot_docs: SlotDocstrings, markup: &dyn MarkupParser) -> ListItem {
    let mut children = vec![DocNode::code(TagSet::of(&[Tag::Name]), humanize(&slot.name))];
    if slot_docs == SlotDocstrings::Emit {
        children.push(docstring_node(&slot.docstring, markup));
    }
    ListItem::new(TagSet::of(&[Tag::Slot]), children)
}

fn name_node(name: &str) -> DocNode {
    DocNode::code(TagSet::of(&[Tag::Name]), humanize(name))
}

fn lambda_list_node(lambda_list: &[String], tags: TagSet) -> DocNode {
    let params: Vec<String> = lambda_list.iter().map(|p| humanize(p)).collect();
    DocNode::code(tags, format!("({})", params.join(" ")))
}

/// Parse the docstring as markup and splice its paragraphs under a
/// `docstring` node. Empty docstrings yield an empty (but present) node.
fn docstring_node(text: &str, markup: &dyn MarkupParser) -> DocNode {
    let children = match markup.parse(text) {
        DocNode::Content { tags, children } if tags.is_empty() => children,
        other => vec![other],
    };
    DocNode::content(TagSet::of(&[Tag::Docstring]), children)
}

/// Records store canonical upper case; readers get the display convention.
fn humanize(name: &str) -> String {
    name.to_lowercase()
}
