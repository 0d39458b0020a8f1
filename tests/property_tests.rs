//! Property-based tests for the expansion engine
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use quipu::{
    DocNode, ListItem, MacroNode, QuipuMarkup, SymbolIndex, SymbolRecord, Tag, TagSet, expand,
};
use quipu_index::{OperatorDetails, tags};

// Note: Record-shape coverage lives in the engine's unit tests, which can
// build records directly. See tests/expand_snapshot_tests.rs for full-document
// shape review via golden snapshots.

// =============================================================================
// Expansion Properties
// =============================================================================

#[cfg(test)]
mod expansion_tests {
    use super::*;

    /// Property: Expansion is idempotent (expand(expand(x)) == expand(x))
    #[test]
    fn expansion_is_idempotent_on_a_small_manual() {
        let mut index = SymbolIndex::new();
        index.insert(
            "APP",
            SymbolRecord::Function(OperatorDetails::new(
                "FROB",
                "Frobnicates @param{item} with `care`.",
                vec!["ITEM".to_string()],
            )),
        );

        let source = "Intro.\n\n@package(APP){@doc(function frob)}";
        let once = expand(quipu_doc::markup::parse(source), &index, &QuipuMarkup)
            .expect("First expansion failed");
        let twice = expand(once.clone(), &index, &QuipuMarkup).expect("Second expansion failed");

        assert_eq!(once, twice, "Expansion should be idempotent");
    }

    /// Property: Chained docstring references reach a macro-free fixed point
    #[test]
    fn chained_references_reach_a_fixed_point() {
        let mut index = SymbolIndex::new();
        index.insert(
            "APP",
            SymbolRecord::Function(OperatorDetails::new(
                "OUTER",
                "Delegates to @doc(function middle).",
                vec![],
            )),
        );
        index.insert(
            "APP",
            SymbolRecord::Function(OperatorDetails::new(
                "MIDDLE",
                "Delegates to @doc(function inner).",
                vec![],
            )),
        );
        index.insert(
            "APP",
            SymbolRecord::Function(OperatorDetails::new("INNER", "Does the work.", vec![])),
        );

        let expanded = expand(
            quipu_doc::markup::parse("@doc(function outer)"),
            &index,
            &QuipuMarkup,
        )
        .expect("Expansion failed");

        assert!(!expanded.contains_macros());
        assert!(expanded.plain_text().contains("Does the work."));
    }

    /// Property: Empty or whitespace-only input expands without error
    #[test]
    fn expansion_handles_empty_input() {
        let index = SymbolIndex::new();
        let empty_cases = vec!["", "   ", "\n\n\n", "\t\t"];

        for source in empty_cases {
            let expanded = expand(quipu_doc::markup::parse(source), &index, &QuipuMarkup)
                .expect("Empty input should expand");
            assert!(!expanded.contains_macros());
        }
    }
}

// =============================================================================
// Proptest Strategies
// =============================================================================

#[cfg(test)]
mod proptest_strategies {
    use super::*;

    // Strategy for generating canonical (upper-case) symbol names
    fn symbol_name_strategy() -> impl Strategy<Value = String> {
        "[A-Z][A-Z0-9-]{0,8}"
    }

    // Strategy for generating prose with no markup metacharacters
    fn prose_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z ,.]{0,24}"
    }

    // Strategy for generating macro-free document trees
    fn doc_tree_strategy() -> impl Strategy<Value = DocNode> {
        let leaf = prop_oneof![
            prose_strategy().prop_map(|text| DocNode::text(text)),
            "[a-z-]{1,12}".prop_map(|text| DocNode::code(TagSet::new(), text)),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4)
                    .prop_map(|children| DocNode::content(TagSet::new(), children)),
                prop::collection::vec(inner, 0..3).prop_map(|children| {
                    DocNode::list(
                        TagSet::of(&[Tag::SlotList]),
                        vec![ListItem::new(TagSet::of(&[Tag::Slot]), children)],
                    )
                }),
            ]
        })
    }

    proptest! {
        /// Property: Macro-free trees pass through expansion unchanged
        #[test]
        fn macro_free_trees_expand_unchanged(tree in doc_tree_strategy()) {
            let index = SymbolIndex::new();
            let expanded = expand(tree.clone(), &index, &QuipuMarkup).expect("Expansion failed");
            prop_assert_eq!(expanded, tree);
        }

        /// Property: Tag resolution is total and inverts cleanly
        #[test]
        fn tag_resolution_is_total(tag in "[ -~]{0,12}") {
            if let Some(category) = tags::category_for(&tag) {
                // Known spellings invert back to themselves.
                prop_assert_eq!(tags::tag_for(category), Some(tag.as_str()));
            }
        }

        /// Property: References to indexed functions always resolve
        #[test]
        fn generated_references_resolve(
            name in symbol_name_strategy(),
            docstring in prose_strategy()
        ) {
            let mut index = SymbolIndex::new();
            index.insert(
                "APP",
                SymbolRecord::Function(OperatorDetails::new(
                    name.as_str(),
                    docstring.as_str(),
                    vec![],
                )),
            );

            let source = format!("@doc(function {name})");
            let expanded = expand(quipu_doc::markup::parse(&source), &index, &QuipuMarkup)
                .expect("Expansion failed");

            prop_assert!(!expanded.contains_macros());
            prop_assert!(expanded.plain_text().contains(&name.to_lowercase()));
        }

        /// Property: Tokens past the symbol name never change the result
        #[test]
        fn extra_request_tokens_are_ignored(junk in "[a-z ]{0,16}") {
            let mut index = SymbolIndex::new();
            index.insert(
                "APP",
                SymbolRecord::Function(OperatorDetails::new("FROB", "Frobnicates.", vec![])),
            );

            let plain = DocNode::Macro(MacroNode::SymbolDoc {
                text: "function frob".to_string(),
            });
            let padded = DocNode::Macro(MacroNode::SymbolDoc {
                text: format!("function frob {junk}"),
            });

            let a = expand(plain, &index, &QuipuMarkup).expect("Expansion failed");
            let b = expand(padded, &index, &QuipuMarkup).expect("Expansion failed");
            prop_assert_eq!(a, b);
        }

        /// Property: Unknown type tags degrade inline instead of failing
        #[test]
        fn unknown_tags_degrade_inline(
            tag in "[a-z]{1,10}".prop_filter("Not a registered tag", |t| {
                tags::category_for(t).is_none()
            })
        ) {
            let index = SymbolIndex::new();
            let doc = DocNode::Macro(MacroNode::SymbolDoc {
                text: format!("{tag} frob"),
            });
            let expanded = expand(doc, &index, &QuipuMarkup).expect("Expansion failed");
            prop_assert!(expanded.plain_text().contains(&tag));
        }

        /// Property: Requests without two tokens always fail hard
        #[test]
        fn short_requests_always_fail(ws in "[ \t]{0,6}") {
            let index = SymbolIndex::new();
            let doc = DocNode::Macro(MacroNode::SymbolDoc { text: ws.clone() });
            let result = expand(doc, &index, &QuipuMarkup);
            prop_assert!(result.is_err());
        }
    }
}
