//! Property tests for work-list flattening and detail formatting.
//!
//! Covered (exactly):
//! - Fault trees up to depth 4, 0..4 children per aggregate, short ASCII
//!   messages on every node.
//! - `Fault::flatten` against a reference recursive flattening: same
//!   terminals, same left-to-right order, checked by pointer identity.
//! - `format_error_detail` against the first terminal's invariant rendering,
//!   falling back to the root's own rendering when no terminal exists.
//! - Byte-stability of repeated formatting of the same tree.
//!
//! Not covered:
//! - Wrapped foreign errors with `source()` chains (unit tests in
//!   `src/invariant.rs`).
//! - Pathological nesting depth (unit tests in `src/flatten.rs` and the
//!   end-to-end suite).

use proptest::prelude::*;

use faultline::{format_error_detail, Fault, ToInvariantString};

fn message() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,23}"
}

fn fault_tree() -> impl Strategy<Value = Fault> {
    let leaf = message().prop_map(|m| Fault::msg(m));
    leaf.prop_recursive(4, 24, 4, |inner| {
        (message(), proptest::collection::vec(inner, 0..4))
            .prop_map(|(message, children)| Fault::aggregate_with_message(message, children))
    })
}

fn reference_flatten(fault: &Fault) -> Vec<&Fault> {
    if fault.is_aggregate() {
        fault
            .children()
            .iter()
            .flat_map(reference_flatten)
            .collect()
    } else {
        vec![fault]
    }
}

proptest! {
    #[test]
    fn flatten_matches_the_recursive_reference(fault in fault_tree()) {
        let got = fault.flatten();
        let want = reference_flatten(&fault);
        prop_assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(&want) {
            prop_assert!(std::ptr::eq(*g, *w));
        }
    }

    #[test]
    fn detail_is_first_terminal_or_root_rendering(fault in fault_tree()) {
        let expected = match reference_flatten(&fault).first() {
            Some(first) => first.to_invariant_string(),
            None => fault.to_invariant_string(),
        };
        prop_assert_eq!(format_error_detail(&fault), expected);
    }

    #[test]
    fn formatting_is_byte_stable(fault in fault_tree()) {
        prop_assert_eq!(format_error_detail(&fault), format_error_detail(&fault));
    }
}

#[test]
fn sibling_aggregates_flatten_in_place() {
    let tree = Fault::aggregate([
        Fault::aggregate([Fault::msg("c1"), Fault::msg("c2")]),
        Fault::msg("c3"),
    ]);
    let order: Vec<String> = tree.flatten().iter().map(|f| f.to_string()).collect();
    assert_eq!(order, ["c1", "c2", "c3"]);
    assert_eq!(format_error_detail(&tree), "c1");
}
