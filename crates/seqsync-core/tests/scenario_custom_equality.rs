//! Scenario: caller-supplied equality and callback observers
//!
//! # Invariants under test
//!
//! 1. Items equal under the predicate are kept, never re-inserted, even when
//!    their values differ.
//! 2. Three independent callbacks can stand in for an observer.
//! 3. One-shot edit scripts honor the predicate and policy they are given.

use seqsync_core::{
    edit_script, edit_script_with, AvoidTransientEmpty, Edit, FnObserver, Reconciler, Standard,
};

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    label: &'static str,
}

fn row(id: u32, label: &'static str) -> Row {
    Row { id, label }
}

fn same_id(a: &Row, b: &Row) -> bool {
    a.id == b.id
}

#[test]
fn predicate_match_keeps_existing_value() {
    let source = vec![row(1, "one"), row(2, "two")];
    let target = vec![row(2, "TWO"), row(1, "ONE")];

    let mut inserts = 0;
    let mut removes = 0;
    let mut moves = Vec::new();
    let out = {
        let observer = FnObserver::new(
            |_: &Row, _: usize| inserts += 1,
            |_: usize| removes += 1,
            |from: usize, to: usize| moves.push((from, to)),
        );
        let mut r = Reconciler::with_predicate(source, observer, same_id);
        r.synchronize_to_destination(&target).unwrap().to_vec()
    };

    assert_eq!(inserts, 0);
    assert_eq!(removes, 0);
    assert_eq!(moves, vec![(1, 0)]);
    // items are matched, not patched
    assert_eq!(out, vec![row(2, "two"), row(1, "one")]);
}

#[test]
fn with_equality_swaps_predicate() {
    let source = vec!["Roma".to_string(), "wien".to_string()];
    let target = vec!["WIEN".to_string(), "roma".to_string()];

    let mut r = Reconciler::new(source, seqsync_core::Silent)
        .with_equality(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    let out = r.synchronize_to_destination(&target).unwrap().to_vec();

    assert_eq!(out, vec!["wien".to_string(), "Roma".to_string()]);
    assert_eq!(r.last_report().unwrap().counts.moves, 1);
}

#[test]
fn edit_script_defaults_to_value_equality() {
    let edits = edit_script(&["a", "b"], &["b", "c"]);
    assert_eq!(
        edits,
        vec![
            Edit::Remove { position: 0 },
            Edit::Insert {
                item: "c",
                position: 1
            },
        ]
    );
}

#[test]
fn edit_script_with_policy() {
    let standard = edit_script_with(&["a"], &["b"], |x: &&str, y: &&str| x == y, Standard);
    assert_eq!(standard[0], Edit::Remove { position: 0 });

    let avoiding = edit_script_with(&["a"], &["b"], |x: &&str, y: &&str| x == y, AvoidTransientEmpty);
    assert_eq!(
        avoiding,
        vec![
            Edit::Insert {
                item: "b",
                position: 0
            },
            Edit::Remove { position: 1 },
        ]
    );
}

#[test]
fn edits_serialize_with_op_tag() {
    let edits = edit_script(&["x", "y"], &["y", "z"]);
    let json = serde_json::to_value(&edits).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "op": "remove", "position": 0 },
            { "op": "insert", "item": "z", "position": 1 }
        ])
    );

    let back: Vec<Edit<String>> = serde_json::from_value(json).unwrap();
    assert_eq!(back.len(), 2);
}
