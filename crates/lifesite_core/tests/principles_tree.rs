use lifesite_core::hierarchy::{build_hierarchy, walk};
use lifesite_core::model::Principle;
use serde_json::json;
use std::collections::HashMap;

fn principles(value: serde_json::Value) -> Vec<Principle> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn children_nest_under_parents_in_input_order() {
    let records = principles(json!([
        {"id": 1, "title": "Health", "parent_id": null},
        {"id": 2, "title": "Sleep", "parent_id": "1"},
        {"id": 3, "title": "Work", "parent_id": ""},
        {"id": 4, "title": "Move", "parent_id": 1},
        {"id": 5, "title": "Eight hours", "parent_id": "2"}
    ]));
    let forest = build_hierarchy(&records);

    let roots: Vec<&str> = forest.iter().map(|n| n.record.title.as_str()).collect();
    assert_eq!(roots, vec!["Health", "Work"]);
    let health: Vec<&str> = forest[0].children.iter().map(|n| n.record.title.as_str()).collect();
    assert_eq!(health, vec!["Sleep", "Move"]);
    assert_eq!(forest[0].children[0].children[0].depth, 2);
    assert_eq!(forest[0].size(), 4);
}

#[test]
fn single_parentless_record_is_one_tree() {
    let records = principles(json!([{"id": "only", "title": "Solo"}]));
    let forest = build_hierarchy(&records);
    assert_eq!(forest.len(), 1);
    assert!(forest[0].children.is_empty());
}

#[test]
fn unresolved_parent_becomes_root() {
    let records = principles(json!([
        {"id": "a", "parent_id": "missing"},
        {"id": "b", "parent_id": "a"}
    ]));
    let forest = build_hierarchy(&records);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].record.id, "a");
    assert_eq!(forest[0].children[0].record.id, "b");
}

#[test]
fn cycles_terminate_and_keep_every_record_once() {
    let records = principles(json!([
        {"id": "a", "parent_id": "c"},
        {"id": "b", "parent_id": "a"},
        {"id": "c", "parent_id": "b"},
        {"id": "self", "parent_id": "self"},
        {"id": "d", "parent_id": "b"}
    ]));
    let forest = build_hierarchy(&records);

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for node in walk(&forest) {
        *seen.entry(node.record.id.as_str()).or_insert(0) += 1;
    }
    assert_eq!(seen.len(), records.len());
    assert!(seen.values().all(|count| *count == 1));
    assert!(forest.iter().any(|root| root.record.id == "self"));
}

#[test]
fn duplicate_ids_resolve_to_first_occurrence() {
    let records = principles(json!([
        {"id": "p", "title": "first"},
        {"id": "p", "title": "second"},
        {"id": "kid", "parent_id": "p"}
    ]));
    let forest = build_hierarchy(&records);
    let total: usize = forest.iter().map(|root| root.size()).sum();
    assert_eq!(total, 3);
    assert_eq!(forest[0].record.title, "first");
    assert_eq!(forest[0].children[0].record.id, "kid");
}
