//! Unit tests for key-indexed views and key listing.

use std::collections::{BTreeMap, HashMap, HashSet};

use keyalg::{group_by, index_by, keys, to_map, to_set, values};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: &'static str,
}

const PERSONS: [Person; 3] = [
    Person { id: 1, name: "tom" },
    Person { id: 2, name: "jerry" },
    Person { id: 3, name: "lili" },
];

// =============================================================================
// to_map
// =============================================================================

#[rstest]
fn test_to_map_identity_key() {
    let index = to_map(&[1, 2, 3, 4, 5], |value| *value);
    assert_eq!(index.len(), 5);
    for (key, value) in &index {
        assert_eq!(key, value);
    }
}

#[rstest]
fn test_to_map_by_field() {
    let index = to_map(&PERSONS, |person| person.id);
    assert_eq!(index[&1].name, "tom");
    assert_eq!(index[&3].name, "lili");
}

#[rstest]
fn test_to_map_last_write_wins() {
    let people = [
        Person { id: 1, name: "tom" },
        Person { id: 1, name: "thomas" },
        Person { id: 2, name: "jerry" },
    ];
    let index = to_map(&people, |person| person.id);
    assert_eq!(index.len(), 2);
    assert_eq!(index[&1].name, "thomas");
}

#[rstest]
fn test_to_map_empty() {
    let empty: [Person; 0] = [];
    assert!(to_map(&empty, |person| person.id).is_empty());
}

// =============================================================================
// index_by / to_set
// =============================================================================

#[rstest]
fn test_index_by_borrows_elements() {
    let index = index_by(&PERSONS, |person| person.name);
    assert_eq!(index["jerry"].id, 2);
}

#[rstest]
fn test_index_by_last_write_wins() {
    let words = ["apple", "avocado", "banana"];
    let index = index_by(&words, |word| word.chars().next());
    assert_eq!(*index[&Some('a')], "avocado");
}

#[rstest]
fn test_to_set_collects_distinct_keys() {
    let present = to_set(&[1, 2, 2, 3, 3, 3], |value| *value);
    assert_eq!(present.len(), 3);
    assert!(present.contains(&2));
    assert!(!present.contains(&4));
}

// =============================================================================
// group_by
// =============================================================================

#[rstest]
fn test_group_by_keeps_every_element_in_order() {
    let values = [1, 2, 3, 4, 5, 6, 7];
    let groups = group_by(&values, |value| value % 3);

    assert_eq!(groups[&0], vec![3, 6]);
    assert_eq!(groups[&1], vec![1, 4, 7]);
    assert_eq!(groups[&2], vec![2, 5]);
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), values.len());
}

// =============================================================================
// keys / values
// =============================================================================

#[rstest]
fn test_keys_of_hash_map_compared_as_set() {
    let scores: HashMap<&str, i64> = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
    let found: HashSet<&str> = keys(&scores).into_iter().collect();
    assert_eq!(found, HashSet::from(["a", "b", "c"]));
    assert_eq!(keys(&scores).len(), 3);
}

#[rstest]
fn test_keys_of_ordered_map_follow_order() {
    let scores = BTreeMap::from([("c", 3), ("a", 1), ("b", 2)]);
    assert_eq!(keys(&scores), vec!["a", "b", "c"]);
    assert_eq!(values(&scores), vec![1, 2, 3]);
}

#[rstest]
fn test_keys_of_key_index() {
    let index = to_map(&PERSONS, |person| person.id);
    let mut ids = keys(&index);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
fn test_keys_of_empty_map() {
    let empty: HashMap<String, i64> = HashMap::new();
    assert!(keys(&empty).is_empty());
    assert!(values(&empty).is_empty());
}
