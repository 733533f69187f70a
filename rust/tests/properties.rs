use std::collections::BTreeMap;

use bst_report::{BstMap, InsertOutcome, Placement, RemoveOutcome, Value};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
enum Op {
    Insert(String, Value),
    Remove(String),
}

fn key_strategy() -> impl Strategy<Value = String> {
    // A small alphabet keeps collisions (duplicates, hits on remove) frequent.
    "[a-eA-C]{0,3}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), any::<Value>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => key_strategy().prop_map(Op::Remove),
    ]
}

/// Checks the parent links through the public report.
fn assert_parent_consistency(tree: &BstMap) {
    let mut roots = 0;
    for line in tree.placements() {
        match line.placement {
            Placement::Root => roots += 1,
            Placement::LeftChildOf(parent, _) => assert!(line.key < parent),
            Placement::RightChildOf(parent, _) => assert!(line.key > parent),
        }
    }
    assert_eq!(roots, usize::from(!tree.is_empty()));
}

proptest! {
    #[test]
    fn prop_matches_btreemap_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut tree = BstMap::new();
        let mut model: BTreeMap<String, Value> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let expected = if model.contains_key(&key) {
                        InsertOutcome::DuplicateIgnored
                    } else {
                        model.insert(key.clone(), value);
                        InsertOutcome::Inserted
                    };
                    prop_assert_eq!(tree.insert(key, value), expected);
                }
                Op::Remove(key) => {
                    let expected = if model.remove(&key).is_some() {
                        RemoveOutcome::Removed
                    } else {
                        RemoveOutcome::NotFound
                    };
                    prop_assert_eq!(tree.remove(&key), expected);
                }
            }
            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
        }

        let items: Vec<(String, Value)> = tree.iter().map(|(k, v)| (k.to_string(), v)).collect();
        let expected: Vec<(String, Value)> = model.into_iter().collect();
        prop_assert_eq!(items, expected);
        assert_parent_consistency(&tree);
    }

    #[test]
    fn prop_keys_strictly_ascending(keys in prop::collection::vec(key_strategy(), 0..100)) {
        let tree: BstMap = keys.into_iter().map(|k| (k, 0)).collect();
        let collected: Vec<&str> = tree.keys().collect();
        prop_assert!(collected.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_remove_absent_is_side_effect_free(
        keys in prop::collection::vec(key_strategy(), 1..60),
        probe in "[x-z]{1,3}",
    ) {
        let mut tree: BstMap = keys.into_iter().enumerate().map(|(i, k)| (k, i as Value)).collect();
        let before = tree.describe();
        let len = tree.len();
        prop_assert_eq!(tree.remove(&probe), RemoveOutcome::NotFound);
        prop_assert_eq!(tree.describe(), before);
        prop_assert_eq!(tree.len(), len);
    }
}

#[test]
fn test_seeded_random_workload() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = BstMap::new();
    let mut model = BTreeMap::new();

    for round in 0..5_000 {
        let key = format!("k{}", rng.gen_range(0..500));
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-1000..1000);
            if !model.contains_key(&key) {
                model.insert(key.clone(), value);
            }
            tree.insert(key, value);
        } else {
            assert_eq!(tree.remove(&key).is_removed(), model.remove(&key).is_some());
        }
        if round % 250 == 0 {
            tree.check_invariants_detailed().unwrap();
        }
    }

    tree.check_invariants_detailed().unwrap();
    assert_eq!(tree.len(), model.len());
    assert!(tree.iter().map(|(k, v)| (k.to_string(), v)).eq(model.into_iter()));
}

#[test]
fn test_degenerate_chain() {
    const N: usize = 15_000;
    let mut tree = BstMap::with_capacity(N);
    for i in 0..N {
        tree.insert(format!("{:06}", i), i as Value);
    }
    assert_eq!(tree.height(), N);
    assert_eq!(tree.describe().len(), N);
    tree.check_invariants_detailed().unwrap();

    // Deleting the deepest node walks the whole chain.
    assert_eq!(tree.remove(&format!("{:06}", N - 1)), RemoveOutcome::Removed);
    // Deleting the root splices its only child up.
    assert_eq!(tree.remove("000000"), RemoveOutcome::Removed);
    assert_eq!(tree.root_entry(), Some(("000001", 1)));
    assert_eq!(tree.len(), N - 2);
    tree.check_invariants_detailed().unwrap();
}
