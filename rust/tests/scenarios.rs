use bst_report::{BstMap, RemoveOutcome, Value};

enum Step {
    Add(&'static str, Value),
    Delete(&'static str, RemoveOutcome),
}

use Step::{Add, Delete};

fn run_steps(steps: &[Step]) -> BstMap {
    let mut tree = BstMap::new();
    for step in steps {
        match *step {
            Add(key, value) => {
                tree.insert(key, value);
            }
            Delete(key, expected) => {
                assert_eq!(tree.remove(key), expected, "delete {}", key);
            }
        }
        tree.check_invariants_detailed().unwrap();
    }
    tree
}

macro_rules! scenario {
    ($name:ident: [$($step:expr),* $(,)?] => [$($line:expr),* $(,)?]) => {
        paste::paste! {
            #[test]
            fn [<test_scenario_ $name>]() {
                let tree = run_steps(&[$($step),*]);
                let expected: Vec<&str> = vec![$($line),*];
                assert_eq!(tree.describe(), expected);
            }
        }
    };
}

scenario!(straight_line_build: [
    Add("Gabriel", 3),
    Add("Bob", 2),
    Add("Ethan", 1),
] => [
    "(Bob, 2) is the left child of (Gabriel, 3)",
    "(Ethan, 1) is the right child of (Bob, 2)",
    "(Gabriel, 3) is the root",
]);

scenario!(not_found_leaves_tree_unchanged: [
    Add("Gabriel", 3),
    Add("Bob", 2),
    Add("Ethan", 1),
    Delete("Tom", RemoveOutcome::NotFound),
] => [
    "(Bob, 2) is the left child of (Gabriel, 3)",
    "(Ethan, 1) is the right child of (Bob, 2)",
    "(Gabriel, 3) is the root",
]);

scenario!(two_child_root_promotes_successor: [
    Add("Gabriel", 3),
    Add("Bob", 2),
    Add("Ethan", 1),
    Add("Henry", 4),
    Delete("Gabriel", RemoveOutcome::Removed),
] => [
    "(Bob, 2) is the left child of (Henry, 4)",
    "(Ethan, 1) is the right child of (Bob, 2)",
    "(Henry, 4) is the root",
]);

scenario!(empty_tree_deletion: [
    Delete("Anything", RemoveOutcome::NotFound),
] => []);

scenario!(duplicate_insert_keeps_first_value: [
    Add("Bob", 2),
    Add("Bob", 99),
] => [
    "(Bob, 2) is the root",
]);

scenario!(delete_everything_then_rebuild: [
    Add("b", 1),
    Add("a", 2),
    Add("c", 3),
    Delete("b", RemoveOutcome::Removed),
    Delete("a", RemoveOutcome::Removed),
    Delete("c", RemoveOutcome::Removed),
    Delete("c", RemoveOutcome::NotFound),
    Add("z", 26),
    Add("y", 25),
] => [
    "(y, 25) is the left child of (z, 26)",
    "(z, 26) is the root",
]);

scenario!(successor_deep_in_right_subtree: [
    Add("d", 4),
    Add("b", 2),
    Add("h", 8),
    Add("f", 6),
    Add("e", 5),
    Add("g", 7),
    Delete("d", RemoveOutcome::Removed),
] => [
    "(b, 2) is the left child of (e, 5)",
    "(e, 5) is the root",
    "(f, 6) is the left child of (h, 8)",
    "(g, 7) is the right child of (f, 6)",
    "(h, 8) is the right child of (e, 5)",
]);

scenario!(inner_two_child_node: [
    Add("m", 0),
    Add("d", 1),
    Add("q", 2),
    Add("b", 3),
    Add("g", 4),
    Add("f", 5),
    Delete("d", RemoveOutcome::Removed),
] => [
    "(b, 3) is the left child of (f, 5)",
    "(f, 5) is the left child of (m, 0)",
    "(g, 4) is the right child of (f, 5)",
    "(m, 0) is the root",
    "(q, 2) is the right child of (m, 0)",
]);

scenario!(negative_and_extreme_values: [
    Add("low", i32::MIN),
    Add("high", i32::MAX),
    Add("zero", 0),
] => [
    "(high, 2147483647) is the left child of (low, -2147483648)",
    "(low, -2147483648) is the root",
    "(zero, 0) is the right child of (low, -2147483648)",
]);
