//! Shape report for a [`BstMap`].
//!
//! The report has one line per entry, in ascending key order, stating where
//! the entry hangs:
//!
//! ```text
//! (Bob, 2) is the left child of (Gabriel, 3)
//! (Ethan, 1) is the right child of (Bob, 2)
//! (Gabriel, 3) is the root
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::iteration::Placements;
use crate::types::{BstMap, Value};

/// Where an entry hangs, with the parent's key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement<'a> {
    Root,
    LeftChildOf(&'a str, Value),
    RightChildOf(&'a str, Value),
}

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine<'a> {
    pub key: &'a str,
    pub value: Value,
    pub placement: Placement<'a>,
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)?;
        match self.placement {
            Placement::Root => write!(f, " is the root"),
            Placement::LeftChildOf(key, value) => {
                write!(f, " is the left child of ({}, {})", key, value)
            }
            Placement::RightChildOf(key, value) => {
                write!(f, " is the right child of ({}, {})", key, value)
            }
        }
    }
}

/// Read-only in-order walker producing the report for one tree.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    tree: &'a BstMap,
}

impl<'a> Reporter<'a> {
    pub fn new(tree: &'a BstMap) -> Self {
        Self { tree }
    }

    /// Report lines, unformatted.
    pub fn lines(&self) -> Placements<'a> {
        self.tree.placements()
    }

    /// Report lines, formatted.
    pub fn describe(&self) -> Vec<String> {
        self.lines().map(|line| line.to_string()).collect()
    }

    /// Write every report line, newline-terminated, and return how many were
    /// written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for line in self.lines() {
            writeln!(out, "{}", line)?;
            written += 1;
        }
        Ok(written)
    }
}

impl BstMap {
    /// Shorthand for `Reporter::new(self).describe()`.
    pub fn describe(&self) -> Vec<String> {
        Reporter::new(self).describe()
    }
}

/// Notice written when a `delete` names a key that is not in the tree.
pub fn not_found_notice(key: &str) -> String {
    format!("Not found: {}", key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> BstMap {
        let mut tree = BstMap::new();
        tree.insert("Gabriel", 3);
        tree.insert("Bob", 2);
        tree.insert("Ethan", 1);
        tree
    }

    #[test]
    fn test_line_formats() {
        let root = ReportLine {
            key: "Gabriel",
            value: 3,
            placement: Placement::Root,
        };
        assert_eq!(root.to_string(), "(Gabriel, 3) is the root");

        let left = ReportLine {
            key: "Bob",
            value: -2,
            placement: Placement::LeftChildOf("Gabriel", 3),
        };
        assert_eq!(left.to_string(), "(Bob, -2) is the left child of (Gabriel, 3)");
    }

    #[test]
    fn test_describe_scenario() {
        assert_eq!(
            Reporter::new(&scenario_a()).describe(),
            vec![
                "(Bob, 2) is the left child of (Gabriel, 3)",
                "(Ethan, 1) is the right child of (Bob, 2)",
                "(Gabriel, 3) is the root",
            ]
        );
    }

    #[test]
    fn test_write_to_terminates_every_line() {
        let tree = scenario_a();
        let mut out = Vec::new();
        let written = Reporter::new(&tree).write_to(&mut out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(Bob, 2) is the left child of (Gabriel, 3)\n\
             (Ethan, 1) is the right child of (Bob, 2)\n\
             (Gabriel, 3) is the root\n"
        );
    }

    #[test]
    fn test_empty_tree_reports_nothing() {
        let tree = BstMap::new();
        assert!(tree.describe().is_empty());
        let mut out = Vec::new();
        assert_eq!(Reporter::new(&tree).write_to(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_not_found_notice() {
        assert_eq!(not_found_notice("Tom"), "Not found: Tom");
    }
}
