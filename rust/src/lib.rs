//! Unbalanced binary search tree with parent back-references.
//!
//! This crate provides an arena-backed binary search tree over string keys and
//! integer values. Every node carries a non-owning link to its parent, which
//! the [`Reporter`] uses to describe the final shape of the tree: which entry
//! is the root, and for every other entry whether it is the left or right
//! child of which parent.
//!
//! Around the core tree sit a small command-file driver ([`Session`]) and two
//! stand-alone utilities ([`find_max`] and [`sorter`]).
//!
//! # Examples
//!
//! ```
//! use bst_report::{BstMap, RemoveOutcome};
//!
//! let mut tree = BstMap::new();
//! tree.insert("Gabriel", 3);
//! tree.insert("Bob", 2);
//! tree.insert("Ethan", 1);
//!
//! assert_eq!(tree.remove("Tom"), RemoveOutcome::NotFound);
//! assert_eq!(
//!     tree.describe(),
//!     vec![
//!         "(Bob, 2) is the left child of (Gabriel, 3)",
//!         "(Ethan, 1) is the right child of (Bob, 2)",
//!         "(Gabriel, 3) is the root",
//!     ]
//! );
//! ```

#[macro_use]
mod macros;

mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod types;
mod validation;

pub mod command;
pub mod config;
pub mod find_max;
pub mod report;
pub mod session;
pub mod sorter;

pub use command::{Command, CommandError};
pub use compact_arena::CompactArenaStats;
pub use config::RunOptions;
pub use error::{KeyResult, ModifyResult, TreeError, TreeResult, TreeResultExt};
pub use iteration::{Iter, Keys, Placements};
pub use report::{Placement, ReportLine, Reporter};
pub use session::{RunSummary, Session};
pub use types::{BstMap, InsertOutcome, RemoveOutcome, Value};
