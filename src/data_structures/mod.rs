//! Data structures for word indexing.
//!
//! The crate's one structure is the [`PrefixTree`], with a lock-guarded
//! [`SharedPrefixTree`] handle for use across threads.

pub mod prefix_tree;

pub use prefix_tree::{PrefixTree, SharedPrefixTree};
