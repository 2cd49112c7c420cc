//! Prefix Tree Library
//!
//! An in-memory character trie supporting insertion, exact-word lookup,
//! prefix-existence lookup and enumeration of every stored word sharing a
//! prefix. Suited to autocomplete, dictionary membership and prefix search.
//!
//! Alongside the tree the library carries what the `prefix_tree` binary
//! needs: word list loading, layered configuration and error types.
//!
//! ```
//! use prefix_tree_lib::PrefixTree;
//!
//! let tree: PrefixTree = ["cat", "dog", "catalog"].into_iter().collect();
//! assert!(tree.search("dog"));
//! assert_eq!(tree.words_with_prefix("cat").len(), 2);
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixTree, SharedPrefixTree};
pub use error::{PrefixTreeError, PrefixTreeResult};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
