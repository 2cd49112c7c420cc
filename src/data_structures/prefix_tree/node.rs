// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! Nodes live in one flat arena owned by the tree and refer to their
//! children by index. Every index is handed out exactly once, to exactly
//! one parent edge, so the structure stays a tree.

use fnv::FnvHashMap;

/// Index of a node in the tree's arena.
pub(crate) type NodeId = usize;

/// Arena index of the root node, which represents the empty string.
pub(crate) const ROOT: NodeId = 0;

/// A node in the prefix tree.
///
/// Represents the string spelled by the edge labels from the root down to it.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to child node indices
    pub(crate) children: FnvHashMap<char, NodeId>,

    /// Whether the path to this node was inserted as a complete word
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `c`, if any.
    pub(crate) fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }
}
