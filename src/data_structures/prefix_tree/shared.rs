// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`PrefixTree`].
//!
//! The tree mutates nodes in place during insertion, so concurrent use goes
//! through a single writer / many readers lock over the whole structure.

use std::sync::Arc;

use parking_lot::RwLock;

use super::PrefixTree;

/// A cloneable, thread-safe handle to a shared [`PrefixTree`].
///
/// Every clone refers to the same tree. Reads proceed in parallel, an
/// insertion takes the lock exclusively.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixTree {
    inner: Arc<RwLock<PrefixTree>>,
}

impl SharedPrefixTree {
    /// Creates a handle to a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word. See [`PrefixTree::insert`].
    pub fn insert<'a, W>(&self, word: W)
    where
        W: Into<Option<&'a str>>,
    {
        self.inner.write().insert(word);
    }

    /// See [`PrefixTree::search`].
    pub fn search<'a, W>(&self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        self.inner.read().search(word)
    }

    /// See [`PrefixTree::starts_with`].
    pub fn starts_with<'a, P>(&self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        self.inner.read().starts_with(prefix)
    }

    /// See [`PrefixTree::words_with_prefix`].
    pub fn words_with_prefix<'a, P>(&self, prefix: P) -> Vec<String>
    where
        P: Into<Option<&'a str>>,
    {
        self.inner.read().words_with_prefix(prefix)
    }

    /// Returns the number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the tree.
    ///
    /// Useful for answering several queries against one consistent state.
    pub fn read<R>(&self, f: impl FnOnce(&PrefixTree) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut PrefixTree) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<PrefixTree> for SharedPrefixTree {
    fn from(tree: PrefixTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}
