// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! This module provides a character trie for storing words and answering
//! exact-membership, prefix-existence and prefix-enumeration queries.
//!
//! Every operation is total: empty or absent (`None`) input yields a defined
//! value instead of an error. The empty string is never stored as a word.

mod node;
mod shared;

use tracing::trace;

use node::{NodeId, TrieNode, ROOT};
pub use shared::SharedPrefixTree;

/// A prefix tree (trie) of words.
///
/// Key features:
/// * Nodes are created lazily, only when an insertion needs them
/// * Exact word lookup and prefix existence checks in `O(len)`
/// * Enumeration of every stored word sharing a prefix
///
/// Children are kept in an unordered map, so enumeration order is unspecified.
/// Nodes are stored in a flat arena and no operation recurses, so word
/// length is bounded by memory alone.
///
/// # Examples
///
/// ```
/// use prefix_tree_lib::data_structures::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// tree.insert("cat");
/// tree.insert("catalog");
///
/// assert!(tree.search("cat"));
/// assert!(!tree.search("ca"));
/// assert!(tree.starts_with("ca"));
///
/// let mut words = tree.words_with_prefix("cat");
/// words.sort();
/// assert_eq!(words, vec!["cat", "catalog"]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTree {
    /// Node arena; index `ROOT` is the root, representing the empty string
    nodes: Vec<TrieNode>,

    /// Number of distinct words inserted so far
    len: usize,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree`.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            len: 0,
        }
    }

    /// Inserts a word into the tree.
    ///
    /// Empty or absent input is ignored. Inserting a word that is already
    /// present leaves the tree unchanged.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn insert<'a, W>(&mut self, word: W)
    where
        W: Into<Option<&'a str>>,
    {
        let word = match word.into() {
            Some(word) if !word.is_empty() => word,
            _ => return,
        };

        let mut current = ROOT;
        for c in word.chars() {
            current = match self.nodes[current].child(c) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
            trace!(word, words = self.len, "Registered new word");
        }
    }

    /// Returns `true` if `word` was previously inserted verbatim.
    ///
    /// Empty or absent input always yields `false`.
    pub fn search<'a, W>(&self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        match word.into() {
            Some(word) if !word.is_empty() => self
                .descend(word)
                .is_some_and(|node| self.nodes[node].is_terminal),
            _ => false,
        }
    }

    /// Returns `true` if any inserted word begins with `prefix`.
    ///
    /// The empty prefix always matches, even on an empty tree. An absent
    /// prefix never matches, mirroring [`PrefixTree::words_with_prefix`].
    pub fn starts_with<'a, P>(&self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        prefix
            .into()
            .is_some_and(|prefix| self.descend(prefix).is_some())
    }

    /// Returns every inserted word that starts with `prefix`.
    ///
    /// The result holds no duplicates and is in no particular order. An
    /// absent prefix, or one that no stored word starts with, yields an
    /// empty vector.
    pub fn words_with_prefix<'a, P>(&self, prefix: P) -> Vec<String>
    where
        P: Into<Option<&'a str>>,
    {
        let mut result = Vec::new();
        let Some(prefix) = prefix.into() else {
            return result;
        };

        if let Some(node) = self.descend(prefix) {
            let mut buffer = String::from(prefix);
            self.collect_words(node, &mut buffer, &mut result);
        }

        result
    }

    /// Returns every word in the tree, in no particular order.
    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Follows `path` from the root one character at a time, stopping at the
    /// first missing edge.
    fn descend(&self, path: &str) -> Option<NodeId> {
        path.chars().try_fold(ROOT, |node, c| self.nodes[node].child(c))
    }

    /// Depth-first collection of terminal nodes at and below `start`.
    ///
    /// Walks with an explicit stack of child iterators. `buffer` holds the
    /// path to `start` on entry, gains one character per frame entered and
    /// is restored on return.
    fn collect_words(&self, start: NodeId, buffer: &mut String, result: &mut Vec<String>) {
        if self.nodes[start].is_terminal {
            result.push(buffer.clone());
        }

        let mut stack = vec![self.nodes[start].children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((&c, &child)) => {
                    buffer.push(c);
                    let node = &self.nodes[child];
                    if node.is_terminal {
                        result.push(buffer.clone());
                    }
                    stack.push(node.children.iter());
                }
                None => {
                    stack.pop();
                    // Every frame but the first was entered through a character
                    if !stack.is_empty() {
                        buffer.pop();
                    }
                }
            }
        }
    }

    /// Returns the number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(words: Vec<String>) -> HashSet<String> {
        words.into_iter().collect()
    }

    #[test]
    fn test_tree_basic_operations() {
        let mut tree = PrefixTree::new();

        // Test initial state
        assert!(tree.is_empty());
        assert!(!tree.search("cat"));

        tree.insert("cat");
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());

        assert!(tree.search("cat"));
        assert!(!tree.search("ca"));
        assert!(!tree.search("cats"));
        assert!(tree.starts_with("ca"));
        assert!(tree.starts_with("cat"));
        assert!(!tree.starts_with("cats"));
    }

    #[test]
    fn test_empty_and_absent_input() {
        let mut tree = PrefixTree::new();
        tree.insert("");
        tree.insert(None::<&str>);
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);

        tree.insert("dog");
        assert!(!tree.search(""));
        assert!(!tree.search(None::<&str>));
        assert!(tree.starts_with(""));
        assert!(!tree.starts_with(None::<&str>));
        assert!(tree.words_with_prefix(None::<&str>).is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tree = PrefixTree::new();
        tree.insert("hello");
        let nodes = tree.node_count();

        tree.insert("hello");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), nodes);
        assert_eq!(tree.words_with_prefix("he"), vec!["hello".to_string()]);
    }

    #[test]
    fn test_nodes_are_shared_between_words() {
        let mut tree = PrefixTree::new();
        tree.insert("cat");
        assert_eq!(tree.node_count(), 4);

        // "catalog" reuses the "cat" path
        tree.insert("catalog");
        assert_eq!(tree.node_count(), 8);

        // "ca" only flips a flag
        tree.insert("ca");
        assert_eq!(tree.node_count(), 8);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_words_with_prefix() {
        let tree: PrefixTree = ["apple", "application", "apply", "banana"]
            .into_iter()
            .collect();

        let results = as_set(tree.words_with_prefix("app"));
        let expected: HashSet<String> = ["apple", "application", "apply"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(results, expected);

        // Prefix equal to a whole word includes the word itself
        assert_eq!(tree.words_with_prefix("banana"), vec!["banana".to_string()]);

        // Test with no matches
        assert!(tree.words_with_prefix("orange").is_empty());
        assert!(tree.words_with_prefix("bananas").is_empty());
    }

    #[test]
    fn test_words_returns_everything() {
        let mut tree = PrefixTree::new();
        tree.extend(vec!["x".to_string(), "xy".to_string(), "z".to_string()]);

        assert_eq!(tree.len(), 3);
        assert_eq!(as_set(tree.words()), as_set(tree.words_with_prefix("")));
        assert_eq!(tree.words().len(), 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tree = PrefixTree::new();
        tree.insert("дерево");
        tree.insert("день");
        tree.insert("日本語");

        assert!(tree.search("день"));
        assert!(tree.starts_with("де"));
        assert!(tree.starts_with("日"));
        assert!(!tree.starts_with("дн"));
        assert_eq!(
            as_set(tree.words_with_prefix("де")),
            as_set(vec!["дерево".to_string(), "день".to_string()])
        );
    }

    #[test]
    fn test_default_tree_has_root() {
        let mut tree = PrefixTree::default();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.starts_with(""));

        tree.insert("ok");
        assert!(tree.search("ok"));
    }

    #[test]
    fn test_enumeration_restores_buffer_between_siblings() {
        let tree: PrefixTree = ["ab", "abc", "abd", "ae", "b"].into_iter().collect();

        let mut words = tree.words();
        words.sort();
        assert_eq!(words, vec!["ab", "abc", "abd", "ae", "b"]);

        let mut words = tree.words_with_prefix("a");
        words.sort();
        assert_eq!(words, vec!["ab", "abc", "abd", "ae"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tree: PrefixTree = ["one", "two"].into_iter().collect();
        let snapshot = tree.clone();

        tree.insert("three");
        assert!(tree.search("three"));
        assert!(!snapshot.search("three"));
        assert_eq!(snapshot.len(), 2);
    }
}
