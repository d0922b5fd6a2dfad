//! # prefix-index
//!
//! A prefix tree (trie) over short text keys such as usernames, supporting
//! exact membership tests and prefix expansion.
//!
//! ## Example
//!
//! ```rust
//! use prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! for name in ["alice", "albert", "bob", "carol", "caroline"] {
//!     index.insert(name);
//! }
//!
//! assert!(index.contains("alice"));
//! assert!(!index.contains("alex"));
//!
//! let mut found = index.search_by_prefix("car");
//! found.sort();
//! assert_eq!(found, ["carol", "caroline"]);
//! ```

use std::collections::HashMap;
use std::fmt;

pub mod source;

// =============================================================================
// Node
// =============================================================================

/// One position in the character tree.
#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    /// The path from the root to this node is an inserted key.
    terminal: bool,
}

impl Node {
    #[inline]
    fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Follows `path` from this node, returning `None` as soon as an edge is missing.
    fn descend(&self, path: &str) -> Option<&Node> {
        let mut node = self;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink the subtree onto a heap stack so that dropping a long key does
        // not recurse once per character.
        let mut stack: Vec<Node> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}

// =============================================================================
// PrefixIndex
// =============================================================================

/// Prefix tree over `char` sequences.
///
/// Each node owns its children outright; there is no deletion, so every node
/// created by [`insert`](PrefixIndex::insert) lives as long as the index.
///
/// Results of [`search_by_prefix`](PrefixIndex::search_by_prefix) and
/// [`keys`](PrefixIndex::keys) come out in no particular order.
#[derive(Default)]
pub struct PrefixIndex {
    root: Node,
    count: usize,
}

impl PrefixIndex {
    /// Creates an empty index holding only the root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Stores `key`, creating any missing nodes along its path.
    ///
    /// Inserting a key that is already present changes nothing. The empty
    /// string is accepted and marks the root itself as terminal.
    pub fn insert(&mut self, key: &str) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.count += 1;
        }
    }

    /// Returns `true` if `key` was inserted, as opposed to merely being a
    /// prefix of some inserted key.
    pub fn contains(&self, key: &str) -> bool {
        self.root.descend(key).is_some_and(|node| node.terminal)
    }

    /// Returns every stored key starting with `prefix`, including `prefix`
    /// itself when it is stored.
    ///
    /// An empty `prefix` yields no results; use [`keys`](PrefixIndex::keys)
    /// to enumerate the whole index.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        match self.root.descend(prefix) {
            Some(node) => Keys::below(node, prefix.to_owned()).collect(),
            None => Vec::new(),
        }
    }

    /// Iterates over all stored keys in unspecified order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::below(&self.root, String::new())
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Depth-first walk over the terminal nodes of a subtree.
///
/// Keeps one path buffer for the whole walk. Each stack entry remembers the
/// buffer length of its parent, so popping an entry truncates the buffer back
/// to the parent's path before appending the entry's own edge.
pub struct Keys<'a> {
    stack: Vec<(Option<char>, &'a Node, usize)>,
    path: String,
}

impl<'a> Keys<'a> {
    /// `path` is the key spelled by `start`.
    fn below(start: &'a Node, path: String) -> Self {
        let len = path.len();
        Self {
            stack: vec![(None, start, len)],
            path,
        }
    }
}

impl Iterator for Keys<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((edge, node, parent_len)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(c) = edge {
                self.path.push(c);
            }

            let len = self.path.len();
            self.stack
                .extend(node.children.iter().map(|(&c, child)| (Some(c), child, len)));

            if node.terminal {
                return Some(self.path.clone());
            }
        }
        None
    }
}
