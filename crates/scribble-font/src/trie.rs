//! Ligature Trie
//!
//! Prefix tree keyed by `char`. Every node on a path either holds a
//! ligature or has children; empty branches are pruned on removal.

use std::collections::HashMap;

use crate::{FontError, Ligature, Result};

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    ligature: Option<Ligature>,
}

impl TrieNode {
    fn is_empty(&self) -> bool {
        self.children.is_empty() && self.ligature.is_none()
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.chars().try_fold(self, |node, c| node.children.get(&c))
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut TrieNode> {
        key.chars()
            .try_fold(self, |node, c| node.children.get_mut(&c))
    }
}

impl Drop for TrieNode {
    // Long keys make deep chains; tear them down without recursion
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> =
            self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Ligatures keyed by their text
#[derive(Debug, Default)]
pub struct LigatureTrie {
    root: TrieNode,
    len: usize,
}

impl LigatureTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ligatures
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no ligatures are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store a ligature under its key.
    ///
    /// Fails without touching the trie if the key is empty or taken.
    pub fn insert(&mut self, ligature: Ligature) -> Result<()> {
        if ligature.key.is_empty() {
            return Err(FontError::EmptyKey);
        }
        if self.get(&ligature.key).is_some() {
            return Err(FontError::DuplicateKey(ligature.key));
        }

        let mut node = &mut self.root;
        for c in ligature.key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.ligature = Some(ligature);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the ligature stored under exactly `key`
    pub fn remove(&mut self, key: &str) -> Option<Ligature> {
        let removed = self.root.find_mut(key)?.ligature.take()?;
        self.len -= 1;
        self.prune(key);
        Some(removed)
    }

    /// Drop the dead tail of the path to `key` after its ligature is taken.
    ///
    /// The tail starts below the deepest node on the path that must stay:
    /// the root, a node holding a ligature, or a node with other children.
    fn prune(&mut self, key: &str) {
        let mut node = &self.root;
        let mut cut = None;
        for (i, c) in key.char_indices() {
            if cut.is_none() || node.ligature.is_some() || node.children.len() > 1 {
                cut = Some((i, c));
            }
            let Some(child) = node.children.get(&c) else {
                return;
            };
            node = child;
        }
        if !node.is_empty() {
            return;
        }
        if let Some((i, c)) = cut {
            if let Some(anchor) = self.root.find_mut(&key[..i]) {
                anchor.children.remove(&c);
            }
        }
    }

    /// Ligature stored under exactly `key`
    pub fn get(&self, key: &str) -> Option<&Ligature> {
        self.root.find(key)?.ligature.as_ref()
    }

    /// Mutable access to the ligature stored under exactly `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Ligature> {
        self.root.find_mut(key)?.ligature.as_mut()
    }

    /// Longest stored key that is a prefix of `text`
    pub fn longest_match(&self, text: &str) -> Option<&Ligature> {
        let mut node = &self.root;
        let mut best = None;
        for c in text.chars() {
            let Some(child) = node.children.get(&c) else {
                break;
            };
            node = child;
            if let Some(ligature) = &node.ligature {
                best = Some(ligature);
            }
        }
        best
    }

    /// Iterate over all ligatures, depth first
    pub fn iter(&self) -> Ligatures<'_> {
        Ligatures {
            stack: vec![&self.root],
        }
    }
}

impl<'a> IntoIterator for &'a LigatureTrie {
    type Item = &'a Ligature;
    type IntoIter = Ligatures<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the ligatures of a [`LigatureTrie`]
pub struct Ligatures<'a> {
    stack: Vec<&'a TrieNode>,
}

impl<'a> Iterator for Ligatures<'a> {
    type Item = &'a Ligature;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if let Some(ligature) = &node.ligature {
                return Some(ligature);
            }
        }
        None
    }
}
