// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Clue index: a binary search tree of unique clue texts.
//!
//! Every clue collected during exploration lands here. The tree orders clues
//! by lexicographic comparison of their text, so an in-order walk yields the
//! evidence list alphabetically; that walk is what the player sees when they
//! ask to view collected clues.
//!
//! # Invariants
//!
//! - For every node, all texts in its left subtree compare strictly less than
//!   its own text, and all texts in its right subtree strictly greater.
//! - No text appears twice anywhere in the tree: inserting a duplicate is a
//!   no-op and leaves the structure untouched.
//!
//! Each node is owned by its parent (the root by the index itself), so the
//! whole tree is released by scope-based drop.

use std::cmp::Ordering;

/// A single clue in the index.
///
/// The text is fixed at creation; only the child links grow as later
/// insertions descend past this node.
#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of unique clue texts with sorted iteration.
///
/// # Example
///
/// ```
/// use detective_quest::clues::ClueIndex;
///
/// let mut index = ClueIndex::new();
/// assert!(index.insert("Pegadas de lama"));
/// assert!(index.insert("Carta de divida"));
///
/// // Duplicates are rejected without touching the tree.
/// assert!(!index.insert("Pegadas de lama"));
/// assert_eq!(index.len(), 2);
///
/// let sorted: Vec<&str> = index.iter().collect();
/// assert_eq!(sorted, ["Carta de divida", "Pegadas de lama"]);
/// ```
#[derive(Debug)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a clue text, keeping the tree ordered and duplicate-free.
    ///
    /// Returns true if the text was new, false if it was already present
    /// (in which case the tree is unchanged). The text is only copied into
    /// an owned node when it is actually inserted.
    pub fn insert(&mut self, text: &str) -> bool {
        let inserted = Self::insert_below(&mut self.root, text);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Descend to the slot where `text` belongs and fill it if empty.
    ///
    /// Operating on `&mut Option<Box<ClueNode>>` lets insertion into an empty
    /// subtree create structure in place; callers never need to rebind a
    /// returned root.
    fn insert_below(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(ClueNode::new(text)));
                true
            }
            Some(node) => match text.cmp(node.text.as_str()) {
                Ordering::Less => Self::insert_below(&mut node.left, text),
                Ordering::Greater => Self::insert_below(&mut node.right, text),
                Ordering::Equal => false,
            },
        }
    }

    /// Check whether a clue text is present.
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of distinct clues stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no clue has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all clue texts in ascending lexicographic order.
    ///
    /// The walk is lazy (driven by `next`) and restartable: each call to
    /// `iter` starts a fresh pass over the same tree.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }
}

impl Default for ClueIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.iter()
    }
}

/// Lazy in-order traversal of a [`ClueIndex`].
///
/// Keeps an explicit stack of the pending ancestors: the top of the stack is
/// always the next node to yield, and descending a right subtree pushes its
/// left spine. Depth of the stack is bounded by the tree height.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.text.as_str())
    }
}
