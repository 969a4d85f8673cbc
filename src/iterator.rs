//! Provides Trie iterators.
//!
use std::collections::VecDeque;

use crate::trie::{Node, Trie};

/// Breadth-first iterator over the complete words of a [`Trie`].
///
/// The iterator owns an explicit worklist of pending paths. Dequeuing a
/// path extends the worklist with the path's children in ascending
/// character order, and produces the path when its node terminates a word.
/// Level-order processing is what yields shorter words before longer ones.
#[derive(Debug)]
pub struct Words<'a> {
    queue: VecDeque<(String, &'a Node)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(seed: &str, node: &'a Node) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((seed.to_string(), node));
        Self { queue }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.queue.pop_front() {
            for (c, child) in &node.children {
                let mut extended = path.clone();
                extended.push(*c);
                self.queue.push_back((extended, child));
            }
            if node.terminal {
                return Some(path);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_words()
    }
}
