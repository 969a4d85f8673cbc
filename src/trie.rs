//! Provides the word dictionary itself: a trie of owned nodes keyed by
//! [`char`], tracking which nodes terminate a complete word.
//!
//! A [`Trie`] stores only membership. There are no per-word values and no
//! removal; the intended lifecycle is to build the dictionary from one or
//! more word lists and then query it read-only, although nothing prevents
//! inserting additional words later.
//!
//! Example 1
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cart");
//!
//! // Every prefix of a stored word is reachable...
//! assert!(trie.contains(""));
//! assert!(trie.contains("ca"));
//! assert!(trie.contains("cart"));
//! // ...but only the full word is a word.
//! assert!(!trie.is_word("ca"));
//! assert!(trie.is_word("cart"));
//! ```
//!
//! Example 2
//! ```
//! use wordtrie::trie::Trie;
//!
//! // Construction from word lists; anything which implements
//! // IntoIterator over string-like items works.
//! let trie = Trie::from_word_lists(vec![
//!     vec!["do", "dog", "door"],
//!     vec!["cat", "car"],
//! ]);
//! assert_eq!(trie.count(), 5);
//!
//! let doors: Vec<String> = trie
//!     .words_with_prefix("do")
//!     .expect("the prefix is present")
//!     .collect();
//! assert_eq!(doors, vec!["do", "dog", "door"]);
//! ```
//!
//! Insertion trims surrounding whitespace, so word lists read from text
//! files can be fed in without pre-cleaning. The empty string is a valid
//! word and is stored at the root:
//!
//! Example 3
//! ```
//! use wordtrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("  cat\n");
//! trie.insert("");
//! assert!(trie.is_word("cat"));
//! assert!(trie.is_word(""));
//! assert_eq!(trie.count(), 2);
//! ```
//!
//! A `Trie` is a plain owned value: queries take `&self`, insertion takes
//! `&mut self`, and the borrow checker rules out mutation concurrent with
//! enumeration. For shared multi-threaded use, wrap the trie in a lock or
//! build it first and share it read-only.

use std::collections::BTreeMap;

use crate::error::{TrieError, TrieResult};
use crate::iterator::Words;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single node: owned children keyed by edge character, plus a flag
/// marking whether the path from the root to this node is a complete word.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) terminal: bool,
}

impl Node {
    /// Follow `path` one character at a time, stopping at the first
    /// missing edge.
    fn find(&self, path: &str) -> Option<&Node> {
        path.chars().try_fold(self, |node, c| node.children.get(&c))
    }

    /// Follow `path` in must-exist mode. A missing edge is a
    /// [`TrieError::PathNotFound`] carrying the full requested path.
    pub(crate) fn walk(&self, path: &str) -> TrieResult<&Node> {
        self.find(path)
            .ok_or_else(|| TrieError::PathNotFound(path.to_string()))
    }
}

/// Stores a set of words as shared-prefix paths of chars.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie {
    pub(crate) root: Node,
    count: usize,
}

impl Trie {
    /// Create a new empty Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Trie from one or more word lists, inserting every word of
    /// every list. Insertion order never affects the resulting structure.
    pub fn from_word_lists<L, W, S>(lists: L) -> Self
    where
        L: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for words in lists {
            trie.extend(words);
        }
        trie
    }

    /// Insert a word into the Trie. Leading and trailing whitespace is
    /// trimmed first; whitespace inside the word is kept. Inserting a word
    /// which is already present leaves the Trie unchanged. The empty string
    /// (or a string which trims to empty) is stored as the empty word.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.trim().chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.count += 1;
        }
    }

    /// Is the supplied key a prefix of some stored word (or a stored word
    /// itself)? Note that this is prefix reachability, not word membership;
    /// see [`Trie::is_word`] for the latter.
    pub fn contains(&self, key: &str) -> bool {
        self.root.find(key).is_some()
    }

    /// Is the supplied key a complete stored word?
    pub fn is_word(&self, key: &str) -> bool {
        self.root.find(key).map_or(false, |node| node.terminal)
    }

    /// Enumerate every stored word beginning with `prefix`, shortest first
    /// and lexicographic within a length. The prefix itself is included
    /// when it is a stored word.
    ///
    /// Errors with [`TrieError::PathNotFound`] if `prefix` is not reachable
    /// in the Trie. An unreachable prefix is a caller error, distinct from
    /// a reachable prefix which happens to complete no words.
    pub fn words_with_prefix(&self, prefix: &str) -> TrieResult<Words<'_>> {
        let node = self.root.walk(prefix)?;
        Ok(Words::new(prefix, node))
    }

    /// Enumerate every stored word, shortest first and lexicographic
    /// within a length.
    pub fn all_words(&self) -> Words<'_> {
        Words::new("", &self.root)
    }

    /// Create an iterator over the Trie. Alias for [`Trie::all_words`].
    pub fn iter(&self) -> Words<'_> {
        self.all_words()
    }

    /// How many words does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.count = 0;
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<T: IntoIterator<Item = S>>(&mut self, words: T) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(words: T) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}
