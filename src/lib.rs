//! Provides a trie-backed word dictionary. Words are stored as paths of
//! [`char`]s through a tree of owned nodes, so common prefixes are shared
//! and prefix queries are cheap.
//!
//! The dictionary answers two different membership questions:
//!  - [`crate::trie::Trie::contains`]: is this string a prefix of anything
//!    stored (including a stored word itself)?
//!  - [`crate::trie::Trie::is_word`]: is this string a complete stored word?
//!
//! Enumeration is breadth-first: shorter words are produced before longer
//! ones, and words of equal length come out in lexicographic order. This
//! makes the dictionary directly usable for autocomplete-style ranking,
//! where the shortest completions should surface first.
//!
//! ```
//! use wordtrie::trie::Trie;
//!
//! let trie = Trie::from_word_lists(vec![vec!["cat", "car", "dog"], vec!["do"]]);
//!
//! assert!(trie.is_word("cat"));
//! assert!(trie.contains("ca")); // prefix of "cat" and "car"
//! assert!(!trie.is_word("ca")); // but not a word itself
//!
//! let completions: Vec<String> = trie
//!     .words_with_prefix("ca")
//!     .expect("the prefix is present")
//!     .collect();
//! assert_eq!(completions, vec!["car", "cat"]);
//!
//! // Shortest first, then lexicographic within a length.
//! let everything: Vec<String> = trie.all_words().collect();
//! assert_eq!(everything, vec!["do", "car", "cat", "dog"]);
//! ```
//!
//! Looking up a prefix which is not in the dictionary at all is an error,
//! not an empty result:
//!
//! ```
//! use wordtrie::error::TrieError;
//! use wordtrie::trie::Trie;
//!
//! let trie: Trie = ["cat"].into_iter().collect();
//! assert_eq!(
//!     trie.words_with_prefix("z").err(),
//!     Some(TrieError::PathNotFound("z".to_string()))
//! );
//! ```
//!
//! Examples:
//! * dictionary : `demos/dictionary.rs`
//! * autocomplete : `demos/autocomplete.rs`
//!
//! Typical usages for this data structure:
//!  - Spell-check dictionaries
//!  - Autocomplete / word suggestion
//!  - Prefix matching over large word sets with significant
//!    amounts of prefix duplication
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod trie;
