//! Error types for trie traversal.

/// Result type for fallible trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Errors that can occur while traversing a trie.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A traversal consumed a character for which no child edge exists.
    /// Carries the full path that was requested.
    #[error("path not found in trie: {0:?}")]
    PathNotFound(String),
}
