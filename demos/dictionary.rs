use wordtrie::trie::Trie;

fn main() {
    // Build a dictionary from a couple of word lists.
    let trie = Trie::from_word_lists(vec![
        vec!["cat", "car", "cart", "dog"],
        vec!["do", "door"],
    ]);

    assert!(trie.is_word("cart"));
    assert!(trie.contains("ca"));
    assert!(!trie.is_word("ca"));

    // Enumerate everything: shortest words first, lexicographic
    // within a length.
    println!("{} words stored", trie.count());
    for word in &trie {
        println!("{word}");
    }
}
