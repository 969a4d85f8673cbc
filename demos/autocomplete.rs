use wordtrie::trie::Trie;

fn main() {
    let trie: Trie = ["apple", "application", "apply", "banana", "band"]
        .into_iter()
        .collect();

    // Completions come out shortest first, so the most likely
    // candidates surface at the top of the list.
    println!("completions for \"app\":");
    for word in trie.words_with_prefix("app").expect("prefix is stored") {
        println!("  {word}");
    }

    // A prefix which reaches nothing at all is an error rather than
    // an empty result.
    if let Err(e) = trie.words_with_prefix("zebra") {
        println!("no completions: {e}");
    }
}
