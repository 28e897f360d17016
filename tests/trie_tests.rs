use std::io::Write;

use boggle_solver::{Solver, Trie};

fn get_test_words() -> Vec<&'static str> {
    vec![
        "boggle", "bog", "bogs", "quad", "quads", "queen", "quiet", "tree", "trees", "treat",
    ]
}

#[test]
fn test_inserted_words_end_at_word_nodes() {
    let words = get_test_words();
    let trie = Trie::from_words(&words);
    for word in &words {
        let node = trie.walk(word).unwrap();
        assert!(trie.is_word_end(node), "missing word: {}", word);
    }
    assert_eq!(trie.word_count(), words.len());
}

#[test]
fn test_missing_words_not_found() {
    let trie = Trie::from_words(get_test_words());
    for word in ["bo", "bogg", "qua", "tre", "treats", "quack", "zebra"] {
        if let Some(node) = trie.walk(word) {
            assert!(!trie.is_word_end(node), "unexpected word: {}", word);
        }
        assert!(!trie.contains(word));
    }
}

#[test]
fn test_shared_prefixes_share_nodes() {
    let mut trie = Trie::new();
    trie.insert("tree");
    let before = trie.node_count();
    trie.insert("trees");
    assert_eq!(trie.node_count(), before + 1);
    trie.insert("tr");
    assert_eq!(trie.node_count(), before + 1);
    assert_eq!(trie.word_count(), 3);
}

#[test]
fn test_collect_from_iterator() {
    let trie: Trie = get_test_words().into_iter().collect();
    assert!(trie.contains("quiet"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cat").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "quad\r").unwrap();
    file.flush().unwrap();

    let trie = Trie::load(file.path()).unwrap();
    assert!(trie.contains("cat"));
    assert!(trie.contains("quad"));
    // The blank line marks the root but is not a word.
    assert_eq!(trie.word_count(), 2);
}

#[test]
fn test_solver_load_dictionary_extends() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dog").unwrap();
    file.flush().unwrap();

    let mut solver = Solver::new(Trie::from_words(["cat"]));
    let lines = solver.load_dictionary(file.path()).unwrap();
    assert_eq!(lines, 1);
    assert!(solver.trie().contains("cat"));
    assert!(solver.trie().contains("dog"));

    let fresh = Solver::from_dictionary_file(file.path()).unwrap();
    assert!(!fresh.trie().contains("cat"));
}

#[test]
fn test_missing_dictionary_file() {
    let mut solver = Solver::new(Trie::from_words(["cat"]));
    assert!(solver.load_dictionary("/no/such/dictionary.txt").is_err());
    assert!(solver.trie().contains("cat"));
}
