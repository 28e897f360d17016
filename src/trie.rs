//! Prefix tree over the lowercase Latin alphabet.
//!
//! Nodes live in a single arena and refer to their children by index, so the
//! tree has no owning pointer chains and is dropped in one piece. The arena
//! only ever grows: there is no deletion, a trie is built once and then read
//! by any number of searches.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::ALPHABET_SIZE;

/// Index of a node inside a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    word_end: bool,
}

/// Maps a byte to its slot in a node's child table, if it is in `[a-z]`.
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter - b'a') as usize)
}

/// Dictionary of words stored as a prefix tree.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Build a trie from any sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Build a trie from a line-oriented source, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut trie = Self::new();
        trie.extend_from_reader(reader)?;
        Ok(trie)
    }

    /// Build a trie from a dictionary file, one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut trie = Self::new();
        trie.load_into(path)?;
        Ok(trie)
    }

    /// Insert every line of `path` into this trie.
    pub fn load_into<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("open dictionary {}", path.display()), e))?;
        let lines = self.extend_from_reader(BufReader::new(file))?;
        info!(
            "loaded {} lines from {} ({} distinct words, {} nodes)",
            lines,
            path.display(),
            self.words,
            self.nodes.len()
        );
        Ok(lines)
    }

    /// Insert every line read from `reader`, returning the number of lines.
    ///
    /// Loading is best effort: when the reader fails part way through, the
    /// words read before the failure stay in the trie and the error is
    /// returned.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut count = 0;
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io("read dictionary line", e))?;
            self.insert(&line);
            count += 1;
        }
        Ok(count)
    }

    /// Insert a word. Characters outside `[a-z]` are skipped in place.
    ///
    /// Inserting the same word twice leaves the trie unchanged. The empty
    /// string (or a word made only of skipped characters) marks the root.
    pub fn insert(&mut self, word: &str) {
        let mut current = self.root();

        for slot in word.bytes().filter_map(letter_index) {
            current = match self.nodes[current.index()].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[current.index()].children[slot] = Some(child);
                    child
                }
            };
        }

        let is_root = current == self.root();
        let node = &mut self.nodes[current.index()];
        if !node.word_end {
            node.word_end = true;
            if !is_root {
                self.words += 1;
            }
        }
    }

    /// The node for the empty prefix.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Follow one letter from `node`. `None` means no inserted word continues
    /// this way (including for any letter outside `[a-z]`).
    #[inline]
    pub fn step(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        let slot = letter_index(letter)?;
        self.nodes[node.index()].children[slot]
    }

    /// Whether some inserted word ends exactly at `node`.
    #[inline]
    pub fn is_word_end(&self, node: NodeId) -> bool {
        self.nodes[node.index()].word_end
    }

    /// Walk `prefix` from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(self.root(), |node, letter| self.step(node, letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_word_end(node))
    }

    /// Number of distinct non-empty words stored. A blank line marks the
    /// root but is not counted.
    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_insert_and_contains() {
        let trie = Trie::from_words(["cat", "cats", "dog"]);
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("do"));
        assert!(!trie.contains("cow"));
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn test_prefix_is_not_word_end() {
        let trie = Trie::from_words(["quad"]);
        let node = trie.walk("qua").unwrap();
        assert!(!trie.is_word_end(node));
        let end = trie.step(node, b'd').unwrap();
        assert!(trie.is_word_end(end));
        assert!(trie.step(end, b's').is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("tree");
        let nodes = trie.node_count();
        trie.insert("tree");
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_non_letters_are_skipped() {
        let trie = Trie::from_words(["don't", "Rat\r", "x-ray"]);
        assert!(trie.contains("dont"));
        assert!(trie.contains("at"));
        assert!(trie.contains("xray"));
        assert!(!trie.contains("rat"));
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.is_word_end(trie.root()));
        assert!(trie.contains(""));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_blank_lines_only_is_empty() {
        let trie = Trie::from_reader(Cursor::new("\n\n\r\n")).unwrap();
        assert_eq!(trie.word_count(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_step_rejects_non_letters() {
        let trie = Trie::from_words(["abc"]);
        assert!(trie.step(trie.root(), b'A').is_none());
        assert!(trie.step(trie.root(), b'{').is_none());
        assert!(trie.step(trie.root(), b'`').is_none());
        assert!(trie.step(trie.root(), b'a').is_some());
    }

    #[test]
    fn test_from_reader() {
        let trie = Trie::from_reader(Cursor::new("apple\n\nbanana\r\ncherry\n")).unwrap();
        assert!(trie.contains("apple"));
        assert!(trie.contains("banana"));
        assert!(trie.contains("cherry"));
        assert_eq!(trie.word_count(), 3);
    }

    struct FailAfter {
        data: Cursor<&'static [u8]>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_partial_load_keeps_words() {
        let mut trie = Trie::new();
        let reader = io::BufReader::new(FailAfter {
            data: Cursor::new(b"alpha\nbeta\n"),
        });
        let err = trie.extend_from_reader(reader).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(trie.contains("alpha"));
        assert!(trie.contains("beta"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Trie::load("/definitely/not/a/dictionary.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
