use crate::list::List;
use crate::map::SeparateChainingMap;

/// A word index: maps every word of a text to the 0-based line numbers it
/// occurs on, in occurrence order.
///
/// Built on [`SeparateChainingMap`] with [`List`] values, so looking a
/// word up hands back the crate's own list of line numbers. A word that
/// appears several times on one line records that line once per
/// occurrence.
///
/// # Examples
///
/// ```
/// use sentinel_list::WordIndex;
///
/// let mut index = WordIndex::new();
/// index.index_text("the quick fox\njumps over the dog");
///
/// assert_eq!(index.line_count(), 2);
/// assert_eq!(index.lines_for("the").unwrap().to_string(), "0 1");
/// assert_eq!(index.lines_for("fox").unwrap().to_string(), "0");
/// assert!(index.lines_for("cat").is_none());
/// ```
#[derive(Default)]
pub struct WordIndex {
    entries: SeparateChainingMap<String, List<usize>>,
    line_count: usize,
}

impl WordIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            entries: SeparateChainingMap::new(),
            line_count: 0,
        }
    }

    /// Returns the number of lines indexed so far.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Indexes one line of text: every whitespace-separated word on it is
    /// recorded under the current line number, and the line counter
    /// advances.
    pub fn index_line(&mut self, line: &str) {
        for word in line.split_whitespace() {
            match self.entries.get_mut(word) {
                Some(lines) => lines.push_back(self.line_count),
                None => {
                    let mut lines = List::new();
                    lines.push_back(self.line_count);
                    self.entries.put(word.to_string(), lines);
                }
            }
        }
        self.line_count += 1;
    }

    /// Indexes a whole text, line by line.
    pub fn index_text(&mut self, text: &str) {
        for line in text.lines() {
            self.index_line(line);
        }
    }

    /// Returns the line numbers recorded for `word`, or `None` if the word
    /// never occurred.
    pub fn lines_for(&self, word: &str) -> Option<&List<usize>> {
        self.entries.get(word)
    }
}

#[cfg(test)]
mod tests {
    use super::WordIndex;
    use pretty_assertions::assert_eq;

    fn lines(index: &WordIndex, word: &str) -> Vec<usize> {
        index
            .lines_for(word)
            .map(|list| list.iter().copied().collect())
            .unwrap_or_default()
    }

    #[test]
    fn indexes_words_by_line() {
        let mut index = WordIndex::new();
        index.index_text("a b c\nb c\nc");
        assert_eq!(index.line_count(), 3);
        assert_eq!(lines(&index, "a"), vec![0]);
        assert_eq!(lines(&index, "b"), vec![0, 1]);
        assert_eq!(lines(&index, "c"), vec![0, 1, 2]);
        assert!(index.lines_for("d").is_none());
    }

    #[test]
    fn repeated_word_on_one_line_records_each_occurrence() {
        let mut index = WordIndex::new();
        index.index_line("ho ho ho");
        assert_eq!(lines(&index, "ho"), vec![0, 0, 0]);
    }

    #[test]
    fn blank_lines_still_advance_the_counter() {
        let mut index = WordIndex::new();
        index.index_text("first\n\nthird");
        assert_eq!(index.line_count(), 3);
        assert_eq!(lines(&index, "third"), vec![2]);
    }

    #[test]
    fn incremental_and_bulk_indexing_agree() {
        let text = "pack my box\nwith five dozen\nliquor jugs";
        let mut bulk = WordIndex::new();
        bulk.index_text(text);
        let mut incremental = WordIndex::new();
        for line in text.lines() {
            incremental.index_line(line);
        }
        for word in text.split_whitespace() {
            assert_eq!(lines(&bulk, word), lines(&incremental, word));
        }
        assert_eq!(bulk.line_count(), incremental.line_count());
    }

    #[test]
    fn survives_many_distinct_words() {
        let mut index = WordIndex::new();
        let text: String = (0..200)
            .map(|i| format!("word{}\n", i))
            .collect();
        index.index_text(&text);
        assert_eq!(index.line_count(), 200);
        assert_eq!(lines(&index, "word150"), vec![150]);
    }
}
