use crate::histogram::Histogram;
use ahash::AHashMap;
use lettergram_tokenizer::normalize;
use std::fmt;

/// Structure containing the letters seen so far and how often.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    /// Occurrences of each uppercase letter.
    letters: AHashMap<char, usize>,
    /// Sum of every occurrence in `letters`.
    total: usize,
}

impl FrequencyCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the letters of a fragment to the counts.
    ///
    /// Anything that is not an ASCII letter is ignored and letters are
    /// counted case-insensitively, so feeding a text in pieces gives the same
    /// counts as feeding it at once.
    ///
    /// # Examples
    /// ```rust
    /// use lettergram_algorithm::FrequencyCounter;
    ///
    /// let mut counter = FrequencyCounter::new();
    /// counter.add("AaBb!!123");
    ///
    /// assert_eq!(counter.get('A'), 2);
    /// assert_eq!(counter.total(), 4);
    /// ```
    pub fn add<T: AsRef<str>>(&mut self, fragment: T) {
        for letter in normalize(fragment).chars() {
            if let Some(counter) = self.letters.get_mut(&letter) {
                *counter += 1;
            } else {
                self.letters.insert(letter, 1);
            }
            self.total += 1;
        }
    }

    /// Occurrences of a letter, 0 if it was never seen.
    /// Lowercase letters are looked up as their uppercase form.
    pub fn get(&self, letter: char) -> usize {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of letters counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every letter seen with its count.
    pub fn letters(&self) -> &AHashMap<char, usize> {
        &self.letters
    }

    /// Number of distinct letters seen.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether no letter has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Renders the counts with the given histogram settings.
    pub fn histogram(&self, histogram: &Histogram) -> String {
        histogram.render(&self.letters, self.total)
    }
}

impl fmt::Display for FrequencyCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.histogram(&Histogram::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sum(counter: &FrequencyCounter) {
        assert_eq!(counter.letters().values().sum::<usize>(), counter.total());
    }

    #[test]
    fn test_add_folds_case_and_symbols() {
        let mut counter = FrequencyCounter::new();
        counter.add("AaBb!!123");

        assert_eq!(counter.get('A'), 2);
        assert_eq!(counter.get('B'), 2);
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.total(), 4);
        assert_sum(&counter);
    }

    #[test]
    fn test_get_unseen_letter() {
        let mut counter = FrequencyCounter::new();
        counter.add("abc");

        assert_eq!(counter.get('z'), 0);
        assert_eq!(counter.get('?'), 0);
        assert_eq!(counter.get('b'), 1);
        assert_eq!(counter.len(), 3);
    }

    #[test]
    fn test_add_without_letters() {
        let mut counter = FrequencyCounter::new();
        counter.add("");
        counter.add("1234 !? \n");

        assert!(counter.is_empty());
        assert_eq!(counter.len(), 0);
        assert_eq!(counter.to_string(), "");
    }

    #[test]
    fn test_fragments_match_whole_text() {
        let text = "Sphinx of black quartz, judge my vow!\nPack my box with five dozen liquor jugs.";

        let mut whole = FrequencyCounter::new();
        whole.add(text);

        for size in 1..=text.len() {
            let mut pieces = FrequencyCounter::new();
            for chunk in text.as_bytes().chunks(size) {
                pieces.add(std::str::from_utf8(chunk).unwrap());
            }

            assert_eq!(pieces.letters(), whole.letters());
            assert_eq!(pieces.total(), whole.total());
            assert_sum(&pieces);
        }
    }

    #[test]
    fn test_counts_only_grow() {
        let mut counter = FrequencyCounter::new();
        let mut previous = 0;

        for fragment in ["abc", "", "ABC", "!!", "xyz"] {
            counter.add(fragment);
            assert!(counter.total() >= previous);
            assert_sum(&counter);
            previous = counter.total();
        }

        assert_eq!(counter.total(), 9);
        assert_eq!(counter.get('a'), 2);
    }

    #[test]
    fn test_display() {
        let mut counter = FrequencyCounter::new();
        counter.add("aab");
        counter.add("bbc");
        counter.add("cccc");

        assert_eq!(
            counter.to_string(),
            format!(
                "C: {} 44.44 %\nB: {} 33.33 %\nA: {} 22.22 %",
                "#".repeat(44),
                "#".repeat(33),
                "#".repeat(22)
            )
        );
    }
}
