use ahash::AHashMap;
use smallvec::SmallVec;
use std::{cmp::Reverse, fmt};

/// Lowest percentage a letter needs to appear in the histogram.
pub const DEFAULT_THRESHOLD: f64 = 1.0;
/// Character repeated to draw the bars.
pub const DEFAULT_BAR: char = '#';

/// One line of the histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramEntry {
    /// The uppercase letter.
    pub letter: char,
    /// Share of the letter among every counted letter, from 0 to 100.
    pub percentage: f64,
}

impl HistogramEntry {
    /// Length of the bar, the percentage rounded half away from zero.
    pub fn bar_len(&self) -> usize {
        self.percentage.round() as usize
    }

    fn line(&self, bar: char) -> String {
        format!(
            "{}: {} {} %",
            self.letter,
            bar.to_string().repeat(self.bar_len()),
            two_decimals(self.percentage)
        )
    }
}

/// Formats a non-negative value with two decimals, rounding exact halves up.
///
/// A value halfway between two hundredths is an odd multiple of 1/200, and
/// only the odd multiples of 1/8 among them are representable, so a tie is
/// detected exactly by `value * 8` being an odd integer. Every other value is
/// already correctly rounded by `{:.2}`.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;

    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        format!("{:.2}", (value * 100.0 + 0.5).floor() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

impl fmt::Display for HistogramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line(DEFAULT_BAR))
    }
}

/// Settings used to turn letter counts into a textual histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Histogram {
    /// Entries below this percentage are left out.
    pub threshold: f64,
    /// Character used to draw the bars.
    pub bar: char,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bar: DEFAULT_BAR,
        }
    }
}

impl Histogram {
    /// Creates histogram settings.
    pub fn new(threshold: f64, bar: char) -> Self {
        Self { threshold, bar }
    }

    /// Ranks the letters by decreasing share, then alphabetically, and keeps
    /// the ones reaching the threshold.
    ///
    /// Without any counted letter there is nothing to divide by, so no entry
    /// is returned.
    pub fn entries(
        &self,
        letters: &AHashMap<char, usize>,
        total: usize,
    ) -> SmallVec<[HistogramEntry; 26]> {
        if total == 0 {
            return SmallVec::new();
        }

        let mut ranked: SmallVec<[(char, usize); 26]> = letters
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(letter, count)| (*letter, *count))
            .collect();

        // Every share has the same denominator, so ranking on counts is
        // ranking on percentages.
        ranked.sort_unstable_by_key(|&(letter, count)| (Reverse(count), letter));

        ranked
            .into_iter()
            .map(|(letter, count)| HistogramEntry {
                letter,
                percentage: (count as f64 * 100.0) / total as f64,
            })
            .filter(|entry| entry.percentage >= self.threshold)
            .collect()
    }

    /// Renders the histogram, one line per kept letter.
    ///
    /// # Examples
    /// ```rust
    /// use lettergram_algorithm::{FrequencyCounter, Histogram};
    ///
    /// let mut counter = FrequencyCounter::new();
    /// counter.add("abbb");
    ///
    /// let report = Histogram::default().render(counter.letters(), counter.total());
    /// assert_eq!(report.lines().next(), Some(format!("B: {} 75.00 %", "#".repeat(75)).as_str()));
    /// ```
    pub fn render(&self, letters: &AHashMap<char, usize>, total: usize) -> String {
        self.entries(letters, total)
            .iter()
            .map(|entry| entry.line(self.bar))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
