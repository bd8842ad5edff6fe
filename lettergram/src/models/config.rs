use lettergram_algorithm::histogram::{Histogram, DEFAULT_BAR, DEFAULT_THRESHOLD};
use serde::Deserialize;

/// Bytes requested from the text source on each read.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// The data in the configuration file for setting up lettergram.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Bytes requested from the text source on each read.
    pub chunk_size: Option<usize>,
    /// How the report is drawn.
    #[serde(default)]
    pub histogram: HistogramConfig,
}

/// How the report is drawn.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct HistogramConfig {
    /// Lowest percentage, inclusive, for a letter to be displayed.
    pub threshold: Option<f64>,
    /// Character repeated in the bars.
    pub bar: Option<char>,
}

impl Config {
    /// Configured chunk size, or [`DEFAULT_CHUNK_SIZE`].
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    /// Histogram settings, defaults filling the missing values.
    pub fn histogram(&self) -> Histogram {
        Histogram::new(
            self.histogram.threshold.unwrap_or(DEFAULT_THRESHOLD),
            self.histogram.bar.unwrap_or(DEFAULT_BAR),
        )
    }

    /// Returns the first value out of its accepted range, if any.
    pub fn invalid_value(&self) -> Option<String> {
        if self.chunk_size == Some(0) {
            return Some("chunk_size must be greater than 0".to_string());
        }

        match self.histogram.threshold {
            Some(threshold) if !threshold.is_finite() || threshold < 0.0 => Some(format!(
                "histogram.threshold must be a finite number of at least 0, got {}",
                threshold
            )),
            _ => None,
        }
    }
}
