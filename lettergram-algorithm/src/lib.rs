//! # lettergram-algorithm
//!
//! counts letters across text fragments and ranks them into a histogram!
//! Provided pieces:
//! - FrequencyCounter, cumulative letter counts;
//! - Histogram, ranked and filtered report of those counts.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

/// Cumulative letter counts over any number of fragments.
pub mod counter;
/// Ranking, filtering and formatting of letter counts.
pub mod histogram;

pub use counter::FrequencyCounter;
pub use histogram::{Histogram, HistogramEntry};
