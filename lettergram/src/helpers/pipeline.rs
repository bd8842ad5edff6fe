use crate::helpers::source::TextSource;
use lettergram_algorithm::{FrequencyCounter, Histogram};
use lettergram_error::{Error, ErrorType, IoError, Result};
use std::io::Write;
use tracing::{debug, trace};

/// Counts the letters of every fragment until the source is exhausted, then
/// writes the histogram once to `sink`.
///
/// Errors from the source are returned as they are and nothing is written.
pub async fn run<S, W>(
    mut source: S,
    sink: &mut W,
    histogram: &Histogram,
) -> Result<FrequencyCounter>
where
    S: TextSource,
    W: Write,
{
    let mut counter = FrequencyCounter::new();
    let mut fragments: usize = 0;

    while let Some(fragment) = source.next_fragment().await? {
        trace!("Received fragment of {} bytes.", fragment.len());
        counter.add(&fragment);
        fragments += 1;
    }

    debug!(
        "Counted {} letters ({} distinct) in {} fragments.",
        counter.total(),
        counter.len(),
        fragments
    );

    writeln!(sink, "{}", counter.histogram(histogram))
        .and_then(|_| sink.flush())
        .map_err(|error| {
            Error::new(
                ErrorType::InputOutput(IoError::WritingError),
                Some(Box::new(error)),
                None,
            )
        })?;

    Ok(counter)
}
