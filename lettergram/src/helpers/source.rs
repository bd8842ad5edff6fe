use async_trait::async_trait;
use lettergram_error::{Error, ErrorType, IoError, Result};
use tokio::io::{AsyncRead, AsyncReadExt, Stdin};

/// A finite sequence of text fragments, consumed once.
#[async_trait]
pub trait TextSource: Send {
    /// Waits for the next fragment.
    /// Returns `Ok(None)` once the source is exhausted.
    async fn next_fragment(&mut self) -> Result<Option<String>>;
}

/// Reads UTF-8 text from an async reader, one chunk per read.
///
/// A character whose bytes are split between two reads is kept until it is
/// complete. Invalid sequences are replaced by U+FFFD.
#[derive(Debug)]
pub struct StdinSource<R> {
    reader: R,
    buffer: Vec<u8>,
    /// Bytes not yet decoded, at most an incomplete trailing character.
    pending: Vec<u8>,
    exhausted: bool,
}

impl StdinSource<Stdin> {
    /// Reads the standard input of the process.
    pub fn stdin(chunk_size: usize) -> Self {
        Self::new(tokio::io::stdin(), chunk_size)
    }
}

impl<R> StdinSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Creates a source reading at most `chunk_size` bytes at a time.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0; chunk_size.max(1)],
            pending: Vec::new(),
            exhausted: false,
        }
    }

    /// Decodes every complete character of `pending`.
    fn decode(&mut self) -> String {
        let tail = self.pending.split_off(self.pending.len() - incomplete_suffix(&self.pending));
        let fragment = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending = tail;

        fragment
    }
}

/// Length of the unfinished multibyte sequence ending `bytes`.
fn incomplete_suffix(bytes: &[u8]) -> usize {
    let mut offset = 0;

    loop {
        match std::str::from_utf8(&bytes[offset..]) {
            Ok(_) => return 0,
            Err(error) => match error.error_len() {
                Some(invalid) => offset += error.valid_up_to() + invalid,
                None => return bytes.len() - offset - error.valid_up_to(),
            },
        }
    }
}

#[async_trait]
impl<R> TextSource for StdinSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_fragment(&mut self) -> Result<Option<String>> {
        while !self.exhausted {
            let read = self.reader.read(&mut self.buffer).await.map_err(|error| {
                Error::new(
                    ErrorType::InputOutput(IoError::ReadingError),
                    Some(Box::new(error)),
                    Some("text source".to_string()),
                )
            })?;

            if read == 0 {
                self.exhausted = true;
                if !self.pending.is_empty() {
                    let rest = String::from_utf8_lossy(&self.pending).into_owned();
                    self.pending.clear();
                    return Ok(Some(rest));
                }
            } else {
                self.pending.extend_from_slice(&self.buffer[..read]);
                let fragment = self.decode();
                // Nothing complete yet, the next read finishes the character.
                if !fragment.is_empty() {
                    return Ok(Some(fragment));
                }
            }
        }

        Ok(None)
    }
}

/// Source over fragments already in memory.
#[derive(Debug)]
pub struct FragmentSource<I> {
    fragments: I,
}

impl<I> FragmentSource<I>
where
    I: Iterator<Item = String> + Send,
{
    /// Creates a source yielding each item of `fragments` in order.
    pub fn new<T>(fragments: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            fragments: fragments.into_iter(),
        }
    }
}

#[async_trait]
impl<I> TextSource for FragmentSource<I>
where
    I: Iterator<Item = String> + Send,
{
    async fn next_fragment(&mut self) -> Result<Option<String>> {
        Ok(self.fragments.next())
    }
}
