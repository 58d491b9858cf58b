use alloc::collections::VecDeque;

use tracing::debug;

use crate::{decoder::StreamFrameDecoder, frame::Frame};

/// Pulls byte chunks from a fallible source and yields decoded frames.
///
/// When the source is exhausted the decoder is flushed. When the source
/// yields an error the decoder is flushed as well, its frames are yielded
/// first and the error last; the iterator then ends.
///
/// ```rust
/// use framemodem::{Frame, StreamFrameDecoder};
///
/// let chunks: Vec<Result<&str, &str>> = vec![
///     Ok("data:one\n"),
///     Ok("data:tw"),
///     Err("connection reset"),
/// ];
/// let out: Vec<_> = StreamFrameDecoder::default().decode_iter(chunks).collect();
/// assert_eq!(
///     out,
///     [Ok(Frame::new("one\n")), Ok(Frame::new("tw")), Err("connection reset")]
/// );
/// ```
#[derive(Debug)]
pub struct FrameIter<I, E> {
    decoder: StreamFrameDecoder,
    source: Option<I>,
    ready: VecDeque<Result<Frame, E>>,
}

impl<I, E> FrameIter<I, E> {
    /// Wrap `source` with `decoder`.
    #[must_use]
    pub fn new(decoder: StreamFrameDecoder, source: I) -> Self {
        Self {
            decoder,
            source: Some(source),
            ready: VecDeque::new(),
        }
    }

    /// The decoder driven by this iterator.
    #[must_use]
    pub fn decoder(&self) -> &StreamFrameDecoder {
        &self.decoder
    }

    /// Returns `true` once the source has ended or failed.
    #[must_use]
    pub fn is_source_done(&self) -> bool {
        self.source.is_none()
    }
}

impl<I, T, E> Iterator for FrameIter<I, E>
where
    I: Iterator<Item = Result<T, E>>,
    T: AsRef<[u8]>,
{
    type Item = Result<Frame, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.ready.pop_front() {
                return Some(item);
            }

            let source = self.source.as_mut()?;
            match source.next() {
                Some(Ok(chunk)) => {
                    self.ready
                        .extend(self.decoder.feed(chunk.as_ref()).into_iter().map(Ok));
                }
                Some(Err(err)) => {
                    self.source = None;
                    let frames = self.decoder.flush();
                    debug!(frames = frames.len(), "chunk source failed, flushed pending frames");
                    self.ready.extend(frames.into_iter().map(Ok));
                    self.ready.push_back(Err(err));
                }
                None => {
                    self.source = None;
                    self.ready.extend(self.decoder.flush().into_iter().map(Ok));
                }
            }
        }
    }
}
