//! The incremental frame decoder.
//!
//! Text accumulates in a pending buffer until a chunk arrives whose text
//! starts with the frame marker. Only then is everything buffered before it
//! known to be complete, split into frames and emitted. [`flush`] finalizes
//! whatever is left at the end of the stream.
//!
//! [`flush`]: StreamFrameDecoder::flush

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;
use tracing::{debug, trace, warn};

use crate::{
    chunk::Chunk,
    error::Utf8DecodeError,
    frame::Frame,
    frames_iter::FrameIter,
    options::DecoderOptions,
    split::Splitter,
    utf8,
};

/// Lifecycle of a [`StreamFrameDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// Appending incoming text to the pending buffer.
    #[default]
    Accumulating,
    /// [`StreamFrameDecoder::flush`] has drained the buffers.
    Drained,
}

/// Converts byte or text chunks of a `data:`-framed stream into frames.
///
/// One decoder serves one stream. Calls must be made in arrival order; the
/// decoder never fails, malformed input at worst ends up in one oversized
/// frame at flush time.
#[derive(Debug, Clone)]
pub struct StreamFrameDecoder {
    options: DecoderOptions,
    splitter: Splitter,
    pending_text: String,
    /// Leftover of the last byte chunk that ended mid-character.
    pending_bytes: Vec<u8>,
    state: DecoderState,
}

impl Default for StreamFrameDecoder {
    fn default() -> Self {
        Self::new(DecoderOptions::default())
    }
}

impl StreamFrameDecoder {
    /// Create a decoder for one stream.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            splitter: Splitter::new(&options),
            options,
            pending_text: String::new(),
            pending_bytes: Vec::new(),
            state: DecoderState::Accumulating,
        }
    }

    /// Feed the next chunk of the stream.
    ///
    /// Returns the frames of the previously buffered batch if this chunk
    /// starts with the marker, otherwise an empty vector.
    pub fn feed<'c>(&mut self, chunk: impl Into<Chunk<'c>>) -> Vec<Frame> {
        if self.state == DecoderState::Drained {
            warn!("chunk fed to a drained decoder, starting a new batch");
            self.state = DecoderState::Accumulating;
        }

        match chunk.into() {
            Chunk::Text("") => Vec::new(),
            Chunk::Text(text) => {
                // Text cannot complete a multi-byte sequence, so leftover
                // bytes go first.
                let mut frames = self.drain_pending_bytes();
                frames.extend(self.accept_text(text));
                frames
            }
            Chunk::Bytes(bytes) => match self.normalize(bytes) {
                Some(text) => self.accept_text(&text),
                None => Vec::new(),
            },
        }
    }

    /// Finalize the stream and return every buffered frame.
    ///
    /// Returns an empty vector if nothing is buffered, so a second call in a
    /// row yields nothing.
    pub fn flush(&mut self) -> Vec<Frame> {
        self.state = DecoderState::Drained;

        let mut frames = self.drain_pending_bytes();
        if self.pending_text.is_empty() {
            return frames;
        }

        let batch = core::mem::take(&mut self.pending_text);
        frames.extend(self.splitter.split(&batch));
        debug!(frames = frames.len(), bytes = batch.len(), "flushed final batch");
        frames
    }

    /// Feed every chunk, then flush.
    pub fn decode_all<'c, I>(mut self, chunks: I) -> Vec<Frame>
    where
        I: IntoIterator,
        I::Item: Into<Chunk<'c>>,
    {
        let mut frames = Vec::new();
        for chunk in chunks {
            frames.extend(self.feed(chunk));
        }
        frames.extend(self.flush());
        frames
    }

    /// Decode a fallible source of byte chunks, see [`FrameIter`].
    #[must_use]
    pub fn decode_iter<S, T, E>(self, source: S) -> FrameIter<S::IntoIter, E>
    where
        S: IntoIterator<Item = Result<T, E>>,
        T: AsRef<[u8]>,
    {
        FrameIter::new(self, source.into_iter())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Options the decoder was built with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decoded text not yet emitted as frames.
    #[must_use]
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Raw bytes waiting for the rest of a multi-byte sequence.
    #[must_use]
    pub fn pending_bytes(&self) -> &[u8] {
        &self.pending_bytes
    }

    /// Returns `true` if any text or bytes are buffered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending_text.is_empty() || !self.pending_bytes.is_empty()
    }

    fn accept_text(&mut self, text: &str) -> Vec<Frame> {
        if self.splitter.starts_frame(text) && !self.pending_text.is_empty() {
            let batch = core::mem::replace(&mut self.pending_text, String::from(text));
            let frames = self.splitter.split(&batch);
            trace!(
                frames = frames.len(),
                bytes = batch.len(),
                marker = self.splitter.marker(),
                "finalized batch"
            );
            return frames;
        }

        self.pending_text.push_str(text);
        Vec::new()
    }

    /// Decode leftover bytes lossily and run them through the marker check
    /// like any other chunk.
    fn drain_pending_bytes(&mut self) -> Vec<Frame> {
        if self.pending_bytes.is_empty() {
            return Vec::new();
        }
        let bytes = core::mem::take(&mut self.pending_bytes);
        warn!(len = bytes.len(), "gave up on an incomplete multi-byte sequence");
        self.accept_text(&bytes.to_str_lossy())
    }

    /// Prepend leftover bytes and decode. `None` means the chunk produced no
    /// text yet.
    fn normalize(&mut self, bytes: &[u8]) -> Option<String> {
        let combined: Vec<u8>;
        let input = if self.pending_bytes.is_empty() {
            bytes
        } else {
            let mut joined = core::mem::take(&mut self.pending_bytes);
            joined.extend_from_slice(bytes);
            combined = joined;
            combined.as_slice()
        };

        match utf8::decode_chunk(input) {
            Ok(text) => Some(String::from(text)),
            Err(Utf8DecodeError::Incomplete { valid_up_to }) => {
                trace!(
                    valid_up_to,
                    len = input.len(),
                    "incomplete utf-8 sequence, waiting for more bytes"
                );
                self.pending_bytes = input.to_vec();
                None
            }
            Err(err @ Utf8DecodeError::Invalid { .. }) => {
                let (text, used) = utf8::decode_lossy(input);
                warn!(error = %err, "replaced invalid utf-8 in chunk");
                self.pending_bytes = input[used..].to_vec();
                Some(text)
            }
        }
    }
}
