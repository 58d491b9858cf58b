//! An incremental decoder for `data:`-prefixed, newline-delimited event
//! streams, as delivered chunk by chunk by a streaming HTTP response.
//!
//! Chunks may arrive as text or as raw bytes. Byte chunks may end in the
//! middle of a multi-byte UTF-8 sequence, and frame delimiters may be split
//! across chunks or merged into one. [`StreamFrameDecoder`] buffers input and
//! only finalizes a batch of frames once the next chunk starts with the frame
//! marker, or when the stream is flushed.
//!
//! ```rust
//! use framemodem::StreamFrameDecoder;
//!
//! let mut decoder = StreamFrameDecoder::default();
//! assert!(decoder.feed("data:hello").is_empty());
//! assert_eq!(decoder.feed("data:world"), ["hello"]);
//! assert_eq!(decoder.flush(), ["world"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chunk;
mod chunk_utils;
mod decoder;
mod error;
mod frame;
mod frames_iter;
mod options;
mod split;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use chunk::Chunk;
pub use chunk_utils::{produce_byte_chunks, produce_chunks};
pub use decoder::{DecoderState, StreamFrameDecoder};
pub use error::Utf8DecodeError;
pub use frame::Frame;
pub use frames_iter::FrameIter;
pub use options::{BlankLineMode, DecoderOptions, DEFAULT_MARKER};
