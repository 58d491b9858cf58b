//! Byte-to-text normalization for byte chunks.
//!
//! [`decode_chunk`] reports success or the reason for failure as a value so
//! that an incomplete trailing sequence, the common case on a live stream,
//! is handled without any error-driven control flow.

use alloc::string::String;

use bstr::ByteSlice;

use crate::error::Utf8DecodeError;

/// Decode `bytes` as UTF-8 in full.
///
/// # Errors
///
/// Returns [`Utf8DecodeError::Incomplete`] if the bytes end inside a
/// multi-byte sequence, or [`Utf8DecodeError::Invalid`] if they contain a
/// sequence that can never become valid.
pub fn decode_chunk(bytes: &[u8]) -> Result<&str, Utf8DecodeError> {
    core::str::from_utf8(bytes).map_err(Utf8DecodeError::from)
}

/// Byte offset at which a trailing incomplete sequence begins, or
/// `bytes.len()` if the input does not end mid-character.
///
/// Invalid sequences before the tail are skipped over, not reported.
#[must_use]
pub fn incomplete_tail_start(bytes: &[u8]) -> usize {
    let mut offset = 0;
    loop {
        match core::str::from_utf8(&bytes[offset..]) {
            Ok(_) => return bytes.len(),
            Err(err) => match err.error_len() {
                None => return offset + err.valid_up_to(),
                Some(invalid_len) => offset += err.valid_up_to() + invalid_len,
            },
        }
    }
}

/// Decode everything before a trailing incomplete sequence, replacing
/// invalid sequences with U+FFFD.
///
/// Returns the decoded text and the number of bytes consumed. Bytes past the
/// returned offset form an incomplete sequence the caller should keep.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let end = incomplete_tail_start(bytes);
    (bytes[..end].to_str_lossy().into_owned(), end)
}
