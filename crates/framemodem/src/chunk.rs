use alloc::{string::String, vec::Vec};

/// One unit of input as delivered by the transport.
///
/// Text chunks are appended as-is. Byte chunks go through UTF-8
/// normalization first and may end inside a multi-byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Already decoded text.
    Text(&'a str),
    /// Raw bytes, possibly ending mid-character.
    Bytes(&'a [u8]),
}

impl Chunk<'_> {
    /// Length of the chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Chunk::Text(text) => text.len(),
            Chunk::Bytes(bytes) => bytes.len(),
        }
    }

    /// Returns `true` if the chunk carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(text: &'a str) -> Self {
        Chunk::Text(text)
    }
}

impl<'a> From<&'a String> for Chunk<'a> {
    fn from(text: &'a String) -> Self {
        Chunk::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Chunk<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Chunk<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Chunk::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Chunk<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Chunk::Bytes(bytes.as_slice())
    }
}
