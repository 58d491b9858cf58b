use thiserror::Error;

/// Why a byte sequence could not be decoded as UTF-8 text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Utf8DecodeError {
    /// The input ends inside a multi-byte sequence. More bytes may complete
    /// it.
    #[error("incomplete utf-8 sequence after {valid_up_to} valid bytes")]
    Incomplete {
        /// Number of leading bytes that form complete characters.
        valid_up_to: usize,
    },
    /// The input contains a sequence that no further bytes can repair.
    #[error("invalid utf-8 sequence of {invalid_len} bytes at offset {valid_up_to}")]
    Invalid {
        /// Number of leading bytes that form complete characters.
        valid_up_to: usize,
        /// Length of the first invalid sequence.
        invalid_len: usize,
    },
}

impl From<core::str::Utf8Error> for Utf8DecodeError {
    fn from(err: core::str::Utf8Error) -> Self {
        let valid_up_to = err.valid_up_to();
        match err.error_len() {
            None => Utf8DecodeError::Incomplete { valid_up_to },
            Some(invalid_len) => Utf8DecodeError::Invalid {
                valid_up_to,
                invalid_len,
            },
        }
    }
}
