use thiserror::Error;

/// Errors produced while converting values to and from their byte encodings.
///
/// Every variant is fatal to the invocation that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A canonical buffer is neither empty nor the exact length of its type.
    #[error("invalid {type_name} length: expected {expected}, got {actual}")]
    InvalidLength {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The decoder ran out of bytes.
    #[error("insufficient bytes: need {needed}, have {available}")]
    Truncated { needed: usize, available: usize },

    /// The bytes have the right shape but violate a structural invariant.
    #[error("invalid {type_name}: {reason}")]
    Malformed {
        type_name: &'static str,
        reason: String,
    },

    /// Bytes remained after a complete value was decoded.
    #[error("{0} extra bytes after decoding")]
    TrailingBytes(usize),

    /// An array element past the end of the array was requested.
    #[error("index {index} out of range for array of length {length}")]
    IndexOutOfRange { index: u32, length: u32 },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}

impl CodecError {
    /// Create a [`CodecError::Malformed`] for the given type.
    pub fn malformed(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            type_name,
            reason: reason.into(),
        }
    }
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
