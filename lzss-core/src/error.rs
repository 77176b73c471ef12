//! Error types for LZSS operations.
//!
//! Encoding cannot fail. Decoding validates every token and reports either a
//! framing problem ([`ErrorKind::Format`]) or a back-reference that points
//! outside what has been reconstructed ([`ErrorKind::Range`]).

use thiserror::Error;

/// Broad classification of an [`LzssError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token stream is malformed (unknown tag, truncated token).
    Format,
    /// A token is well framed but its values are out of range.
    Range,
}

/// The error type for LZSS decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzssError {
    /// Discriminator byte is neither literal nor match.
    #[error("Invalid token tag {tag:#04x} at offset {position}")]
    InvalidTag {
        /// The tag byte found.
        tag: u8,
        /// Byte offset of the tag in the compressed stream.
        position: usize,
    },

    /// Stream ended inside a token.
    #[error(
        "Truncated token at offset {position}: need {needed} more bytes, have {available}"
    )]
    Truncated {
        /// Byte offset of the token's tag in the compressed stream.
        position: usize,
        /// Number of payload bytes the token requires.
        needed: usize,
        /// Number of payload bytes remaining in the stream.
        available: usize,
    },

    /// Back-reference distance is zero or reaches past the reconstructed history.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Number of bytes available in the history buffer.
        history_size: usize,
    },

    /// Match length outside the encodable range.
    #[error("Invalid match length {length} (must be {min}-{max})")]
    InvalidLength {
        /// The invalid length value.
        length: usize,
        /// Smallest allowed length.
        min: usize,
        /// Largest allowed length.
        max: usize,
    },
}

/// Result type alias for LZSS operations.
pub type Result<T> = std::result::Result<T, LzssError>;

impl LzssError {
    /// Create an invalid tag error.
    pub fn invalid_tag(tag: u8, position: usize) -> Self {
        Self::InvalidTag { tag, position }
    }

    /// Create a truncated token error.
    pub fn truncated(position: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            position,
            needed,
            available,
        }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create an invalid length error.
    pub fn invalid_length(length: usize, min: usize, max: usize) -> Self {
        Self::InvalidLength { length, min, max }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTag { .. } | Self::Truncated { .. } => ErrorKind::Format,
            Self::InvalidDistance { .. } | Self::InvalidLength { .. } => ErrorKind::Range,
        }
    }

    /// True if the stream framing is malformed.
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// True if a token carries an out-of-range value.
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}
