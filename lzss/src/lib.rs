//! # LZSS
//!
//! Pure Rust LZSS (Lempel-Ziv-Storer-Szymanski) compression.
//!
//! LZSS is a derivative of LZ77 that only emits a back-reference when it is
//! at least [`MIN_MATCH`] bytes long; shorter runs are stored as literals.
//! This crate implements the byte-aligned variant with:
//!
//! - a 4KB sliding window ([`WINDOW_SIZE`])
//! - matches of 3 to 18 bytes ([`MIN_MATCH`], [`LOOKAHEAD_SIZE`])
//! - one tag byte per token, no header and no end marker
//!
//! ## Wire Format
//!
//! | Field         | Size | Meaning                               |
//! |---------------|------|---------------------------------------|
//! | tag           | 1    | `0` = literal, `1` = match            |
//! | literal       | 1    | raw byte (tag `0` only)               |
//! | distance      | 2    | big-endian, 1..=4096 (tag `1` only)   |
//! | length        | 1    | 3..=18 (tag `1` only)                 |
//!
//! The compressed stream carries no length of its own; callers frame it.
//!
//! ## Example
//!
//! ```rust
//! use lzss::{decode, encode};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = encode(original);
//! let decompressed = decode(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Malformed Input
//!
//! Decoding validates every token. Unknown tags and truncated tokens are
//! [`ErrorKind::Format`] errors; zero or out-of-window distances and
//! out-of-range lengths are [`ErrorKind::Range`] errors. No partial output is
//! returned on failure.
//!
//! ```rust
//! use lzss::{ErrorKind, decode};
//!
//! let err = decode(&[0, b'a', 1]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Format);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
pub mod token;

pub use decoder::LzssDecoder;
pub use encoder::LzssEncoder;
pub use lzss_core::{ErrorKind, LzssError, Result, RingBuffer};
pub use token::{LzssToken, TokenReader, parse_tokens, serialize_tokens};

/// Size of the history window in bytes.
pub const WINDOW_SIZE: usize = 4096;

/// Mask used to wrap history indices.
pub const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Maximum match length.
pub const LOOKAHEAD_SIZE: usize = 18;

/// Minimum match length; shorter runs are emitted as literals.
pub const MIN_MATCH: usize = 3;

/// Tag byte preceding a literal.
pub const LITERAL_TAG: u8 = 0;

/// Tag byte preceding a match descriptor.
pub const MATCH_TAG: u8 = 1;

/// Encoded size of a literal token (tag + byte).
pub const LITERAL_TOKEN_LEN: usize = 2;

/// Encoded size of a match token (tag + distance + length).
pub const MATCH_TOKEN_LEN: usize = 4;

const _: () = assert!(WINDOW_SIZE.is_power_of_two());
const _: () = assert!(WINDOW_SIZE <= u16::MAX as usize);
const _: () = assert!(LOOKAHEAD_SIZE <= u8::MAX as usize);

/// Compress data with LZSS.
///
/// # Example
///
/// ```rust
/// use lzss::encode;
///
/// assert!(encode(b"").is_empty());
/// assert_eq!(encode(b"ab"), [0, b'a', 0, b'b']);
/// ```
pub fn encode(data: &[u8]) -> Vec<u8> {
    LzssEncoder::new().encode(data)
}

/// Decompress an LZSS stream produced by [`encode`].
///
/// # Example
///
/// ```rust
/// use lzss::{decode, encode};
///
/// let data = vec![7u8; 8];
/// assert_eq!(decode(&encode(&data)).unwrap(), data);
/// ```
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    LzssDecoder::new().decode(data)
}
