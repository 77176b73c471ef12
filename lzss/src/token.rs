//! LZSS tokens and their byte-aligned wire format.
//!
//! ```text
//! Literal: [0x00] [byte]
//! Match:   [0x01] [distance hi] [distance lo] [length]
//! ```
//!
//! There is no header, trailer or length prefix: a stream is simply the
//! concatenation of its tokens and ends where the buffer ends.

use crate::{LITERAL_TAG, LITERAL_TOKEN_LEN, MATCH_TAG, MATCH_TOKEN_LEN};
use lzss_core::error::{LzssError, Result};

/// LZSS token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzssToken {
    /// A literal byte.
    Literal(u8),
    /// A back-reference into the history window.
    Match {
        /// Distance back from the current write position (1 = previous byte).
        distance: u16,
        /// Number of bytes to copy.
        length: u8,
    },
}

impl LzssToken {
    /// Size of this token on the wire, tag included.
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Literal(_) => LITERAL_TOKEN_LEN,
            Self::Match { .. } => MATCH_TOKEN_LEN,
        }
    }

    /// Number of uncompressed bytes this token produces.
    pub fn decoded_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { length, .. } => usize::from(*length),
        }
    }

    /// Append the wire representation of this token to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            Self::Literal(byte) => out.extend_from_slice(&[LITERAL_TAG, byte]),
            Self::Match { distance, length } => {
                let [hi, lo] = distance.to_be_bytes();
                out.extend_from_slice(&[MATCH_TAG, hi, lo, length]);
            }
        }
    }
}

/// Iterator over the tokens of a compressed stream.
///
/// Yields `Err` for an unknown tag or a token cut off by the end of the
/// buffer, then stops.
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    data: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over a compressed stream.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            failed: false,
        }
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.position
    }

    fn read_token(&mut self) -> Result<LzssToken> {
        let start = self.position;
        let tag = self.data[start];
        let payload = &self.data[start + 1..];

        match tag {
            LITERAL_TAG => {
                let &[byte, ..] = payload else {
                    return Err(LzssError::truncated(
                        start,
                        LITERAL_TOKEN_LEN - 1,
                        payload.len(),
                    ));
                };
                self.position += LITERAL_TOKEN_LEN;
                Ok(LzssToken::Literal(byte))
            }
            MATCH_TAG => {
                let &[hi, lo, length, ..] = payload else {
                    return Err(LzssError::truncated(
                        start,
                        MATCH_TOKEN_LEN - 1,
                        payload.len(),
                    ));
                };
                self.position += MATCH_TOKEN_LEN;
                Ok(LzssToken::Match {
                    distance: u16::from_be_bytes([hi, lo]),
                    length,
                })
            }
            _ => Err(LzssError::invalid_tag(tag, start)),
        }
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Result<LzssToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.data.len() {
            return None;
        }

        let token = self.read_token();
        self.failed = token.is_err();
        Some(token)
    }
}

/// Parse a whole compressed stream into tokens.
///
/// Only the framing is checked here; distances and lengths are validated
/// against the history by [`LzssDecoder`](crate::LzssDecoder).
pub fn parse_tokens(data: &[u8]) -> Result<Vec<LzssToken>> {
    TokenReader::new(data).collect()
}

/// Serialize tokens into a compressed stream.
pub fn serialize_tokens(tokens: &[LzssToken]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.iter().map(LzssToken::encoded_len).sum());
    for token in tokens {
        token.write_to(&mut out);
    }
    out
}
