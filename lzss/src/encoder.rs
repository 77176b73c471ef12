//! LZSS encoder (compression).

use crate::token::LzssToken;
use crate::{LOOKAHEAD_SIZE, MIN_MATCH, WINDOW_SIZE};
use lzss_core::RingBuffer;

/// LZSS encoder.
///
/// Holds the history window between the bytes of a single call. The window
/// is cleared at the start of every [`encode`](Self::encode) or
/// [`tokenize`](Self::tokenize), so one encoder can be reused freely.
#[derive(Debug, Clone)]
pub struct LzssEncoder {
    /// Bytes consumed so far, in the same order the decoder will rebuild them.
    ring: RingBuffer,
}

impl Default for LzssEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LzssEncoder {
    /// Create a new encoder with a [`WINDOW_SIZE`] history.
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::new(WINDOW_SIZE),
        }
    }

    /// History window as left by the last call.
    pub fn history(&self) -> &RingBuffer {
        &self.ring
    }

    /// Find the longest match for the start of `lookahead`.
    ///
    /// Distances are tried nearest first and only a strictly longer run
    /// replaces the current best, so equal lengths resolve to the smallest
    /// distance. Positions a match would itself produce (`len >= distance`)
    /// compare against the lookahead, mirroring the decoder's copy loop.
    fn find_match(&self, lookahead: &[u8]) -> Option<(u16, u8)> {
        let max_len = lookahead.len().min(LOOKAHEAD_SIZE);
        if max_len < MIN_MATCH {
            return None;
        }

        let mut best_len = 0;
        let mut best_dist = 0;

        for distance in 1..=self.ring.len() {
            let mut len = 0;
            while len < max_len {
                let source = if len < distance {
                    self.ring.peek(distance - len)
                } else {
                    lookahead[len - distance]
                };
                if source != lookahead[len] {
                    break;
                }
                len += 1;
            }

            if len > best_len {
                best_len = len;
                best_dist = distance;
                if len == max_len {
                    break;
                }
            }
        }

        (best_len >= MIN_MATCH).then_some((best_dist as u16, best_len as u8))
    }

    /// Greedy parse of `input`, handing each token to `emit`.
    fn parse(&mut self, input: &[u8], mut emit: impl FnMut(LzssToken)) {
        self.ring.clear();

        let mut pos = 0;
        while pos < input.len() {
            let token = match self.find_match(&input[pos..]) {
                Some((distance, length)) => LzssToken::Match { distance, length },
                None => LzssToken::Literal(input[pos]),
            };

            let consumed = token.decoded_len();
            self.ring.write_bytes(&input[pos..pos + consumed]);
            pos += consumed;

            emit(token);
        }
    }

    /// Encode data into the token sequence the compressed stream is built from.
    pub fn tokenize(&mut self, input: &[u8]) -> Vec<LzssToken> {
        let mut tokens = Vec::new();
        self.parse(input, |token| tokens.push(token));
        tokens
    }

    /// Encode data into a compressed stream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lzss::LzssEncoder;
    ///
    /// let mut encoder = LzssEncoder::new();
    /// let compressed = encoder.encode(b"abcabcabc");
    /// assert_eq!(compressed, [0, b'a', 0, b'b', 0, b'c', 1, 0, 3, 6]);
    /// ```
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len() * 2);
        let mut match_count = 0usize;

        self.parse(input, |token| {
            if matches!(token, LzssToken::Match { .. }) {
                match_count += 1;
            }
            token.write_to(&mut output);
        });

        log::debug!(
            "lzss: encoded {} bytes into {} bytes ({} matches)",
            input.len(),
            output.len(),
            match_count
        );

        output
    }
}
