//! LZSS decoder (decompression).

use crate::token::{LzssToken, TokenReader};
use crate::{LOOKAHEAD_SIZE, MIN_MATCH, WINDOW_SIZE};
use lzss_core::RingBuffer;
use lzss_core::error::{LzssError, Result};

/// LZSS decoder using a ring buffer.
#[derive(Debug, Clone)]
pub struct LzssDecoder {
    /// Ring buffer for history.
    ring: RingBuffer,
    /// Output buffer.
    output: Vec<u8>,
}

impl Default for LzssDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LzssDecoder {
    /// Create a new decoder with a [`WINDOW_SIZE`] history.
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::new(WINDOW_SIZE),
            output: Vec::new(),
        }
    }

    /// Reset the decoder.
    pub fn reset(&mut self) {
        self.ring.clear();
        self.output.clear();
    }

    /// History window as left by the last call.
    pub fn history(&self) -> &RingBuffer {
        &self.ring
    }

    /// Decode a literal byte.
    pub fn decode_literal(&mut self, byte: u8) {
        self.ring.write_byte(byte);
        self.output.push(byte);
    }

    /// Decode a match (distance, length).
    pub fn decode_match(&mut self, distance: u16, length: u8) -> Result<()> {
        let length = usize::from(length);
        if !(MIN_MATCH..=LOOKAHEAD_SIZE).contains(&length) {
            return Err(LzssError::invalid_length(length, MIN_MATCH, LOOKAHEAD_SIZE));
        }

        self.ring
            .copy_from_history(usize::from(distance), length, &mut self.output)
    }

    /// Decode a single token.
    pub fn decode_token(&mut self, token: LzssToken) -> Result<()> {
        match token {
            LzssToken::Literal(byte) => {
                self.decode_literal(byte);
                Ok(())
            }
            LzssToken::Match { distance, length } => self.decode_match(distance, length),
        }
    }

    /// Get the decoded output.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Take the decoded output.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Get output length.
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Decode a complete compressed stream.
    ///
    /// The decoder is reset first. On error the partially decoded output is
    /// discarded and nothing is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lzss::LzssDecoder;
    ///
    /// let mut decoder = LzssDecoder::new();
    /// let data = decoder.decode(&[0, b'a', 0, b'b', 1, 0, 2, 4]).unwrap();
    /// assert_eq!(data, b"ababab");
    /// ```
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.reset();
        self.output.reserve(input.len());

        let mut reader = TokenReader::new(input);
        let result = reader.try_for_each(|token| self.decode_token(token?));

        if let Err(err) = result {
            log::trace!(
                "lzss: rejecting stream near offset {} after {} decoded bytes: {}",
                reader.position(),
                self.output.len(),
                err
            );
            self.reset();
            return Err(err);
        }

        log::debug!(
            "lzss: decoded {} bytes into {} bytes",
            input.len(),
            self.output.len()
        );

        Ok(self.take_output())
    }
}
