//! Ring buffer (sliding window) for LZSS history.
//!
//! Both the encoder and the decoder keep one of these. The encoder writes
//! every byte it consumes from the input, the decoder every byte it
//! reconstructs, so the two windows stay identical token by token.

use crate::error::{LzssError, Result};

/// A ring buffer (circular buffer) holding the most recent history bytes.
///
/// The buffer stores the most recent `capacity` bytes, wrapping around when
/// full. Positions that have never been written are tracked by `size` and
/// are never handed out as back-reference sources.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
    /// Number of bytes written (up to capacity).
    size: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl RingBuffer {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );

        Self {
            buffer: vec![0; capacity],
            position: 0,
            size: 0,
            mask: capacity - 1,
        }
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get the number of bytes currently in the buffer.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.position = 0;
        self.size = 0;
        self.buffer.fill(0);
    }

    /// Write a single byte to the buffer.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = (self.position + 1) & self.mask;
        if self.size < self.buffer.len() {
            self.size += 1;
        }
    }

    /// Write multiple bytes to the buffer.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Byte at `distance` behind the write position, without validation.
    ///
    /// Callers must keep `distance` in `1..=len()`; the match finder checks
    /// this once per candidate instead of once per compared byte.
    #[inline]
    pub fn peek(&self, distance: usize) -> u8 {
        debug_assert!((1..=self.size).contains(&distance));
        self.buffer[self.position.wrapping_sub(distance) & self.mask]
    }

    /// Read a byte at the given distance from the current position.
    ///
    /// Distance 1 means the most recently written byte.
    pub fn read_at_distance(&self, distance: usize) -> Result<u8> {
        if distance == 0 || distance > self.size {
            return Err(LzssError::invalid_distance(distance, self.size));
        }

        Ok(self.peek(distance))
    }

    /// Copy `length` bytes from `distance` back, appending them to `output`
    /// and writing them back into the buffer.
    ///
    /// Each byte is written before the next is read, so `length > distance`
    /// repeats the referenced run (e.g. distance 1 repeats the last byte).
    pub fn copy_from_history(
        &mut self,
        distance: usize,
        length: usize,
        output: &mut Vec<u8>,
    ) -> Result<()> {
        if distance == 0 || distance > self.size {
            return Err(LzssError::invalid_distance(distance, self.size));
        }

        output.reserve(length);

        let mut src_pos = self.position.wrapping_sub(distance) & self.mask;
        for _ in 0..length {
            let byte = self.buffer[src_pos];
            output.push(byte);
            self.write_byte(byte);
            src_pos = (src_pos + 1) & self.mask;
        }

        Ok(())
    }

    /// Get the last N bytes written, oldest first.
    pub fn last_bytes(&self, count: usize) -> Vec<u8> {
        let count = count.min(self.size);
        (0..count).map(|i| self.peek(count - i)).collect()
    }
}
