//! # LZSS Core
//!
//! Building blocks shared by the LZSS encoder and decoder.
//!
//! - [`ringbuffer`]: Sliding window history for back-references
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use lzss_core::RingBuffer;
//!
//! let mut ring = RingBuffer::new(16);
//! ring.write_bytes(b"abc");
//!
//! let mut output = Vec::new();
//! ring.copy_from_history(3, 6, &mut output).unwrap();
//! assert_eq!(output, b"abcabc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ringbuffer;

pub use error::{ErrorKind, LzssError, Result};
pub use ringbuffer::RingBuffer;
