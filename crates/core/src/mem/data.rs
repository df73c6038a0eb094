//! Data memory.
//!
//! A fixed 1024-word store addressed by a 10-bit effective address taken
//! from a register at use time. Reads and writes are word-wide, big-endian,
//! and bounds-checked; a failed access is how the ILLEGAL_ADDRESS halt is
//! raised by the calling phase.

use crate::common::constants::{DATA_BYTES, DATA_WORDS, MEMORY_FILL, WORD_BYTES};
use crate::common::data::{word_from_be, word_to_be};

/// Fixed-size data memory.
pub struct DataMemory {
    bytes: [u8; DATA_BYTES],
}

impl DataMemory {
    /// Creates a data memory with every byte set to the fill pattern.
    pub fn new() -> Self {
        Self {
            bytes: [MEMORY_FILL; DATA_BYTES],
        }
    }

    /// Reads the big-endian data word at a word index.
    ///
    /// # Returns
    ///
    /// The word, or `None` when the index is outside `0..DATA_WORDS`.
    pub fn read_word(&self, index: u16) -> Option<u16> {
        let index = usize::from(index);
        if index >= DATA_WORDS {
            return None;
        }
        let offset = index * WORD_BYTES;
        Some(word_from_be(self.bytes[offset], self.bytes[offset + 1]))
    }

    /// Writes a word in big-endian byte order at a word index.
    ///
    /// # Returns
    ///
    /// `Some(())` on success, or `None` when the index is outside
    /// `0..DATA_WORDS` (the write is not performed).
    pub fn write_word(&mut self, index: u16, value: u16) -> Option<()> {
        let index = usize::from(index);
        if index >= DATA_WORDS {
            return None;
        }
        let offset = index * WORD_BYTES;
        self.bytes[offset..offset + WORD_BYTES].copy_from_slice(&word_to_be(value));
        Some(())
    }

    /// Returns the full byte contents, as consumed by the memory dump.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}
