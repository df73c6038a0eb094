//! Code memory.
//!
//! A fixed 1024-word instruction store addressed by the program counter.
//! Written only by the loader before execution begins; read-only afterwards.

use crate::common::constants::{CODE_BYTES, CODE_WORDS, MEMORY_FILL, WORD_BYTES};
use crate::common::data::word_from_be;

/// Fixed-size instruction memory.
pub struct CodeMemory {
    bytes: [u8; CODE_BYTES],
}

impl CodeMemory {
    /// Creates a code memory with every byte set to the fill pattern.
    pub fn new() -> Self {
        Self {
            bytes: [MEMORY_FILL; CODE_BYTES],
        }
    }

    /// Copies an image verbatim into the start of code memory.
    ///
    /// At most [`CODE_BYTES`] bytes are consumed; the remainder of the image
    /// is ignored and unloaded positions keep the fill pattern.
    pub fn load(&mut self, image: &[u8]) {
        let len = image.len().min(CODE_BYTES);
        self.bytes[..len].copy_from_slice(&image[..len]);
    }

    /// Reads the big-endian instruction word at a word index.
    ///
    /// # Returns
    ///
    /// The word, or `None` when the index is outside `0..CODE_WORDS`.
    pub fn read_word(&self, index: u16) -> Option<u16> {
        let index = usize::from(index);
        if index >= CODE_WORDS {
            return None;
        }
        let offset = index * WORD_BYTES;
        Some(word_from_be(self.bytes[offset], self.bytes[offset + 1]))
    }
}

impl Default for CodeMemory {
    fn default() -> Self {
        Self::new()
    }
}
