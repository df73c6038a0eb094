//! Image Loaders.
//!
//! This module populates the machine memories from host files before
//! execution begins. It performs:
//! 1. **Code loading:** A raw binary image copied verbatim into code memory,
//!    two bytes per big-endian instruction word, at most 2048 bytes.
//! 2. **Data loading:** A text image of hexadecimal digit groups, four
//!    digits per word, consumed left to right across concatenated lines.
//!
//! Loader failures are startup errors: the caller exits without running the
//! core. Malformed or incomplete hex groups are skipped, and words past the
//! end of data memory are silently dropped.

use std::fs;
use std::io;
use std::path::Path;

use crate::common::data::word_from_be;
use crate::mem::{CodeMemory, DataMemory};

/// Loads a raw binary code image into code memory.
///
/// # Arguments
///
/// * `path` - Path to the code image file.
/// * `code` - Code memory to populate.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read.
pub fn load_code_image(path: &Path, code: &mut CodeMemory) -> io::Result<()> {
    let image = fs::read(path)?;
    code.load(&image);
    Ok(())
}

/// Loads a hexadecimal text data image into data memory.
///
/// Each group of four hex digits encodes one big-endian data word; groups
/// are placed at increasing word indices. Trailing blank lines, incomplete
/// trailing groups, and unparseable groups are tolerated.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read.
pub fn load_data_image(path: &Path, data: &mut DataMemory) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let mut index: u16 = 0;

    for line in text.lines() {
        for group in line.trim_end().as_bytes().chunks_exact(4) {
            let (Some(high), Some(low)) = (parse_hex_byte(&group[..2]), parse_hex_byte(&group[2..]))
            else {
                continue;
            };
            if data.write_word(index, word_from_be(high, low)).is_none() {
                return Ok(());
            }
            index += 1;
        }
    }

    Ok(())
}

/// Parses two ASCII hex digits into a byte.
fn parse_hex_byte(digits: &[u8]) -> Option<u8> {
    let text = std::str::from_utf8(digits).ok()?;
    u8::from_str_radix(text, 16).ok()
}
