//! Data-Memory Dump.
//!
//! Renders memory in a hexdump-style layout: sixteen bytes per line, an
//! eight-digit byte offset, eight space-separated hex byte pairs, and a
//! `|TEXT|` gutter where printable bytes render as themselves and everything
//! else as `.`.

use std::io::{self, Write};

use crate::common::constants::{DUMP_LINE_BYTES, PRINTABLE_ASCII_MAX, PRINTABLE_ASCII_MIN};

/// Maps a byte to its text-gutter character.
fn gutter_char(byte: u8) -> char {
    if (PRINTABLE_ASCII_MIN..=PRINTABLE_ASCII_MAX).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Writes the hexdump of `bytes` to `out`.
///
/// # Arguments
///
/// * `out` - Sink for the rendered dump.
/// * `bytes` - Memory contents; the length must be a multiple of the word size.
pub fn dump_memory<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for (line, chunk) in bytes.chunks(DUMP_LINE_BYTES).enumerate() {
        write!(out, "{:08x}  ", line * DUMP_LINE_BYTES)?;

        let mut text = String::with_capacity(DUMP_LINE_BYTES);
        for pair in chunk.chunks_exact(2) {
            write!(out, "{:02x} {:02x} ", pair[0], pair[1])?;
            text.push(gutter_char(pair[0]));
            text.push(gutter_char(pair[1]));
        }

        writeln!(out, " |{}|", text)?;
    }
    Ok(())
}
