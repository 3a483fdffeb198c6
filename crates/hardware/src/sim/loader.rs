//! Program Loader.
//!
//! This module translates the textual program format into RAM contents. It performs:
//! 1. **Line parsing:** Strips everything from the first `#` (comment bytes are
//!    never decoded), trims whitespace, and reads the remainder as a base-2 literal.
//! 2. **Skipping:** Blank, comment-only, and non-binary lines are ignored silently.
//! 3. **Staging:** The whole source is parsed before memory is touched, so a read
//!    or validation failure never leaves RAM partially written.
//!
//! # Format
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::constants::{COMMENT_DELIMITER, MEMORY_SIZE, WORD_BITS};
use crate::common::error::LoadError;
use crate::soc::memory::Memory;

/// Classification of a single source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceLine {
    /// A binary literal that fits in one byte.
    Byte(u8),
    /// A blank, comment-only, or otherwise non-binary line.
    Skip,
    /// A binary literal wider than 8 bits.
    TooWide,
}

/// Returns the part of `line` before the comment delimiter, trimmed.
pub fn significant_text(line: &str) -> &str {
    line.split_once(COMMENT_DELIMITER)
        .map_or(line, |(code, _)| code)
        .trim()
}

/// Classifies one line of program source.
///
/// A line is a literal only if its significant text is non-empty and made of
/// `0` and `1` characters alone; signs, prefixes, and separators are not accepted.
pub fn classify_line(line: &str) -> SourceLine {
    let text = significant_text(line);
    if text.is_empty() || !text.bytes().all(|c| c == b'0' || c == b'1') {
        return SourceLine::Skip;
    }

    let digits = text.trim_start_matches('0');
    if digits.len() > WORD_BITS {
        return SourceLine::TooWide;
    }
    if digits.is_empty() {
        return SourceLine::Byte(0);
    }
    u8::from_str_radix(digits, 2).map_or(SourceLine::TooWide, SourceLine::Byte)
}

/// Returns the bytes of `raw` before the comment delimiter, as text.
///
/// Comment bytes are never decoded, so they may hold any encoding. Code that
/// is not valid UTF-8 cannot be a binary literal and yields `None`.
fn code_text(raw: &[u8]) -> Option<&str> {
    let code = raw
        .split(|&b| b == COMMENT_DELIMITER as u8)
        .next()
        .unwrap_or_default();
    std::str::from_utf8(code).ok()
}

/// Parses program source into a byte image without touching memory.
///
/// Lines are split on raw bytes and cut at the comment delimiter before any
/// text decoding. Once the image is full, further literals are counted but
/// not stored.
///
/// # Errors
///
/// * [`LoadError::SourceUnavailable`] if reading the source fails.
/// * [`LoadError::ValueOutOfRange`] for a literal wider than 8 bits.
/// * [`LoadError::ProgramTooLarge`] if the image exceeds [`MEMORY_SIZE`].
pub fn parse_program<R: BufRead>(source: R) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::with_capacity(MEMORY_SIZE);
    let mut len = 0;

    for (idx, raw) in source.split(b'\n').enumerate() {
        let raw = raw?;
        let Some(text) = code_text(&raw) else {
            continue;
        };
        match classify_line(text) {
            SourceLine::Byte(byte) => {
                if len < MEMORY_SIZE {
                    image.push(byte);
                }
                len += 1;
            }
            SourceLine::Skip => {}
            SourceLine::TooWide => {
                return Err(LoadError::ValueOutOfRange {
                    line: idx + 1,
                    text: significant_text(text).to_string(),
                });
            }
        }
    }

    if len > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len,
            capacity: MEMORY_SIZE,
        });
    }
    Ok(image)
}

/// Parses program source and writes it into `memory` starting at address 0.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// See [`parse_program`]. On error `memory` is unchanged.
pub fn load_program<R: BufRead>(memory: &mut Memory, source: R) -> Result<usize, LoadError> {
    let image = parse_program(source)?;
    if !memory.load(&image) {
        return Err(LoadError::ProgramTooLarge {
            len: image.len(),
            capacity: MEMORY_SIZE,
        });
    }
    debug!(bytes = image.len(), "program loaded");
    Ok(image.len())
}

/// Opens a program file and loads it into `memory` starting at address 0.
///
/// # Errors
///
/// Returns [`LoadError::SourceUnavailable`] if the file cannot be opened or
/// read; otherwise see [`parse_program`]. On error `memory` is unchanged.
pub fn load_file(memory: &mut Memory, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), "loading program");
    load_program(memory, BufReader::new(file))
}
