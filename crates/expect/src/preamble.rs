// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SPIR-V module preamble validation.
//!
//! A binary module starts with five 32-bit words:
//!
//! | word | meaning                   | expected       |
//! |------|---------------------------|----------------|
//! | 0    | SPIR-V magic number       | `0x07230203`   |
//! | 1    | version                   | `99`           |
//! | 2    | generator magic (glslang) | `0x051a00bb`   |
//! | 3    | id bound                  | not checked    |
//! | 4    | instruction schema        | `0`            |
//!
//! The words may be stored in either byte order; the order is detected from
//! the magic number. Assembly output instead starts with two comment lines
//! naming the version and generator.

use crate::file::{unreadable_file, verify_file_non_empty};
use crate::outcome::CheckResult;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

pub const SPIRV_MAGIC: u32 = 0x0723_0203;
pub const SPIRV_VERSION: u32 = 99;
pub const GLSLANG_GENERATOR_MAGIC: u32 = 0x051a_00bb;

pub const WORD_BYTES: usize = 4;
pub const PREAMBLE_WORDS: usize = 5;
pub const PREAMBLE_BYTES: usize = WORD_BYTES * PREAMBLE_WORDS;

pub const ASSEMBLY_VERSION_LINE: &str = "// Module Version 99\n";
pub const ASSEMBLY_GENERATOR_LINE: &str = "// Generated by (magic number): 51a00bb\n";

/// Byte order of a binary module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Why a binary module was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PreambleError {
    #[error("Incorrect SPV binary: size should be a multiple of words")]
    NotWordAligned { len: usize },

    #[error("Incorrect SPV binary: size less than 5 words")]
    TooShort { len: usize },

    #[error("Incorrect SPV binary: wrong magic number")]
    WrongMagic,

    #[error("Incorrect SPV binary: wrong version number")]
    WrongVersion { found: u32 },

    #[error("Incorrect SPV binary: wrong generator magic number")]
    WrongGenerator { found: u32 },

    #[error("Incorrect SPV binary: the 5th byte should be 0")]
    NonZeroSchema { found: u32 },
}

/// Read the `index`-th word of `bytes` in the given byte order.
///
/// Returns `None` when `bytes` does not hold a full word at `index`.
pub fn read_word(bytes: &[u8], index: usize, order: ByteOrder) -> Option<u32> {
    let start = index.checked_mul(WORD_BYTES)?;
    let word = bytes.get(start..start.checked_add(WORD_BYTES)?)?;
    Some(decode_word(word, order))
}

fn decode_word(word: &[u8], order: ByteOrder) -> u32 {
    let fold = |acc: u32, byte: &u8| (acc << 8) | u32::from(*byte);
    match order {
        ByteOrder::Little => word.iter().rev().fold(0, fold),
        ByteOrder::Big => word.iter().fold(0, fold),
    }
}

/// Detect the byte order from the magic number in word 0.
///
/// Little-endian is tried first. Returns `None` if neither order yields the
/// SPIR-V magic number.
pub fn detect_byte_order(bytes: &[u8]) -> Option<ByteOrder> {
    [ByteOrder::Little, ByteOrder::Big]
        .into_iter()
        .find(|&order| read_word(bytes, 0, order) == Some(SPIRV_MAGIC))
}

/// Decoded and validated preamble of a binary module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulePreamble {
    pub byte_order: ByteOrder,
    pub magic: u32,
    pub version: u32,
    pub generator: u32,
    pub bound: u32,
    pub schema: u32,
}

impl ModulePreamble {
    /// Validate the preamble of a complete module image.
    ///
    /// `module` must be the whole file: its length is checked for word
    /// alignment before anything else.
    pub fn parse(module: &[u8]) -> Result<Self, PreambleError> {
        let len = module.len();
        if len % WORD_BYTES != 0 {
            return Err(PreambleError::NotWordAligned { len });
        }
        if len < PREAMBLE_BYTES {
            return Err(PreambleError::TooShort { len });
        }

        let preamble = &module[..PREAMBLE_BYTES];
        let byte_order = detect_byte_order(preamble).ok_or(PreambleError::WrongMagic)?;
        let mut words = [0u32; PREAMBLE_WORDS];
        for (word, bytes) in words.iter_mut().zip(preamble.chunks_exact(WORD_BYTES)) {
            *word = decode_word(bytes, byte_order);
        }
        let [magic, version, generator, bound, schema] = words;

        if version != SPIRV_VERSION {
            return Err(PreambleError::WrongVersion { found: version });
        }
        if generator != GLSLANG_GENERATOR_MAGIC {
            return Err(PreambleError::WrongGenerator { found: generator });
        }
        // Word 3 is the id bound, which varies per module.
        if schema != 0 {
            return Err(PreambleError::NonZeroSchema { found: schema });
        }

        Ok(Self {
            byte_order,
            magic,
            version,
            generator,
            bound,
            schema,
        })
    }
}

/// Check that `path` is a SPIR-V binary with a correct preamble.
pub fn verify_object_file_preamble(path: &Path) -> CheckResult {
    let present = verify_file_non_empty(path);
    if !present.passed {
        return present;
    }

    let mut module = Vec::new();
    if let Err(e) = File::open(path).and_then(|mut f| f.read_to_end(&mut module)) {
        return unreadable_file(path, &e);
    }

    match ModulePreamble::parse(&module) {
        Ok(_) => CheckResult::pass(),
        Err(e) => CheckResult::fail(e.to_string()),
    }
}

/// Check that `path` is a SPIR-V assembly file with the expected header lines.
pub fn verify_assembly_file_preamble(path: &Path) -> CheckResult {
    let present = verify_file_non_empty(path);
    if !present.passed {
        return present;
    }

    let (first, second) = match read_two_lines(path) {
        Ok(lines) => lines,
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            return CheckResult::fail("Incorrect SPV assembly");
        }
        Err(e) => return unreadable_file(path, &e),
    };

    if first != ASSEMBLY_VERSION_LINE || second != ASSEMBLY_GENERATOR_LINE {
        return CheckResult::fail("Incorrect SPV assembly");
    }
    CheckResult::pass()
}

fn read_two_lines(path: &Path) -> std::io::Result<(String, String)> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut first = String::new();
    let mut second = String::new();
    reader.read_line(&mut first)?;
    reader.read_line(&mut second)?;
    Ok((first, second))
}

#[cfg(test)]
#[path = "preamble_tests.rs"]
mod tests;
