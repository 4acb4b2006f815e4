//! Helpers for moving 16-bit word slices in and out of byte streams.
//!
//! Words are serialised big-endian: high byte first, low byte second. When a
//! stream holds an odd number of bytes, the final byte becomes the high half
//! of the last word.

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use byteorder::{ByteOrder, WriteBytesExt};

pub type Endian = byteorder::BigEndian;

/// Joins two bytes into a word, high byte first.
pub fn bytes_to_word(a: u8, b: u8) -> u16 {
    (u16::from(a) << 8) | u16::from(b)
}

/// Splits a word into its high and low bytes.
pub fn word_to_bytes(word: u16) -> (u8, u8) {
    ((word >> 8) as u8, (word & 0xFF) as u8)
}

/// Copies bytes from `src` into the words of `dest` and returns the number
/// of bytes consumed. A trailing odd byte fills the high half of one word.
pub fn copy_from_bytes(dest: &mut [u16], src: &[u8]) -> usize {
    let mut offs = 0;
    let mut chunks = src.chunks_exact(2);

    for chunk in &mut chunks {
        if offs >= dest.len() {
            return offs * 2;
        }
        dest[offs] = Endian::read_u16(chunk);
        offs += 1;
    }

    if let [high] = chunks.remainder() {
        if offs < dest.len() {
            dest[offs] = bytes_to_word(*high, 0);
            offs += 1;
        }
    }

    offs * 2
}

/// Copies words from `src` into the bytes of `dest` and returns the number
/// of bytes written.
pub fn copy_to_bytes(dest: &mut [u8], src: &[u16]) -> usize {
    let mut offs = 0;
    for &word in src {
        if offs + 2 > dest.len() {
            return offs;
        }
        Endian::write_u16(&mut dest[offs..offs + 2], word);
        offs += 2;
    }
    offs
}

/// Reads `reader` to its end and returns the words it held.
pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Vec<u16>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut words = vec![0u16; (bytes.len() + 1) / 2];
    copy_from_bytes(&mut words, &bytes);
    Ok(words)
}

/// Writes `words` to `writer`, two bytes per word.
pub fn write<W: Write>(writer: &mut W, words: &[u16]) -> std::io::Result<()> {
    for &word in words {
        writer.write_u16::<Endian>(word)?;
    }
    Ok(())
}

pub trait ReadWordsExt: Read + Sized {
    fn read_words(&mut self) -> std::io::Result<Vec<u16>> {
        read(self)
    }
}

impl<R: Read + Sized> ReadWordsExt for R {}

pub trait WriteWordsExt: Write + Sized {
    fn write_words(&mut self, words: &[u16]) -> std::io::Result<()> {
        write(self, words)
    }
}

impl<W: Write + Sized> WriteWordsExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u16>> {
    BufReader::new(File::open(path)?).read_words()
}

pub fn write_file<P: AsRef<Path>>(path: P, words: &[u16]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_words(words)?;
    writer.flush()
}

/// Displays the word slice in rows of eight, eliding all-zero rows.
pub fn hexdump<W: Write>(src: &[u16], dest: &mut W) -> std::io::Result<()> {
    for (row, words) in src.chunks(8).enumerate() {
        if words.iter().all(|&word| word == 0) {
            continue;
        }

        write!(dest, "{:#06x}:   ", row * 8)?;
        for word in words {
            write!(dest, " {:#06x}", word)?;
        }
        writeln!(dest)?;
    }
    Ok(())
}
