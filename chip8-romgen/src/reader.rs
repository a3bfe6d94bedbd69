//! # ROM Word Reader
//!
//! Walks a ROM image as big-endian 16-bit words. The program counter starts at
//! the load address and advances by exactly two per word, whether or not the
//! word decodes to anything.
//!
//! An odd trailing byte is paired with [`FILLER_BYTE`] so the last word is
//! still complete; [`RomReader::has_trailing_byte`] lets callers report it.

use chip8_spec::WORD_SIZE;

/// Byte appended to a ROM with an odd length
pub const FILLER_BYTE: u8 = 0x00;

/// One instruction word and where it sits in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomWord {
    /// Program counter of the first byte
    pub address: u32,
    /// Raw bytes in ROM order
    pub bytes: [u8; 2],
    /// Word formed from the second byte and the byte after it, when that byte
    /// is still inside the ROM
    pub adjacent: Option<u16>,
    /// Second byte is filler, not ROM data
    pub padded: bool,
}

impl RomWord {
    #[inline]
    pub fn opcode(&self) -> u16 {
        u16::from_be_bytes(self.bytes)
    }
}

/// Sequential reader over a ROM image
#[derive(Debug, Clone)]
pub struct RomReader<'a> {
    code: &'a [u8],
    load_address: u16,
    offset: usize,
    pc: u32,
}

impl<'a> RomReader<'a> {
    pub fn new(code: &'a [u8], load_address: u16) -> Self {
        Self {
            code,
            load_address,
            offset: 0,
            pc: u32::from(load_address),
        }
    }

    /// Address of the next word to be read
    #[inline]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// ROM length is odd, so the final word carries a filler byte
    #[inline]
    pub fn has_trailing_byte(&self) -> bool {
        self.code.len() % WORD_SIZE != 0
    }

    /// Address one past the last word, counting the filler byte
    pub fn end_address(&self) -> u32 {
        let words = self.code.len().div_ceil(WORD_SIZE);
        u32::from(self.load_address) + (words * WORD_SIZE) as u32
    }
}

impl Iterator for RomReader<'_> {
    type Item = RomWord;

    fn next(&mut self) -> Option<RomWord> {
        let hi = *self.code.get(self.offset)?;
        let lo = self.code.get(self.offset + 1).copied();
        let adjacent = match (lo, self.code.get(self.offset + 2)) {
            (Some(lo), Some(&after)) => Some(u16::from_be_bytes([lo, after])),
            _ => None,
        };

        let word = RomWord {
            address: self.pc,
            bytes: [hi, lo.unwrap_or(FILLER_BYTE)],
            adjacent,
            padded: lo.is_none(),
        };

        self.offset += WORD_SIZE;
        self.pc += WORD_SIZE as u32;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code.len().saturating_sub(self.offset).div_ceil(WORD_SIZE);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RomReader<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian_words() {
        let code = [0x12, 0x34, 0x65, 0x01];
        let words: Vec<_> = RomReader::new(&code, 0x200).collect();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].opcode(), 0x1234);
        assert_eq!(words[0].address, 0x200);
        assert_eq!(words[1].opcode(), 0x6501);
        assert_eq!(words[1].address, 0x202);
    }

    #[test]
    fn test_adjacent_word_stays_inside_rom() {
        let code = [0x12, 0x34, 0x65, 0x01];
        let words: Vec<_> = RomReader::new(&code, 0x200).collect();

        assert_eq!(words[0].adjacent, Some(0x3465));
        assert_eq!(words[1].adjacent, None);
    }

    #[test]
    fn test_odd_length_pads_last_word() {
        let code = [0x00, 0xE0, 0xAB];
        let reader = RomReader::new(&code, 0x200);
        assert!(reader.has_trailing_byte());
        assert_eq!(reader.end_address(), 0x204);

        let words: Vec<_> = reader.collect();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].adjacent, Some(0xE0AB));
        assert!(!words[0].padded);
        assert_eq!(words[1].bytes, [0xAB, FILLER_BYTE]);
        assert_eq!(words[1].adjacent, None);
        assert!(words[1].padded);
    }

    #[test]
    fn test_empty_rom() {
        let reader = RomReader::new(&[], 0x200);
        assert_eq!(reader.end_address(), 0x200);
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_pc_advances_by_two() {
        let code = [0xFFu8; 20];
        let mut reader = RomReader::new(&code, 0x200);
        assert_eq!(reader.len(), 10);

        for n in 0..10u32 {
            let word = reader.next().unwrap();
            assert_eq!(word.address, 0x200 + 2 * n);
        }
        assert_eq!(reader.pc(), 0x200 + 20);
        assert!(reader.next().is_none());
    }
}
