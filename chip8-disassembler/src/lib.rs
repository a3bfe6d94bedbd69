//! # CHIP-8 Disassembler
//!
//! Decode CHIP-8 / SUPER-CHIP instruction words into structured
//! [`Instruction`](chip8_spec::Instruction) values and render them as
//! assembly text.
//!
//! Unrecognized words are not errors: [`decode`] returns `None` and
//! [`disassemble_word`] returns an empty string, which is what annotation
//! output wants for data bytes mixed into code.
//!
//! ## Example
//!
//! ```rust
//! use chip8_disassembler::{decode, disassemble_word, format};
//!
//! let instr = decode(0x6A12).unwrap();
//! assert_eq!(format(&instr), "LD VA, 0x12");
//!
//! assert_eq!(disassemble_word(0x1234), "JP 0x234");
//! assert_eq!(disassemble_word(0xFFFF), "");
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::{decode, decode_at, try_decode};
pub use formatter::format;

/// Decode and render one word; empty string when the word is unrecognized
pub fn disassemble_word(word: u16) -> String {
    decode(word).map(|instr| format(&instr)).unwrap_or_default()
}
