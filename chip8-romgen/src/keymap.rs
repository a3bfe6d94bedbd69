//! # Keypad Remapping
//!
//! Firmware maps three physical buttons onto CHIP-8 keypad codes. A keymap is
//! written as three byte literals, e.g. `0x58, 0x79, 0x46`.

use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of remapped buttons
pub const KEYMAP_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("unexpected token `{0}`")]
    InvalidToken(String),

    #[error("expected 3 key codes, found {0}")]
    WrongLength(usize),
}

/// Tokens for keymap literals
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
enum Token {
    /// Hexadecimal byte
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u8::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u8),

    /// Decimal byte
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u8>().ok())]
    Number(u8),

    /// Separator
    #[token(",")]
    Comma,
}

/// Three keypad codes, one per firmware button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Keymap(pub [u8; KEYMAP_LEN]);

impl Keymap {
    /// Octo's WASD layout
    pub const DEFAULT: Self = Self([0x58, 0x79, 0x46]);

    #[inline]
    pub fn codes(&self) -> [u8; KEYMAP_LEN] {
        self.0
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Keymap {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Token::lexer(s);
        let mut codes = Vec::with_capacity(KEYMAP_LEN);

        while let Some(token) = lex.next() {
            match token {
                Ok(Token::Hex(code)) | Ok(Token::Number(code)) => codes.push(code),
                Ok(Token::Comma) => {}
                Err(()) => return Err(KeymapError::InvalidToken(lex.slice().to_string())),
            }
        }

        let keys: [u8; KEYMAP_LEN] = codes
            .as_slice()
            .try_into()
            .map_err(|_| KeymapError::WrongLength(codes.len()))?;
        Ok(Self(keys))
    }
}

impl fmt::Display for Keymap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "0x{:02X}, 0x{:02X}, 0x{:02X}", a, b, c)
    }
}
