//! # Error Types for the CHIP-8 instruction set

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Chip8Error {
    #[error("Invalid register index: {0} (valid range: 0-15)")]
    InvalidRegister(u8),

    #[error("Truncated instruction word at offset {0}")]
    TruncatedWord(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Chip8Error::InvalidRegister(16);
        assert_eq!(
            err.to_string(),
            "Invalid register index: 16 (valid range: 0-15)"
        );

        let err = Chip8Error::TruncatedWord(7);
        assert_eq!(err.to_string(), "Truncated instruction word at offset 7");
    }
}
