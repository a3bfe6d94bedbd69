//! Register definitions for CHIP-8 (V0-VF)

use crate::error::Chip8Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 16;

/// General-purpose register (V0-VF)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    V0 = 0,
    V1 = 1,
    V2 = 2,
    V3 = 3,
    V4 = 4,
    V5 = 5,
    V6 = 6,
    V7 = 7,
    V8 = 8,
    V9 = 9,
    VA = 10,
    VB = 11,
    VC = 12,
    VD = 13,
    VE = 14,
    VF = 15, // carry / borrow / collision flag
}

impl Register {
    pub const FLAG: Self = Self::VF;

    const ALL: [Register; NUM_REGISTERS] = [
        Self::V0,
        Self::V1,
        Self::V2,
        Self::V3,
        Self::V4,
        Self::V5,
        Self::V6,
        Self::V7,
        Self::V8,
        Self::V9,
        Self::VA,
        Self::VB,
        Self::VC,
        Self::VD,
        Self::VE,
        Self::VF,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Register selected by the low four bits of `nibble`
    #[inline]
    pub fn from_nibble(nibble: u16) -> Self {
        Self::ALL[(nibble & 0xF) as usize]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_flag(self) -> bool {
        self == Self::FLAG
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::V0 => "V0",
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V3 => "V3",
            Self::V4 => "V4",
            Self::V5 => "V5",
            Self::V6 => "V6",
            Self::V7 => "V7",
            Self::V8 => "V8",
            Self::V9 => "V9",
            Self::VA => "VA",
            Self::VB => "VB",
            Self::VC => "VC",
            Self::VD => "VD",
            Self::VE => "VE",
            Self::VF => "VF",
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = Chip8Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index as usize).ok_or(Chip8Error::InvalidRegister(index))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Register::from_index(0), Some(Register::V0));
        assert_eq!(Register::from_index(15), Some(Register::VF));
        assert_eq!(Register::from_index(16), None);
    }

    #[test]
    fn test_index_matches_discriminant() {
        for i in 0..NUM_REGISTERS {
            assert_eq!(Register::from_index(i).unwrap().index(), i);
        }
    }

    #[test]
    fn test_from_nibble_masks_high_bits() {
        assert_eq!(Register::from_nibble(0xA), Register::VA);
        assert_eq!(Register::from_nibble(0x1F), Register::VF);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Register::try_from(3u8), Ok(Register::V3));
        assert_eq!(Register::try_from(16u8), Err(Chip8Error::InvalidRegister(16)));
    }

    #[test]
    fn test_display_uses_hex_digit() {
        assert_eq!(Register::VA.to_string(), "VA");
        assert_eq!(Register::V7.to_string(), "V7");
        assert!(Register::VF.is_flag());
    }
}
