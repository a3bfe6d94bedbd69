//! # CHIP-8 Opcode Fields
//!
//! Every instruction is one big-endian 16-bit word. The top nibble selects an
//! opcode family; the remaining bits are read through the fixed field layout
//! below.
//!
//! ## Field Layout
//!
//! ```text
//! [family:4][x:4][y:4][n:4]
//! [family:4][x:4][kk:8]
//! [family:4][nnn:12]
//! ```

use crate::error::Chip8Error;
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opcode family selected by bits `[15:12]`
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpcodeFamily {
    /// 0x0: CLS, RET and SUPER-CHIP screen control
    System = 0x0,
    /// 0x1: JP addr
    Jump = 0x1,
    /// 0x2: CALL addr
    Call = 0x2,
    /// 0x3: SE Vx, byte
    SkipEqImm = 0x3,
    /// 0x4: SNE Vx, byte
    SkipNeImm = 0x4,
    /// 0x5: SE Vx, Vy
    SkipEqReg = 0x5,
    /// 0x6: LD Vx, byte
    LoadImm = 0x6,
    /// 0x7: ADD Vx, byte
    AddImm = 0x7,
    /// 0x8: register-register ALU, low nibble selects the operation
    Alu = 0x8,
    /// 0x9: SNE Vx, Vy
    SkipNeReg = 0x9,
    /// 0xA: LD I, addr
    LoadIndex = 0xA,
    /// 0xB: JP V0, addr
    JumpOffset = 0xB,
    /// 0xC: RND Vx, byte
    Random = 0xC,
    /// 0xD: DRW Vx, Vy, nibble
    Draw = 0xD,
    /// 0xE: key skips, low byte selects the test
    Key = 0xE,
    /// 0xF: timers, index and memory transfers, low byte selects the operation
    Misc = 0xF,
}

impl OpcodeFamily {
    /// Family for a 4-bit value; only the low nibble is considered
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble & 0xF {
            0x0 => Self::System,
            0x1 => Self::Jump,
            0x2 => Self::Call,
            0x3 => Self::SkipEqImm,
            0x4 => Self::SkipNeImm,
            0x5 => Self::SkipEqReg,
            0x6 => Self::LoadImm,
            0x7 => Self::AddImm,
            0x8 => Self::Alu,
            0x9 => Self::SkipNeReg,
            0xA => Self::LoadIndex,
            0xB => Self::JumpOffset,
            0xC => Self::Random,
            0xD => Self::Draw,
            0xE => Self::Key,
            _ => Self::Misc,
        }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Families whose operands are two registers taken from `x` and `y`
    pub fn uses_register_pair(self) -> bool {
        matches!(
            self,
            Self::SkipEqReg | Self::Alu | Self::SkipNeReg | Self::Draw
        )
    }
}

/// Raw instruction word with field accessors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Build an opcode from two big-endian bytes
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Read the word starting at `offset`
    pub fn read_at(code: &[u8], offset: usize) -> Result<Self, Chip8Error> {
        match code.get(offset..offset + 2) {
            Some(&[hi, lo]) => Ok(Self::from_be_bytes([hi, lo])),
            _ => Err(Chip8Error::TruncatedWord(offset)),
        }
    }

    #[inline]
    pub fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn family(self) -> OpcodeFamily {
        OpcodeFamily::from_nibble((self.0 >> 12) as u8)
    }

    /// Bits `[11:8]`
    #[inline]
    pub fn x(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// Bits `[7:4]`
    #[inline]
    pub fn y(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// Bits `[3:0]`
    #[inline]
    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Bits `[7:0]`
    #[inline]
    pub fn kk(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Bits `[11:0]`
    #[inline]
    pub fn nnn(self) -> u16 {
        self.0 & 0xFFF
    }

    #[inline]
    pub fn vx(self) -> Register {
        Register::from_nibble(u16::from(self.x()))
    }

    #[inline]
    pub fn vy(self) -> Register {
        Register::from_nibble(u16::from(self.y()))
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Self(word)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
