//! CHIP-8 / SUPER-CHIP Instruction Set
//!
//! Structured form of a decoded instruction word. Operands are typed so an
//! interpreter can consume a decode directly; the disassembler renders the
//! same value to text.

use crate::register::Register;
use crate::Address;
use serde::{Deserialize, Serialize};

/// Register-register ALU operation (`8xyN`, selected by `N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    /// 0: Vx = Vy
    Ld,
    /// 1: Vx |= Vy
    Or,
    /// 2: Vx &= Vy
    And,
    /// 3: Vx ^= Vy
    Xor,
    /// 4: Vx += Vy, VF = carry
    Add,
    /// 5: Vx -= Vy, VF = NOT borrow
    Sub,
    /// 6: Vx >>= 1, VF = shifted-out bit
    Shr,
    /// 7: Vx = Vy - Vx, VF = NOT borrow
    Subn,
    /// E: Vx <<= 1, VF = shifted-out bit
    Shl,
}

impl AluOp {
    /// Operation selected by the low nibble of an `8xyN` word
    pub fn from_nibble(n: u8) -> Option<Self> {
        match n {
            0x0 => Some(Self::Ld),
            0x1 => Some(Self::Or),
            0x2 => Some(Self::And),
            0x3 => Some(Self::Xor),
            0x4 => Some(Self::Add),
            0x5 => Some(Self::Sub),
            0x6 => Some(Self::Shr),
            0x7 => Some(Self::Subn),
            0xE => Some(Self::Shl),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Ld => "LD",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Shr => "SHR",
            Self::Subn => "SUBN",
            Self::Shl => "SHL",
        }
    }
}

/// A single operand of a decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    /// General-purpose register Vx
    Register(Register),
    /// 12-bit address
    Address(Address),
    /// 8-bit immediate
    Byte(u8),
    /// 4-bit immediate (sprite height, scroll distance)
    Nibble(u8),
    /// Index register I
    Index,
    /// Memory at I
    IndexIndirect,
    /// Delay timer
    DelayTimer,
    /// Sound timer
    SoundTimer,
    /// Key press (blocking wait)
    Key,
    /// Small font sprite address
    Font,
    /// SUPER-CHIP large font sprite address
    HiFont,
    /// BCD store target at I
    Bcd,
    /// SUPER-CHIP RPL user flags
    Flags,
}

/// CHIP-8 instruction with SUPER-CHIP extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== System (0x0) ==========
    /// 00E0 CLS: clear the display
    Cls,

    /// 00EE RET: return from subroutine
    Ret,

    /// 00Cn SCD: scroll display down n lines (SUPER-CHIP)
    ScrollDown { n: u8 },

    /// 00FB SCR: scroll display right 4 pixels (SUPER-CHIP)
    ScrollRight,

    /// 00FC SCL: scroll display left 4 pixels (SUPER-CHIP)
    ScrollLeft,

    /// 00FD HALT: exit the interpreter (SUPER-CHIP)
    Halt,

    /// 00FE LO: low resolution mode (SUPER-CHIP)
    LowRes,

    /// 00FF HI: high resolution mode (SUPER-CHIP)
    HighRes,

    // ========== Control Flow ==========
    /// 1nnn JP: PC = nnn
    Jump { addr: Address },

    /// 2nnn CALL: push PC, PC = nnn
    Call { addr: Address },

    /// Bnnn JP V0: PC = nnn + V0
    JumpOffset { addr: Address },

    // ========== Skips ==========
    /// 3xkk SE: skip if Vx == kk
    SkipEqImm { x: Register, kk: u8 },

    /// 4xkk SNE: skip if Vx != kk
    SkipNeImm { x: Register, kk: u8 },

    /// 5xy0 SE: skip if Vx == Vy
    SkipEqReg { x: Register, y: Register },

    /// 9xy0 SNE: skip if Vx != Vy
    SkipNeReg { x: Register, y: Register },

    /// Ex9E SKP: skip if key Vx is pressed
    SkipKeyPressed { x: Register },

    /// ExA1 SKNP: skip if key Vx is not pressed
    SkipKeyNotPressed { x: Register },

    // ========== Registers ==========
    /// 6xkk LD: Vx = kk
    LoadImm { x: Register, kk: u8 },

    /// 7xkk ADD: Vx += kk (no carry)
    AddImm { x: Register, kk: u8 },

    /// 8xyN: register-register ALU
    Alu { op: AluOp, x: Register, y: Register },

    /// Cxkk RND: Vx = random & kk
    Random { x: Register, kk: u8 },

    // ========== Index and Display ==========
    /// Annn LD I: I = nnn
    LoadIndex { addr: Address },

    /// Dxyn DRW: draw n-byte sprite at (Vx, Vy)
    Draw { x: Register, y: Register, n: u8 },

    // ========== Timers, Keys, Memory (0xF) ==========
    /// Fx07: Vx = DT
    LoadDelay { x: Register },

    /// Fx0A: Vx = next key press
    WaitKey { x: Register },

    /// Fx15: DT = Vx
    SetDelay { x: Register },

    /// Fx18: ST = Vx
    SetSound { x: Register },

    /// Fx1E: I += Vx
    AddIndex { x: Register },

    /// Fx29: I = font sprite for digit Vx
    LoadFont { x: Register },

    /// Fx30: I = large font sprite for digit Vx (SUPER-CHIP)
    LoadHiFont { x: Register },

    /// Fx33: store BCD of Vx at I, I+1, I+2
    StoreBcd { x: Register },

    /// Fx55: store V0..=Vx at I
    StoreRegisters { x: Register },

    /// Fx65: load V0..=Vx from I
    LoadRegisters { x: Register },

    /// Fx75: save V0..=Vx to RPL flags (SUPER-CHIP)
    SaveFlags { x: Register },

    /// Fx85: restore V0..=Vx from RPL flags (SUPER-CHIP)
    RestoreFlags { x: Register },
}

impl Instruction {
    /// Get instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Cls => "CLS",
            Instruction::Ret => "RET",
            Instruction::ScrollDown { .. } => "SCD",
            Instruction::ScrollRight => "SCR",
            Instruction::ScrollLeft => "SCL",
            Instruction::Halt => "HALT",
            Instruction::LowRes => "LO",
            Instruction::HighRes => "HI",
            Instruction::Jump { .. } | Instruction::JumpOffset { .. } => "JP",
            Instruction::Call { .. } => "CALL",
            Instruction::SkipEqImm { .. } | Instruction::SkipEqReg { .. } => "SE",
            Instruction::SkipNeImm { .. } | Instruction::SkipNeReg { .. } => "SNE",
            Instruction::SkipKeyPressed { .. } => "SKP",
            Instruction::SkipKeyNotPressed { .. } => "SKNP",
            Instruction::AddImm { .. } | Instruction::AddIndex { .. } => "ADD",
            Instruction::Alu { op, .. } => op.mnemonic(),
            Instruction::Random { .. } => "RND",
            Instruction::Draw { .. } => "DRW",
            Instruction::LoadImm { .. }
            | Instruction::LoadIndex { .. }
            | Instruction::LoadDelay { .. }
            | Instruction::WaitKey { .. }
            | Instruction::SetDelay { .. }
            | Instruction::SetSound { .. }
            | Instruction::LoadFont { .. }
            | Instruction::LoadHiFont { .. }
            | Instruction::StoreBcd { .. }
            | Instruction::StoreRegisters { .. }
            | Instruction::LoadRegisters { .. }
            | Instruction::SaveFlags { .. }
            | Instruction::RestoreFlags { .. } => "LD",
        }
    }

    /// Operands in assembly order (destination first)
    pub fn operands(&self) -> Vec<Operand> {
        match *self {
            Instruction::Cls
            | Instruction::Ret
            | Instruction::ScrollRight
            | Instruction::ScrollLeft
            | Instruction::Halt
            | Instruction::LowRes
            | Instruction::HighRes => vec![],
            Instruction::ScrollDown { n } => vec![Operand::Nibble(n)],
            Instruction::Jump { addr } | Instruction::Call { addr } => vec![Operand::Address(addr)],
            Instruction::JumpOffset { addr } => vec![Operand::Register(Register::V0), Operand::Address(addr)],
            Instruction::SkipEqImm { x, kk }
            | Instruction::SkipNeImm { x, kk }
            | Instruction::LoadImm { x, kk }
            | Instruction::AddImm { x, kk }
            | Instruction::Random { x, kk } => vec![Operand::Register(x), Operand::Byte(kk)],
            Instruction::SkipEqReg { x, y }
            | Instruction::SkipNeReg { x, y }
            | Instruction::Alu { x, y, .. } => vec![Operand::Register(x), Operand::Register(y)],
            Instruction::SkipKeyPressed { x } | Instruction::SkipKeyNotPressed { x } => {
                vec![Operand::Register(x)]
            }
            Instruction::LoadIndex { addr } => vec![Operand::Index, Operand::Address(addr)],
            Instruction::Draw { x, y, n } => vec![Operand::Register(x), Operand::Register(y), Operand::Nibble(n)],
            Instruction::LoadDelay { x } => vec![Operand::Register(x), Operand::DelayTimer],
            Instruction::WaitKey { x } => vec![Operand::Register(x), Operand::Key],
            Instruction::SetDelay { x } => vec![Operand::DelayTimer, Operand::Register(x)],
            Instruction::SetSound { x } => vec![Operand::SoundTimer, Operand::Register(x)],
            Instruction::AddIndex { x } => vec![Operand::Index, Operand::Register(x)],
            Instruction::LoadFont { x } => vec![Operand::Font, Operand::Register(x)],
            Instruction::LoadHiFont { x } => vec![Operand::HiFont, Operand::Register(x)],
            Instruction::StoreBcd { x } => vec![Operand::Bcd, Operand::Register(x)],
            Instruction::StoreRegisters { x } => vec![Operand::IndexIndirect, Operand::Register(x)],
            Instruction::LoadRegisters { x } => vec![Operand::Register(x), Operand::IndexIndirect],
            Instruction::SaveFlags { x } => vec![Operand::Flags, Operand::Register(x)],
            Instruction::RestoreFlags { x } => vec![Operand::Register(x), Operand::Flags],
        }
    }

    /// Check if this instruction only exists on SUPER-CHIP interpreters
    pub fn is_super_chip(&self) -> bool {
        matches!(
            self,
            Instruction::ScrollDown { .. }
                | Instruction::ScrollRight
                | Instruction::ScrollLeft
                | Instruction::Halt
                | Instruction::LowRes
                | Instruction::HighRes
                | Instruction::LoadHiFont { .. }
                | Instruction::SaveFlags { .. }
                | Instruction::RestoreFlags { .. }
        )
    }

    /// Check if this instruction may transfer control
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Instruction::Ret
                | Instruction::Halt
                | Instruction::Jump { .. }
                | Instruction::Call { .. }
                | Instruction::JumpOffset { .. }
                | Instruction::SkipEqImm { .. }
                | Instruction::SkipNeImm { .. }
                | Instruction::SkipEqReg { .. }
                | Instruction::SkipNeReg { .. }
                | Instruction::SkipKeyPressed { .. }
                | Instruction::SkipKeyNotPressed { .. }
        )
    }

    /// First register operand, if any
    pub fn vx(&self) -> Option<Register> {
        self.operands().into_iter().find_map(|operand| match operand {
            Operand::Register(reg) => Some(reg),
            _ => None,
        })
    }
}
