//! # CHIP-8 Instruction Set
//!
//! Shared vocabulary for the CHIP-8 toolchain: registers, opcode field
//! extraction, and the structured [`Instruction`] type produced by the
//! disassembler.
//!
//! ## Key Features
//! - 16-bit big-endian instruction words
//! - 16 general-purpose 8-bit registers (V0-VF)
//! - Programs load at `0x200`
//! - SUPER-CHIP extensions (scrolling, hi-res mode, RPL flags)

pub mod register;
pub mod opcode;
pub mod instruction;
pub mod error;

pub use register::{Register, NUM_REGISTERS};
pub use opcode::{Opcode, OpcodeFamily};
pub use instruction::{AluOp, Instruction, Operand};
pub use error::Chip8Error;

/// Address at which interpreters load program images
pub const PROGRAM_START: u16 = 0x200;

/// Size of one instruction word in bytes
pub const WORD_SIZE: usize = 2;

/// Addressable memory on the original interpreter (4 KB)
pub const MEMORY_SIZE: usize = 0x1000;

/// Instruction word
pub type Word = u16;

/// Address type (12-bit operands, 16-bit program counter)
pub type Address = u16;
