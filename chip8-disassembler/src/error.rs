//! Disassembler errors

use chip8_spec::Chip8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode: 0x{0:04X}")]
    UnknownOpcode(u16),

    #[error(transparent)]
    Spec(#[from] Chip8Error),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
