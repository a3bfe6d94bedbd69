//! Instruction decoder

use chip8_spec::{AluOp, Instruction, Opcode, OpcodeFamily};
use crate::error::{DisassemblerError, Result};

/// Decode a 16-bit instruction word.
///
/// Returns `None` for words that no interpreter recognizes. That is a normal
/// outcome for data bytes embedded in a ROM, not a failure.
pub fn decode(word: u16) -> Option<Instruction> {
    let op = Opcode(word);

    match op.family() {
        OpcodeFamily::System => decode_system(op),
        OpcodeFamily::Jump => Some(Instruction::Jump { addr: op.nnn() }),
        OpcodeFamily::Call => Some(Instruction::Call { addr: op.nnn() }),
        OpcodeFamily::SkipEqImm => Some(Instruction::SkipEqImm { x: op.vx(), kk: op.kk() }),
        OpcodeFamily::SkipNeImm => Some(Instruction::SkipNeImm { x: op.vx(), kk: op.kk() }),
        OpcodeFamily::SkipEqReg => Some(Instruction::SkipEqReg { x: op.vx(), y: op.vy() }),
        OpcodeFamily::LoadImm => Some(Instruction::LoadImm { x: op.vx(), kk: op.kk() }),
        OpcodeFamily::AddImm => Some(Instruction::AddImm { x: op.vx(), kk: op.kk() }),
        OpcodeFamily::Alu => decode_alu(op),
        OpcodeFamily::SkipNeReg => Some(Instruction::SkipNeReg { x: op.vx(), y: op.vy() }),
        OpcodeFamily::LoadIndex => Some(Instruction::LoadIndex { addr: op.nnn() }),
        OpcodeFamily::JumpOffset => Some(Instruction::JumpOffset { addr: op.nnn() }),
        OpcodeFamily::Random => Some(Instruction::Random { x: op.vx(), kk: op.kk() }),
        OpcodeFamily::Draw => Some(Instruction::Draw { x: op.vx(), y: op.vy(), n: op.n() }),
        OpcodeFamily::Key => decode_key(op),
        OpcodeFamily::Misc => decode_misc(op),
    }
}

/// Decode a word, reporting unrecognized patterns as an error
pub fn try_decode(word: u16) -> Result<Instruction> {
    decode(word).ok_or(DisassemblerError::UnknownOpcode(word))
}

/// Read and decode the big-endian word at `offset` of a ROM image
pub fn decode_at(code: &[u8], offset: usize) -> Result<(Opcode, Instruction)> {
    let op = Opcode::read_at(code, offset)?;
    Ok((op, try_decode(op.raw())?))
}

/// System words dispatch on the low byte; the x nibble is ignored
fn decode_system(op: Opcode) -> Option<Instruction> {
    match op.raw() {
        // Hi-res CHIP-8 programs clear the screen with 0230
        0x0230 => return Some(Instruction::Cls),
        0x00C0..=0x00CF => return Some(Instruction::ScrollDown { n: op.n() }),
        _ => {}
    }

    match op.kk() {
        0xE0 => Some(Instruction::Cls),
        0xEE => Some(Instruction::Ret),
        0xFB => Some(Instruction::ScrollRight),
        0xFC => Some(Instruction::ScrollLeft),
        0xFD => Some(Instruction::Halt),
        0xFE => Some(Instruction::LowRes),
        0xFF => Some(Instruction::HighRes),
        _ => None,
    }
}

fn decode_alu(op: Opcode) -> Option<Instruction> {
    let alu = AluOp::from_nibble(op.n())?;
    Some(Instruction::Alu { op: alu, x: op.vx(), y: op.vy() })
}

fn decode_key(op: Opcode) -> Option<Instruction> {
    match op.kk() {
        0x9E => Some(Instruction::SkipKeyPressed { x: op.vx() }),
        0xA1 => Some(Instruction::SkipKeyNotPressed { x: op.vx() }),
        _ => None,
    }
}

fn decode_misc(op: Opcode) -> Option<Instruction> {
    let x = op.vx();

    match op.kk() {
        0x07 => Some(Instruction::LoadDelay { x }),
        0x0A => Some(Instruction::WaitKey { x }),
        0x15 => Some(Instruction::SetDelay { x }),
        0x18 => Some(Instruction::SetSound { x }),
        0x1E => Some(Instruction::AddIndex { x }),
        0x29 => Some(Instruction::LoadFont { x }),
        0x30 => Some(Instruction::LoadHiFont { x }),
        0x33 => Some(Instruction::StoreBcd { x }),
        0x55 => Some(Instruction::StoreRegisters { x }),
        0x65 => Some(Instruction::LoadRegisters { x }),
        0x75 => Some(Instruction::SaveFlags { x }),
        0x85 => Some(Instruction::RestoreFlags { x }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chip8_spec::Register;

    #[test]
    fn test_decode_cls() {
        assert_eq!(decode(0x00E0), Some(Instruction::Cls));
        assert_eq!(decode(0x0230), Some(Instruction::Cls));
    }

    #[test]
    fn test_decode_system_ignores_high_nibble() {
        assert_eq!(decode(0x01E0), Some(Instruction::Cls));
        assert_eq!(decode(0x02EE), Some(Instruction::Ret));
        assert_eq!(decode(0x0FFF), Some(Instruction::HighRes));
        assert_eq!(decode(0x0123), None);
        assert_eq!(decode(0x0000), None);
    }

    #[test]
    fn test_decode_scroll_down_needs_zero_high_byte() {
        assert_eq!(decode(0x01C4), None);
    }

    #[test]
    fn test_decode_scroll_down() {
        assert_eq!(decode(0x00C4), Some(Instruction::ScrollDown { n: 4 }));
    }

    #[test]
    fn test_decode_jump() {
        assert_eq!(decode(0x1234), Some(Instruction::Jump { addr: 0x234 }));
    }

    #[test]
    fn test_decode_alu_unknown_op() {
        assert_eq!(decode(0x8008), None);
        assert_eq!(
            decode(0x812E),
            Some(Instruction::Alu { op: AluOp::Shl, x: Register::V1, y: Register::V2 })
        );
    }

    #[test]
    fn test_decode_misc() {
        assert_eq!(decode(0xF01E), Some(Instruction::AddIndex { x: Register::V0 }));
        assert_eq!(decode(0xFA65), Some(Instruction::LoadRegisters { x: Register::VA }));
        assert_eq!(decode(0xF0FF), None);
    }

    #[test]
    fn test_decode_at() {
        let code = [0x00, 0xE0, 0xFF, 0xFF, 0xAB];

        assert_eq!(decode_at(&code, 0).unwrap(), (Opcode(0x00E0), Instruction::Cls));
        assert!(matches!(
            decode_at(&code, 2),
            Err(DisassemblerError::UnknownOpcode(0xFFFF))
        ));
        assert!(matches!(
            decode_at(&code, 4),
            Err(DisassemblerError::Spec(chip8_spec::Chip8Error::TruncatedWord(4)))
        ));
    }

    #[test]
    fn test_try_decode() {
        assert!(try_decode(0x00E0).is_ok());
        assert!(matches!(
            try_decode(0xE000),
            Err(DisassemblerError::UnknownOpcode(0xE000))
        ));
    }
}
