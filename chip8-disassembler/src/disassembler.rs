//! Listing disassembler

use chip8_spec::{Opcode, WORD_SIZE};
use crate::decoder::decode_at;
use crate::error::DisassemblerError;
use crate::formatter::format;

/// Disassemble a ROM image loaded at `base` into a listing
pub fn disassemble(code: &[u8], base: u16) -> String {
    let mut output = String::new();

    output.push_str("; CHIP-8 Disassembly\n");
    output.push_str(&format!("; Load address: 0x{:04X}\n", base));
    output.push_str(&format!("; Code size: {} bytes ({} instructions)\n",
        code.len(), code.len() / WORD_SIZE));
    output.push('\n');

    let mut addr = u32::from(base);

    for offset in (0..code.len()).step_by(WORD_SIZE) {
        // Address label
        output.push_str(&format!("0x{:04X}:  ", addr));

        match decode_at(code, offset) {
            Ok((op, instr)) => output.push_str(&format!("{}  {}", op, format(&instr))),
            Err(e @ DisassemblerError::UnknownOpcode(word)) => {
                output.push_str(&format!("{}  ; {}", Opcode(word), e));
            }
            Err(e @ DisassemblerError::Spec(_)) => {
                output.push_str(&format!("{:02X}    ; {}", code[offset], e));
            }
        }

        output.push('\n');
        addr += WORD_SIZE as u32;
    }

    output
}
