//! Instruction formatting to assembly text
//!
//! Register operands print as `V` plus the hex index, except the second
//! register of a register pair and the single register of the key/timer/memory
//! families, which print their index in decimal. Immediates are uppercase hex
//! without padding.

use chip8_spec::{Instruction, Register};

/// Format instruction as assembly text
pub fn format(instr: &Instruction) -> String {
    match instr {
        // ========== System ==========
        Instruction::Cls
        | Instruction::Ret
        | Instruction::ScrollRight
        | Instruction::ScrollLeft
        | Instruction::Halt
        | Instruction::LowRes
        | Instruction::HighRes => instr.mnemonic().to_string(),
        Instruction::ScrollDown { n } => format!("SCD {}", n),

        // ========== 12-bit immediate ==========
        Instruction::Jump { addr } | Instruction::Call { addr } => imm12(instr.mnemonic(), *addr),
        Instruction::LoadIndex { addr } => imm12("LD I,", *addr),
        Instruction::JumpOffset { addr } => imm12("JP V0,", *addr),

        // ========== Register, byte ==========
        Instruction::SkipEqImm { x, kk }
        | Instruction::SkipNeImm { x, kk }
        | Instruction::LoadImm { x, kk }
        | Instruction::AddImm { x, kk }
        | Instruction::Random { x, kk } => x8(instr.mnemonic(), *x, *kk),

        // ========== Register pair ==========
        Instruction::SkipEqReg { x, y }
        | Instruction::SkipNeReg { x, y }
        | Instruction::Alu { x, y, .. } => xy(instr.mnemonic(), *x, *y),

        Instruction::Draw { x, y, n } => format!("DRW {}, {} ({})", x, y, n),

        // ========== Keys ==========
        Instruction::SkipKeyPressed { x } => format!("SKP {}", reg_dec(*x)),
        Instruction::SkipKeyNotPressed { x } => format!("SKNP {}", reg_dec(*x)),

        // ========== Timers and memory ==========
        Instruction::LoadDelay { x } => format!("LD {}, DT", reg_dec(*x)),
        Instruction::WaitKey { x } => format!("LD {}, K", reg_dec(*x)),
        Instruction::SetDelay { x } => format!("LD DT, {}", reg_dec(*x)),
        Instruction::SetSound { x } => format!("LD ST, {}", reg_dec(*x)),
        Instruction::AddIndex { x } => format!("ADD I, {}", reg_dec(*x)),
        Instruction::LoadFont { x } => format!("LD F, {}", reg_dec(*x)),
        Instruction::LoadHiFont { x } => format!("LD HF, {}", reg_dec(*x)),
        Instruction::StoreBcd { x } => format!("LD B, {}", reg_dec(*x)),
        Instruction::StoreRegisters { x } => format!("LD [I], {}", reg_dec(*x)),
        Instruction::LoadRegisters { x } => format!("LD {}, [I]", reg_dec(*x)),
        Instruction::SaveFlags { x } => format!("LD R, {}", reg_dec(*x)),
        Instruction::RestoreFlags { x } => format!("LD {}, R", reg_dec(*x)),
    }
}

fn imm12(op: &str, addr: u16) -> String {
    format!("{} 0x{:X}", op, addr & 0xFFF)
}

fn x8(op: &str, x: Register, kk: u8) -> String {
    format!("{} {}, 0x{:X}", op, x, kk)
}

fn xy(op: &str, x: Register, y: Register) -> String {
    format!("{} {}, {}", op, x, reg_dec(y))
}

/// Register with its index in decimal (`V10` for VA)
fn reg_dec(reg: Register) -> String {
    format!("V{}", reg.index())
}
