//! Plain disassembly listing, one section per ROM

use super::Declaration;
use chip8_disassembler::disassemble;

pub fn render_listing(decls: &[Declaration]) -> String {
    let mut out = String::new();

    for decl in decls {
        if let Declaration::ByteArray(array) = decl {
            out.push_str(&format!("; ===== {} =====\n", array.symbol));
            out.push_str(&disassemble(&array.bytes(), array.load_address));
            out.push('\n');
        }
    }

    out
}
