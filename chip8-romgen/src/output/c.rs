//! C source renderer

use super::{ByteArray, Declaration};
use crate::group::WordGroup;
use crate::table::ProgramRecord;

/// Descriptor type the firmware's program selector reads
pub const PROGRAM_STRUCT: &str = "\
struct Program {
    char *name;
    uint8_t *code;
    uint16_t size;
    bool super;
    uint8_t *info;
    uint8_t keymap[3];
    bool shiftquirk;
};
";

/// Serialize declarations as C source
pub fn render_c(decls: &[Declaration]) -> String {
    let mut out = String::new();

    for decl in decls {
        match decl {
            Declaration::Include(header) => {
                out.push_str(&format!("#include \"{}\"\n\n", c_escape(header)));
            }
            Declaration::ProgramStruct => out.push_str(PROGRAM_STRUCT),
            Declaration::ByteArray(array) => push_array(&mut out, array),
            Declaration::ProgramCount(count) => {
                out.push_str(&format!("const uint8_t PROGRAM_COUNT = {};\n", count));
            }
            Declaration::NameString { symbol, value } => {
                out.push_str(&format!("const char {}[] PROGMEM = \"{}\";\n", symbol, c_escape(value)));
            }
            Declaration::InfoString { symbol, value } => {
                out.push_str(&format!("const uint8_t {}[] PROGMEM = \"{}\";\n", symbol, c_escape(value)));
            }
            Declaration::ProgramTable(records) => push_table(&mut out, records),
        }
    }

    out
}

fn push_array(out: &mut String, array: &ByteArray) {
    out.push_str(&format!("const uint8_t {}[] PROGMEM = {{\n", array.symbol));
    for group in &array.groups {
        push_group(out, group);
    }
    out.push_str("};\n\n");
}

fn push_group(out: &mut String, group: &WordGroup) {
    for word in &group.words {
        let line = match &word.adjacent {
            Some(adjacent) => format!(
                "    //0x{:04X}: {:<20} |         0x{:04X}: {}",
                word.address,
                word.text,
                word.address + 1,
                adjacent
            ),
            None => format!("    //0x{:04X}: {}", word.address, word.text),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let bytes: Vec<String> = group.bytes().map(|b| format!("0x{:02X},", b)).collect();
    out.push_str("    ");
    out.push_str(&bytes.join(" "));
    out.push('\n');
}

fn push_table(out: &mut String, records: &[ProgramRecord]) {
    out.push_str("const Program programs[] PROGMEM = {\n");
    for record in records {
        out.push_str("    (Program){\n");
        out.push_str(&format!("        .name=(char*){},\n", record.name_symbol()));
        out.push_str(&format!("        .code=(uint8_t*){},\n", record.code_symbol));
        out.push_str(&format!("        .size={},\n", record.size));
        out.push_str(&format!("        .super={},\n", u8::from(record.is_enhanced())));
        out.push_str(&format!("        .info=(uint8_t*){},\n", record.info_symbol()));
        out.push_str(&format!("        .keymap={{{}}},\n", record.keymap));
        out.push_str(&format!("        .shiftquirk={},\n", record.shift_quirk));
        out.push_str("    },\n");
    }
    out.push_str("};\n");
}

/// Escape text for a C string literal. Non-printable and non-ASCII bytes use
/// three-digit octal escapes, which cannot swallow following characters.
pub fn c_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'\\' => escaped.push_str("\\\\"),
            b'"' => escaped.push_str("\\\""),
            b'\n' => escaped.push_str("\\n"),
            b'\t' => escaped.push_str("\\t"),
            0x20..=0x7E => escaped.push(byte as char),
            _ => escaped.push_str(&format!("\\{:03o}", byte)),
        }
    }
    escaped
}
