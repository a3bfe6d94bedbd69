//! End-to-end integration tests for the CHIP-8 packaging toolchain
//!
//! These tests verify the complete workflow:
//! 1. Lay out a ROM directory (manifest, ROMs, sidecars)
//! 2. Package it into declarations
//! 3. Render C source and check it against the disassembler

use chip8_disassembler::{disassemble, disassemble_word};
use chip8_romgen::{pack_directory, render, Declaration, OutputFormat, PackConfig};
use std::fs;
use tempfile::TempDir;

/// 00E0 CLS, 6A02 LD VA, 0x2, A22A LD I, 0x22A, D01F DRW V0, V1 (15), 1204 JP 0x204
const MAZE: &[u8] = &[0x00, 0xE0, 0x6A, 0x02, 0xA2, 0x2A, 0xD0, 0x1F, 0x12, 0x04];

/// 00FF HI, 00C4 SCD 4, F130 LD HF, V1, 00FD HALT
const SCROLLER: &[u8] = &[0x00, 0xFF, 0x00, 0xC4, 0xF1, 0x30, 0x00, 0xFD];

fn arcade() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let files: &[(&str, &[u8])] = &[
        ("menu", b"maze.ch8\nscroller.sch8\nREADME.md\n"),
        ("maze.ch8", MAZE),
        ("scroller.sch8", SCROLLER),
        ("scroller.info", b"info=Scrolls the screen\nkeymap=0x01, 0x02, 0x03\n"),
        ("README.md", b"# arcade\n"),
    ];
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

// ============================================================================
// Package -> Render Tests
// ============================================================================

#[test]
fn test_arcade_declaration_order() {
    let dir = arcade();
    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();

    let kinds: Vec<&str> = decls
        .iter()
        .map(|d| match d {
            Declaration::Include(_) => "include",
            Declaration::ProgramStruct => "struct",
            Declaration::ByteArray(_) => "array",
            Declaration::ProgramCount(_) => "count",
            Declaration::NameString { .. } => "name",
            Declaration::InfoString { .. } => "info",
            Declaration::ProgramTable(_) => "table",
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["struct", "array", "array", "count", "name", "name", "info", "info", "table"]
    );
}

#[test]
fn test_arcade_c_output() {
    let dir = arcade();
    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();
    let out = render(OutputFormat::C, &decls).unwrap();

    assert!(out.contains("    //0x0200: CLS                  |         0x0201:\n"));
    assert!(out.contains("    //0x0206: DRW V0, V1 (15)      |         0x0207: JP 0xF12\n"));
    assert!(out.contains("    //0x0208: JP 0x204\n"));
    assert!(out.contains("    0x00, 0xE0, 0x6A, 0x02, 0xA2, 0x2A, 0xD0, 0x1F, 0x12, 0x04,\n"));

    assert!(out.contains("    //0x0202: SCD 4                |         0x0203: RND V4, 0xF1\n"));
    assert!(out.contains("    //0x0204: LD HF, V1            |         0x0205: SE V0, 0x0\n"));
    assert!(out.contains("    //0x0206: HALT\n"));

    assert!(out.contains("const uint8_t PROGRAM_COUNT = 2;\n"));
    assert!(out.contains("const uint8_t info_scroller_sch8[] PROGMEM = \"Scrolls the screen\";\n"));
    assert!(out.contains("        .size=522,\n"));
    assert!(out.contains("        .size=520,\n"));
}

#[test]
fn test_annotations_match_disassembler() {
    let dir = arcade();
    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();

    for decl in &decls {
        let Declaration::ByteArray(array) = decl else { continue };
        for word in array.groups.iter().flat_map(|g| &g.words) {
            let raw = u16::from_be_bytes(word.bytes);
            assert_eq!(word.text, disassemble_word(raw), "at 0x{:04X}", word.address);
        }
    }
}

#[test]
fn test_listing_matches_disassembler() {
    let dir = arcade();
    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();
    let out = render(OutputFormat::Listing, &decls).unwrap();

    assert!(out.contains(&disassemble(MAZE, 0x200)));
    assert!(out.contains(&disassemble(SCROLLER, 0x200)));
}

#[test]
fn test_relocated_load_address() {
    let dir = arcade();
    let config = PackConfig {
        load_address: 0x600,
        ..PackConfig::default()
    };
    let decls = pack_directory(dir.path(), &config).unwrap();
    let out = render(OutputFormat::C, &decls).unwrap();

    assert!(out.contains("    //0x0600: CLS"));
    assert!(out.contains("        .size=1546,\n"));
}
