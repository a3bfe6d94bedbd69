//! Stress tests for the packager
//!
//! Tests with full-size ROMs, long manifests, and every possible word.

use chip8_disassembler::{decode, disassemble_word};
use chip8_romgen::{pack_directory, render, Declaration, OutputFormat, PackConfig};
use chip8_spec::{MEMORY_SIZE, PROGRAM_START};
use std::fs;

// ============================================================================
// Large ROM Tests
// ============================================================================

#[test]
fn test_full_memory_rom() {
    let len = MEMORY_SIZE - PROGRAM_START as usize;
    let code: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("menu"), "big.ch8\n").unwrap();
    fs::write(dir.path().join("big.ch8"), &code).unwrap();

    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();
    let array = decls
        .iter()
        .find_map(|d| match d {
            Declaration::ByteArray(array) => Some(array),
            _ => None,
        })
        .unwrap();

    assert_eq!(array.bytes(), code);
    assert_eq!(array.groups.len(), len / 2 / 8);

    let out = render(OutputFormat::C, &decls).unwrap();
    assert!(out.contains(&format!("        .size={},\n", MEMORY_SIZE)));
}

#[test]
fn test_many_programs() {
    let dir = tempfile::tempdir().unwrap();
    let mut manifest = String::new();
    for i in 0..200 {
        let name = format!("game{:03}.ch8", i);
        fs::write(dir.path().join(&name), [0x00, 0xE0, 0x12, 0x00]).unwrap();
        manifest.push_str(&name);
        manifest.push('\n');
    }
    fs::write(dir.path().join("menu"), manifest).unwrap();

    let decls = pack_directory(dir.path(), &PackConfig::default()).unwrap();
    assert!(decls.contains(&Declaration::ProgramCount(200)));

    let out = render(OutputFormat::C, &decls).unwrap();
    assert_eq!(out.matches("    (Program){\n").count(), 200);
    assert!(out.find("name_game000_ch8").unwrap() < out.find("name_game199_ch8").unwrap());
}

// ============================================================================
// Exhaustive Decoder Tests
// ============================================================================

#[test]
fn test_every_word_renders() {
    let mut known = 0;
    for word in 0..=u16::MAX {
        let text = disassemble_word(word);
        assert_eq!(text.is_empty(), decode(word).is_none(), "0x{:04X}", word);
        assert_eq!(text.trim(), text);
        if !text.is_empty() {
            known += 1;
        }
    }

    // Twelve families decode every word
    assert!(known > 12 * 4096);
}
