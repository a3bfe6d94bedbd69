//! # Program Table
//!
//! Accumulates one [`ProgramRecord`] per packaged ROM, in manifest order, and
//! turns the run into an ordered list of [`Declaration`]s.

use crate::keymap::Keymap;
use crate::manifest::{ManifestEntry, RomVariant};
use crate::metadata::ProgramMetadata;
use crate::output::{ByteArray, Declaration};
use serde::Serialize;

/// Largest count the emitted `uint8_t PROGRAM_COUNT` can hold
pub const MAX_PROGRAMS: usize = u8::MAX as usize;

/// Table row describing one packaged program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramRecord {
    /// Display name (file name without extension)
    pub name: String,
    /// Symbol of the code array
    pub code_symbol: String,
    /// End address of the program: load address plus padded length
    pub size: u16,
    pub variant: RomVariant,
    pub keymap: Keymap,
    pub description: String,
    pub shift_quirk: bool,
}

impl ProgramRecord {
    pub fn new(entry: &ManifestEntry, size: u16, metadata: ProgramMetadata) -> Self {
        Self {
            name: entry.name.clone(),
            code_symbol: code_symbol(&entry.file_name),
            size,
            variant: entry.variant,
            keymap: metadata.keymap,
            description: metadata.description,
            shift_quirk: metadata.shift_quirk,
        }
    }

    pub fn name_symbol(&self) -> String {
        format!("name_{}", self.code_symbol)
    }

    pub fn info_symbol(&self) -> String {
        format!("info_{}", self.code_symbol)
    }

    #[inline]
    pub fn is_enhanced(&self) -> bool {
        self.variant.is_enhanced()
    }
}

/// C identifier for a ROM file name: `pong.ch8` becomes `pong_ch8`
pub fn code_symbol(file_name: &str) -> String {
    let mut symbol: String = file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        symbol.insert_str(0, "rom_");
    }
    symbol
}

/// A ROM ready for the table: its code array and its record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRom {
    pub array: ByteArray,
    pub record: ProgramRecord,
}

/// Append-only accumulator for packaged ROMs
#[derive(Debug, Default)]
pub struct ProgramTableBuilder {
    arrays: Vec<ByteArray>,
    records: Vec<ProgramRecord>,
}

impl ProgramTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, packed: PackedRom) {
        tracing::debug!(
            "packed {} as {} ({} bytes)",
            packed.record.name,
            packed.record.code_symbol,
            packed.array.len()
        );
        self.arrays.push(packed.array);
        self.records.push(packed.record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProgramRecord] {
        &self.records
    }

    /// Produce the declarations in emission order
    pub fn finish(self, include_header: Option<&str>) -> Vec<Declaration> {
        if self.records.len() > MAX_PROGRAMS {
            tracing::warn!(
                "{} programs exceed the {} a uint8_t PROGRAM_COUNT can hold",
                self.records.len(),
                MAX_PROGRAMS
            );
        }

        let mut decls = Vec::with_capacity(self.arrays.len() + 2 * self.records.len() + 4);

        if let Some(header) = include_header {
            decls.push(Declaration::Include(header.to_string()));
        }
        decls.push(Declaration::ProgramStruct);
        decls.extend(self.arrays.into_iter().map(Declaration::ByteArray));
        decls.push(Declaration::ProgramCount(self.records.len()));
        decls.extend(self.records.iter().map(|r| Declaration::NameString {
            symbol: r.name_symbol(),
            value: r.name.clone(),
        }));
        decls.extend(self.records.iter().map(|r| Declaration::InfoString {
            symbol: r.info_symbol(),
            value: r.description.clone(),
        }));
        decls.push(Declaration::ProgramTable(self.records));

        decls
    }
}
