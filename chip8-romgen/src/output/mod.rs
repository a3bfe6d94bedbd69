//! # Output Declarations
//!
//! A packaging run produces an ordered list of [`Declaration`]s. Renderers
//! serialize that list; nothing is printed while ROMs are being processed.

pub mod c;
pub mod json;
pub mod listing;

use crate::error::Result;
use crate::group::WordGroup;
use crate::table::ProgramRecord;

/// A ROM's code as annotated groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray {
    pub symbol: String,
    pub load_address: u16,
    pub groups: Vec<WordGroup>,
}

impl ByteArray {
    /// Emitted bytes, including a filler byte for odd-length ROMs
    pub fn bytes(&self) -> Vec<u8> {
        self.groups.iter().flat_map(WordGroup::bytes).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.len() * 2).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One top-level item of generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `#include` preamble
    Include(String),
    /// The `struct Program` type
    ProgramStruct,
    /// Code array for one ROM
    ByteArray(ByteArray),
    /// Number of table entries
    ProgramCount(usize),
    /// Display name string for one ROM
    NameString { symbol: String, value: String },
    /// Description string for one ROM
    InfoString { symbol: String, value: String },
    /// The program table itself
    ProgramTable(Vec<ProgramRecord>),
}

/// Output flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// C source for the firmware build
    #[default]
    C,
    /// Program table and code bytes as JSON
    Json,
    /// Plain disassembly listing per ROM
    Listing,
}

/// Render declarations in the requested format
pub fn render(format: OutputFormat, decls: &[Declaration]) -> Result<String> {
    match format {
        OutputFormat::C => Ok(c::render_c(decls)),
        OutputFormat::Json => json::render_json(decls),
        OutputFormat::Listing => Ok(listing::render_listing(decls)),
    }
}
