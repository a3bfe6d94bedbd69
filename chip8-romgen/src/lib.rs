//! # CHIP-8 ROM Packager
//!
//! Turn a directory of CHIP-8 / SUPER-CHIP ROMs into C source for firmware
//! that has no filesystem: one annotated byte array per ROM plus a program
//! table the firmware menu reads.
//!
//! ## Input Layout
//!
//! - `menu` lists ROM file names, one per line, in menu order
//! - `*.ch8` CHIP-8 ROMs, `*.sch8` SUPER-CHIP ROMs
//! - optional `<name>.info` sidecars with `keymap`, `info` and `shiftquirk`
//!
//! ## Example
//!
//! ```no_run
//! use chip8_romgen::{pack_directory, render, OutputFormat, PackConfig};
//! use std::path::Path;
//!
//! let decls = pack_directory(Path::new("roms"), &PackConfig::default()).unwrap();
//! print!("{}", render(OutputFormat::C, &decls).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod keymap;
pub mod reader;
pub mod group;
pub mod metadata;
pub mod manifest;
pub mod table;
pub mod output;
pub mod pipeline;

pub use config::{ConfigError, PackConfig};
pub use error::{Result, RomgenError};
pub use keymap::{Keymap, KeymapError};
pub use reader::{RomReader, RomWord};
pub use group::{AnnotatedWord, GroupEmitter, WordGroup};
pub use metadata::{load_metadata, MetadataOverrides, ProgramMetadata};
pub use manifest::{parse_manifest, read_manifest, ManifestEntry, RomVariant};
pub use table::{code_symbol, PackedRom, ProgramRecord, ProgramTableBuilder};
pub use output::{render, ByteArray, Declaration, OutputFormat};
pub use pipeline::{pack_code, pack_directory, pack_rom};
