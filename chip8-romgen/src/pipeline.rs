//! # Packaging Pipeline
//!
//! Manifest first, then each ROM in manifest order. A ROM that cannot be
//! packaged is logged and left out. Only a bad configuration or a missing
//! manifest stops the run.

use crate::config::PackConfig;
use crate::error::{Result, RomgenError};
use crate::group::GroupEmitter;
use crate::manifest::{read_manifest, ManifestEntry};
use crate::metadata::load_metadata;
use crate::output::{ByteArray, Declaration};
use crate::reader::RomReader;
use crate::table::{code_symbol, PackedRom, ProgramRecord, ProgramTableBuilder};
use std::fs;
use std::path::Path;

/// Code array and end address for one ROM image
pub fn pack_code(symbol: &str, code: &[u8], config: &PackConfig) -> (ByteArray, u32) {
    let mut reader = RomReader::new(code, config.load_address);
    let end_address = reader.end_address();
    let mut emitter = GroupEmitter::new(config.words_per_group);

    for word in &mut reader {
        emitter.push(&word);
    }

    let array = ByteArray {
        symbol: symbol.to_string(),
        load_address: config.load_address,
        groups: emitter.finish(),
    };
    (array, end_address)
}

/// Read, annotate and describe one ROM
pub fn pack_rom(dir: &Path, entry: &ManifestEntry, config: &PackConfig) -> Result<PackedRom> {
    let path = dir.join(&entry.file_name);
    let code = fs::read(&path).map_err(|source| RomgenError::RomRead { path: path.clone(), source })?;

    let (array, end_address) = pack_code(&code_symbol(&entry.file_name), &code, config);
    let size = u16::try_from(end_address).map_err(|_| RomgenError::RomTooLarge {
        path: path.clone(),
        len: code.len(),
        load_address: config.load_address,
    })?;

    if code.len() % 2 != 0 {
        tracing::warn!(
            "{} has an odd length ({} bytes), padding the last word with 0x00",
            entry.file_name,
            code.len()
        );
    }

    let metadata = load_metadata(dir, &entry.name, config);
    let record = ProgramRecord::new(entry, size, metadata);
    Ok(PackedRom { array, record })
}

/// Package every ROM listed in the manifest under `dir`
pub fn pack_directory(dir: &Path, config: &PackConfig) -> Result<Vec<Declaration>> {
    config.validate()?;
    tracing::debug!("packaging {} with {}", dir.display(), config);

    let entries = read_manifest(dir, config)?;
    let table = entries
        .iter()
        .fold(ProgramTableBuilder::new(), |mut table, entry| {
            match pack_rom(dir, entry, config) {
                Ok(packed) => table.push(packed),
                Err(e) => tracing::warn!("skipping {}: {}", entry.file_name, e),
            }
            table
        });

    tracing::info!("packaged {} of {} ROMs", table.len(), entries.len());
    Ok(table.finish(config.include_header.as_deref()))
}
