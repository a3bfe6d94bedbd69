//! # Manifest
//!
//! The manifest lists ROM file names one per line, in the order the firmware
//! menu shows them. Only names with a recognized ROM extension are packaged.

use crate::config::PackConfig;
use crate::error::{Result, RomgenError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Instruction set a ROM targets, from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RomVariant {
    /// Plain CHIP-8
    Base,
    /// SUPER-CHIP
    Enhanced,
}

impl RomVariant {
    #[inline]
    pub fn is_enhanced(self) -> bool {
        self == RomVariant::Enhanced
    }
}

/// One packaged ROM from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// File name as listed, relative to the ROM directory
    pub file_name: String,
    /// File name without its ROM extension
    pub name: String,
    pub variant: RomVariant,
}

impl ManifestEntry {
    /// Classify a manifest line; `None` when it is not a ROM
    pub fn from_line(line: &str, config: &PackConfig) -> Option<Self> {
        let file_name = line.trim();
        let (name, variant) = if let Some(name) = file_name.strip_suffix(&config.enhanced_extension) {
            (name, RomVariant::Enhanced)
        } else if let Some(name) = file_name.strip_suffix(&config.base_extension) {
            (name, RomVariant::Base)
        } else {
            return None;
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            file_name: file_name.to_string(),
            name: name.to_string(),
            variant,
        })
    }
}

/// Parse manifest text, keeping ROM entries in order
pub fn parse_manifest(text: &str, config: &PackConfig) -> Vec<ManifestEntry> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let entry = ManifestEntry::from_line(trimmed, config);
            if entry.is_none() {
                tracing::info!("skipping manifest entry `{}`: not a ROM", trimmed);
            }
            entry
        })
        .collect()
}

/// Read the manifest from `dir`. Failure here is fatal for the run.
pub fn read_manifest(dir: &Path, config: &PackConfig) -> Result<Vec<ManifestEntry>> {
    let path = dir.join(&config.manifest_name);
    let text = fs::read_to_string(&path)
        .map_err(|source| RomgenError::Manifest { path: path.clone(), source })?;

    let entries = parse_manifest(&text, config);
    tracing::debug!("{} lists {} ROMs", path.display(), entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_filters() {
        let text = "pong.ch8\nREADME\n\nblinky.sch8\nnotes.txt\n  tetris.ch8  \n";
        let entries = parse_manifest(text, &PackConfig::default());

        let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["pong.ch8", "blinky.sch8", "tetris.ch8"]);
        assert_eq!(entries[0].variant, RomVariant::Base);
        assert_eq!(entries[1].variant, RomVariant::Enhanced);
        assert_eq!(entries[1].name, "blinky");
    }

    #[test]
    fn test_extension_must_be_exact() {
        let config = PackConfig::default();
        assert!(ManifestEntry::from_line("game.ch8.bak", &config).is_none());
        assert!(ManifestEntry::from_line("game.CH8", &config).is_none());
        assert!(ManifestEntry::from_line(".ch8", &config).is_none());
    }

    #[test]
    fn test_crlf_manifest() {
        let entries = parse_manifest("a.ch8\r\nb.sch8\r\n", &PackConfig::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name, "a.ch8");
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest(dir.path(), &PackConfig::default()).unwrap_err();
        assert!(matches!(err, RomgenError::Manifest { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_read_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("menu"), "demo.ch8\n").unwrap();

        let entries = read_manifest(dir.path(), &PackConfig::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "demo");
    }
}
