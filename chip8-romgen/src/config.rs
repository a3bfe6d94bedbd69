//! # Packaging Configuration
//!
//! File naming conventions and layout knobs for a packaging run. The defaults
//! match the firmware's ROM directory layout; the CLI overrides individual
//! fields.

use crate::keymap::Keymap;
use chip8_spec::PROGRAM_START;
use std::fmt;
use thiserror::Error;

/// Manifest file name inside the ROM directory
pub const DEFAULT_MANIFEST: &str = "menu";

/// Extension of plain CHIP-8 ROMs
pub const BASE_EXTENSION: &str = ".ch8";

/// Extension of SUPER-CHIP ROMs
pub const ENHANCED_EXTENSION: &str = ".sch8";

/// Extension of metadata sidecar files
pub const SIDECAR_EXTENSION: &str = ".info";

/// Instruction words per emitted byte line
pub const DEFAULT_WORDS_PER_GROUP: usize = 8;

/// Upper bound on words per line
pub const MAX_WORDS_PER_GROUP: usize = 64;

/// Configuration for one packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Manifest file name, relative to the ROM directory
    pub manifest_name: String,
    /// Extension marking a base CHIP-8 ROM (with leading dot)
    pub base_extension: String,
    /// Extension marking a SUPER-CHIP ROM (with leading dot)
    pub enhanced_extension: String,
    /// Extension of the metadata sidecar (with leading dot)
    pub sidecar_extension: String,
    /// Address the first ROM word is loaded at
    pub load_address: u16,
    /// Words per annotated group
    pub words_per_group: usize,
    /// Keymap used when a ROM has none of its own
    pub default_keymap: Keymap,
    /// Header to `#include` at the top of C output
    pub include_header: Option<String>,
}

impl PackConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_name.trim().is_empty() {
            return Err(ConfigError::EmptyManifestName);
        }

        let extensions = [&self.base_extension, &self.enhanced_extension, &self.sidecar_extension];
        for (i, ext) in extensions.iter().enumerate() {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::InvalidExtension(ext.to_string()));
            }
            if extensions[i + 1..].contains(ext) {
                return Err(ConfigError::DuplicateExtension(ext.to_string()));
            }
        }

        if self.load_address % 2 != 0 {
            return Err(ConfigError::MisalignedLoadAddress(self.load_address));
        }

        if self.words_per_group == 0 || self.words_per_group > MAX_WORDS_PER_GROUP {
            return Err(ConfigError::InvalidGroupSize(self.words_per_group));
        }

        Ok(())
    }

    /// Replace the default keymap with one parsed from a literal
    pub fn set_default_keymap(&mut self, literal: &str) -> crate::error::Result<()> {
        self.default_keymap = literal.parse()?;
        Ok(())
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST.to_string(),
            base_extension: BASE_EXTENSION.to_string(),
            enhanced_extension: ENHANCED_EXTENSION.to_string(),
            sidecar_extension: SIDECAR_EXTENSION.to_string(),
            load_address: PROGRAM_START,
            words_per_group: DEFAULT_WORDS_PER_GROUP,
            default_keymap: Keymap::DEFAULT,
            include_header: None,
        }
    }
}

impl fmt::Display for PackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PackConfig {{ manifest: {}, roms: {}/{}, sidecar: {}, load: 0x{:04X}, group: {} words }}",
            self.manifest_name,
            self.base_extension,
            self.enhanced_extension,
            self.sidecar_extension,
            self.load_address,
            self.words_per_group,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("manifest name must not be empty")]
    EmptyManifestName,

    #[error("extension `{0}` must start with '.' and name something")]
    InvalidExtension(String),

    #[error("ROM and sidecar extensions must be distinct (got `{0}` twice)")]
    DuplicateExtension(String),

    #[error("load address 0x{0:04X} is not word aligned")]
    MisalignedLoadAddress(u16),

    #[error("words per group must be in range [1, 64], got {0}")]
    InvalidGroupSize(usize),
}
