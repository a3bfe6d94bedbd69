//! # Per-ROM Metadata
//!
//! Each ROM may have a sidecar file of `key=value` lines next to it:
//!
//! ```text
//! info=Classic paddle game. 1/Q move
//! keymap=0x01, 0x04, 0x0C
//! shiftquirk
//! ```
//!
//! Sidecar values are optional overrides. They are merged with the run's
//! defaults exactly once, in [`MetadataOverrides::resolve`].

use crate::config::PackConfig;
use crate::keymap::Keymap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fields a sidecar may override
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataOverrides {
    pub keymap: Option<Keymap>,
    pub description: Option<String>,
    pub shift_quirk: Option<bool>,
}

/// Metadata attached to a packaged program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramMetadata {
    pub keymap: Keymap,
    pub description: String,
    pub shift_quirk: bool,
}

impl ProgramMetadata {
    pub fn defaults(config: &PackConfig) -> Self {
        Self {
            keymap: config.default_keymap,
            description: String::new(),
            shift_quirk: false,
        }
    }
}

impl MetadataOverrides {
    /// Parse sidecar text. Unknown keys are ignored; a malformed keymap is
    /// logged and left unset.
    pub fn parse(text: &str) -> Self {
        let mut overrides = Self::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };

            match key {
                "keymap" => match value.parse::<Keymap>() {
                    Ok(keymap) => overrides.keymap = Some(keymap),
                    Err(e) => tracing::warn!("ignoring keymap `{}`: {}", value, e),
                },
                "info" => overrides.description = Some(value.to_string()),
                // Presence alone enables the quirk
                "shiftquirk" => overrides.shift_quirk = Some(true),
                other => tracing::debug!("ignoring unknown metadata key `{}`", other),
            }
        }

        overrides
    }

    /// Fill unset fields from `defaults`
    pub fn resolve(self, defaults: &ProgramMetadata) -> ProgramMetadata {
        ProgramMetadata {
            keymap: self.keymap.unwrap_or(defaults.keymap),
            description: self.description.unwrap_or_else(|| defaults.description.clone()),
            shift_quirk: self.shift_quirk.unwrap_or(defaults.shift_quirk),
        }
    }
}

/// Sidecar path for a ROM whose file name without extension is `base_name`
pub fn sidecar_path(dir: &Path, base_name: &str, config: &PackConfig) -> PathBuf {
    dir.join(format!("{}{}", base_name, config.sidecar_extension))
}

/// Load and resolve metadata for one ROM.
///
/// A missing or unreadable sidecar is logged and yields the defaults.
pub fn load_metadata(dir: &Path, base_name: &str, config: &PackConfig) -> ProgramMetadata {
    let path = sidecar_path(dir, base_name, config);
    let defaults = ProgramMetadata::defaults(config);
    let _span = tracing::debug_span!("sidecar", path = %path.display()).entered();

    match fs::read_to_string(&path) {
        Ok(text) => MetadataOverrides::parse(&text).resolve(&defaults),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("no info for {}, using defaults", base_name);
            defaults
        }
        Err(e) => {
            tracing::warn!("cannot read info for {} ({}), using defaults", base_name, e);
            defaults
        }
    }
}
