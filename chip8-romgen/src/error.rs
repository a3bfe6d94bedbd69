//! Packaging errors
//!
//! Only [`RomgenError::is_fatal`] errors stop a run. Everything else is
//! reported for the ROM that caused it and the run moves on.

use crate::config::ConfigError;
use crate::keymap::KeymapError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomgenError {
    #[error("Failed to read manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read ROM {}: {source}", .path.display())]
    RomRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ROM {} is too large: {len} bytes loaded at 0x{load_address:04X} overflow the 16-bit size field", .path.display())]
    RomTooLarge {
        path: PathBuf,
        len: usize,
        load_address: u16,
    },

    #[error("Invalid keymap: {0}")]
    Keymap(#[from] KeymapError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl RomgenError {
    /// Check if this error should abort the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RomgenError::Manifest { .. } | RomgenError::Config(_) | RomgenError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RomgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_manifest_error_is_fatal() {
        let err = RomgenError::Manifest {
            path: PathBuf::from("roms/menu"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "Failed to read manifest roms/menu: missing");
    }

    #[test]
    fn test_rom_errors_are_recoverable() {
        let err = RomgenError::RomRead {
            path: PathBuf::from("roms/pong.ch8"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fatal());

        let err = RomgenError::RomTooLarge {
            path: PathBuf::from("roms/big.ch8"),
            len: 0x10000,
            load_address: 0x200,
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("65536 bytes loaded at 0x0200"));

        assert!(!RomgenError::Keymap(KeymapError::WrongLength(2)).is_fatal());
    }
}
