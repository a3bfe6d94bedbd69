//! Workspace-level integration tests for the CHIP-8 packaging toolchain.
//!
//! The tests live in `tests/`; this crate has no code of its own.
