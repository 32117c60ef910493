//! Core utilities for the cbgen structure generator.
//!
//! This crate provides the filesystem side of generation: rendered files
//! and the destination directory they are written into.

mod dir;
mod file;

// Destination directories
pub use dir::{DirClaim, claim_dir};
// File operations
pub use file::GeneratedFile;
