//! Core operations.
//!
//! This module contains the business logic for cbgen commands,
//! separated from CLI argument parsing, prompting and output rendering.

pub mod new;

pub use new::new_structure;
