//! Core detection engine.
//!
//! - `patterns`: named sub-patterns and the compiled pattern set
//! - `tags`: opening-tag candidate scanning
//! - `detector`: per-file lazy scan with suppression
//! - `file_scanner`: expansion of default directories into template files

pub mod detector;
pub mod file_scanner;
pub mod patterns;
pub mod tags;

pub use detector::{Findings, scan};
