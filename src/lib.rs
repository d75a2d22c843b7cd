//! i18n-detect - untranslated string finder for HTML templates
//!
//! i18n-detect is a CLI tool and library that scans template files line by
//! line for text that is shown to users but not wrapped in an i18n call
//! (`$_(...)`, `$ungettext(...)`). Detection is purely textual: an ordered
//! set of heuristic rules, plus comment and skip-directive suppression.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface (arguments, scan session, report)
//! - `config`: Built-in defaults and config file loading
//! - `core`: Pattern set, tag scanning, the per-file detector, file discovery
//! - `directives`: `detect-missing-i18n-skip-line` directives
//! - `issues`: Finding and severity types
//! - `rules`: The four ordered detection rules

pub mod cli;
pub mod config;
pub mod core;
pub mod directives;
pub mod issues;
pub mod rules;
