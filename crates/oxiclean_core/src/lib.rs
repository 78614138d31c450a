//! Core utilities for oxiclean tools.
//!
//! This crate provides shared functionality for analyzing JavaScript/TypeScript
//! projects, including:
//! - Parsing import-like constructs (imports, re-exports, `import()`, `require()`)
//! - Resolving relative specifiers to files on disk
//! - Collecting source files from a project
//! - Configuration utilities (git root finding, `.oxicleanrc.json` loading)

mod collector;
mod config;
mod constants;
mod parser;
mod resolver;
mod targets;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_sources};
pub use config::{RC_FILE, RcFile, find_git_root, load_rc_file};
pub use constants::{DEFAULT_TRY_EXTENSIONS, JS_TS_EXTENSIONS, TS_SOURCE_FOR_RUNTIME};
pub use parser::specifiers_in;
pub use resolver::resolve;
pub use targets::import_targets_for;
pub use types::{ImportTarget, SpecKind, Specifier};
