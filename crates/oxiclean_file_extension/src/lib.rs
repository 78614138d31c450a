//! File extension policy for import specifiers in JavaScript/TypeScript projects.
//!
//! This crate checks every import-like specifier (`import`, `export ... from`,
//! `import()`, `require()`) against a configurable policy: the specifier must
//! either always or never carry the extension of the file it resolves to.
//! Violations come with a textual fix when the correct edit is unambiguous.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use clap::Parser;
//! use oxiclean_file_extension::{Config, run_file_extension_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["file-extension-in-import", "--root", "/path/to/project"]);
//!
//! let result = run_file_extension_check(cfg)?;
//!
//! if !result.reports.is_empty() {
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     oxiclean_file_extension::print_reports(&mut stdout, &result)?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Checking a single target
//!
//! ```no_run
//! use oxiclean_core::{ImportTarget, SpecKind};
//! use oxiclean_file_extension::{FileExtensionOptions, decide};
//! use oxc_span::Span;
//!
//! let target = ImportTarget {
//!     specifier: "./foo".to_string(),
//!     resolved: Some("/project/src/foo.js".into()),
//!     span: Span::new(16, 23),
//!     kind: SpecKind::Static,
//! };
//! let decision = decide(&target, &FileExtensionOptions::default());
//! if let Some(violation) = decision.violation() {
//!     println!("{}", violation.message());
//! }
//! ```

mod checker;
mod config;
mod engine;
mod fixer;
mod inventory;
mod options;
mod reporter;
mod specifier;
mod types;

// Re-export public API
pub use checker::{SourceFinding, check_source, run_file_extension_check};
pub use config::{Config, RULE_NAME};
pub use engine::decide;
pub use fixer::apply_fixes;
pub use inventory::list_sibling_extensions;
pub use options::{FileExtensionOptions, OptionsError, resolve_options};
pub use reporter::{print_no_violations_message, print_reports};
pub use specifier::{extname, is_core_module_override, is_package_name};
pub use types::{CheckResult, Decision, FixEdit, Report, Style, Violation, ViolationKind};
