use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::{
    options::{FileExtensionOptions, resolve_options},
    types::Style,
};

/// Name of the rule inside `.oxicleanrc.json`.
pub const RULE_NAME: &str = "file-extension-in-import";

#[derive(Debug, Clone, Parser)]
#[command(name = "file-extension-in-import")]
#[command(about = "Enforce or forbid file extensions in import specifiers")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Default style for every extension
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Style for a single extension, e.g. `.json=never` (repeatable)
    #[arg(long = "override", value_name = "EXT=STYLE", value_parser = parse_override)]
    pub overrides: Vec<(String, Style)>,

    /// Extensions tried when resolving extensionless specifiers, in order
    #[arg(long, value_delimiter = ',')]
    pub try_extensions: Option<Vec<String>>,

    /// Treat TypeScript sources as imported by their compiled `.js` name
    #[arg(long)]
    pub esm: bool,

    /// Rewrite fixable specifiers in place
    #[arg(long)]
    pub fix: bool,

    /// Only check files whose root-relative path contains this text
    #[arg(long)]
    pub glob: Option<String>,

    #[clap(skip)]
    pub options: Option<FileExtensionOptions>,
}

impl Config {
    /// Resolve the root directory, load `.oxicleanrc.json` and build the effective options
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, searching for git root");
            oxiclean_core::find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        let rc = oxiclean_core::load_rc_file(&root)?;
        let rule_options = self.merge_rule_options(rc.rule_options(RULE_NAME));
        debug!("Rule options after CLI merge: {:?}", rule_options);
        self.options = Some(resolve_options(&rule_options, &rc.settings)?);

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// Get the effective options, returning an error if not initialized
    pub fn options(&self) -> Result<&FileExtensionOptions> {
        self.options
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    /// Layers command-line flags over the positional options from the rc file.
    fn merge_rule_options(&self, mut rule_options: Vec<Value>) -> Vec<Value> {
        if let Some(style) = self.style {
            let style = Value::String(style.as_str().to_string());
            match rule_options.first_mut() {
                Some(first) => *first = style,
                None => rule_options.push(style),
            }
        }

        if self.overrides.is_empty() && self.try_extensions.is_none() && !self.esm {
            return rule_options;
        }

        if rule_options.is_empty() {
            rule_options.push(Value::Null);
        }
        if !rule_options.get(1).is_some_and(Value::is_object) {
            rule_options.truncate(1);
            rule_options.push(Value::Object(Map::new()));
        }
        let Some(Value::Object(second)) = rule_options.get_mut(1) else {
            return rule_options;
        };

        for (ext, style) in &self.overrides {
            second.insert(ext.clone(), Value::String(style.as_str().to_string()));
        }
        if let Some(exts) = &self.try_extensions {
            second.insert(
                "tryExtensions".to_string(),
                Value::Array(exts.iter().cloned().map(Value::String).collect()),
            );
        }
        if self.esm {
            second.insert("esm".to_string(), Value::Bool(true));
        }
        rule_options
    }
}

fn parse_override(raw: &str) -> Result<(String, Style), String> {
    let (ext, style) =
        raw.split_once('=').ok_or_else(|| format!("expected EXT=STYLE, got '{}'", raw))?;
    let style = Style::parse(style.trim())
        .ok_or_else(|| format!("invalid style '{}', expected always or never", style))?;
    Ok((ext.trim().to_string(), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["file-extension-in-import"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override(".json=never"), Ok((".json".to_string(), Style::Never)));
        assert!(parse_override(".json").is_err());
        assert!(parse_override(".json=maybe").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cfg = parse(&[
            "--style",
            "never",
            "--override",
            ".json=always",
            "--try-extensions",
            ".ts,.js",
            "--esm",
            "--fix",
        ]);
        assert_eq!(cfg.style, Some(Style::Never));
        assert_eq!(cfg.overrides, vec![(".json".to_string(), Style::Always)]);
        assert_eq!(cfg.try_extensions, Some(vec![".ts".to_string(), ".js".to_string()]));
        assert!(cfg.esm);
        assert!(cfg.fix);
    }

    #[test]
    fn test_merge_without_flags_keeps_rc_options() {
        let cfg = parse(&[]);
        let rc = vec![json!("never"), json!({ ".js": "always" })];
        assert_eq!(cfg.merge_rule_options(rc.clone()), rc);
    }

    #[test]
    fn test_merge_flags_over_rc_options() {
        let cfg = parse(&["--style", "always", "--override", ".json=never", "--esm"]);
        let rc = vec![json!("never"), json!({ ".js": "never" })];
        let merged = cfg.merge_rule_options(rc);
        assert_eq!(merged[0], json!("always"));
        assert_eq!(merged[1], json!({ ".js": "never", ".json": "never", "esm": true }));
    }

    #[test]
    fn test_merge_flags_without_rc_options() {
        let cfg = parse(&["--try-extensions", ".mjs"]);
        let merged = cfg.merge_rule_options(Vec::new());
        assert_eq!(merged, vec![Value::Null, json!({ "tryExtensions": [".mjs"] })]);
        let options = resolve_options(&merged, &Value::Null).unwrap();
        assert_eq!(options.default_style, Style::Always);
        assert_eq!(options.try_extensions, vec![".mjs"]);
    }

    #[test]
    fn test_initialize_reads_rc_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(oxiclean_core::RC_FILE),
            r#"{ "settings": { "node": { "esm": true } }, "rules": { "file-extension-in-import": ["never"] } }"#,
        )
        .unwrap();

        let mut cfg = parse(&["--root", temp_dir.path().to_str().unwrap()]);
        cfg.initialize().unwrap();
        let options = cfg.options().unwrap();
        assert_eq!(options.default_style, Style::Never);
        assert!(options.esm);
        assert!(cfg.root().is_ok());
    }

    #[test]
    fn test_initialize_rejects_invalid_override() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(oxiclean_core::RC_FILE),
            r#"{ "rules": { "file-extension-in-import": ["always", { ".js": "sometimes" }] } }"#,
        )
        .unwrap();

        let mut cfg = parse(&["--root", temp_dir.path().to_str().unwrap()]);
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_uninitialized_config_errors() {
        let cfg = parse(&[]);
        assert!(cfg.root().is_err());
        assert!(cfg.options().is_err());
    }
}
