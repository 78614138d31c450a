use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Name of the project-level configuration file looked up at the root.
pub const RC_FILE: &str = ".oxicleanrc.json";

/// Contents of `.oxicleanrc.json`.
///
/// `settings` is shared between rules; `rules` maps a rule name to its
/// positional options array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RcFile {
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub rules: Map<String, Value>,
}

impl RcFile {
    /// Positional options configured for `rule`, empty when absent or not an array.
    pub fn rule_options(&self, rule: &str) -> Vec<Value> {
        match self.rules.get(rule) {
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
            None => Vec::new(),
        }
    }
}

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Loads `.oxicleanrc.json` from `root`. A missing file yields the default (empty) config.
pub fn load_rc_file(root: &Path) -> Result<RcFile> {
    let path = root.join(RC_FILE);
    if !path.is_file() {
        debug!("No {} found at {}", RC_FILE, root.display());
        return Ok(RcFile::default());
    }

    trace!("Reading rc file at: {:?}", path);
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let rc: RcFile = serde_json::from_str(&strip_line_comments(&content))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded {} rule entries from {}", rc.rules.len(), path.display());
    Ok(rc)
}

// Simple approach: drops everything after `//` outside of string literals.
fn strip_line_comments(content: &str) -> String {
    content.lines().map(strip_line_comment).collect::<Vec<_>>().join("\n")
}

fn strip_line_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
    }
    line
}
