use log::{debug, trace};
use oxiclean_core::DEFAULT_TRY_EXTENSIONS;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::Style;

const TRY_EXTENSIONS_KEY: &str = "tryExtensions";
const ESM_KEY: &str = "esm";

/// Keys under `settings` that may hold shared node settings, in lookup order.
const SHARED_SETTINGS_KEYS: &[&str] = &["n", "node"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("invalid style {value} for extension '{extension}', expected \"always\" or \"never\"")]
    InvalidOverride { extension: String, value: String },
    #[error("invalid entry {0} in `tryExtensions`, expected a string")]
    InvalidTryExtension(String),
}

/// Effective configuration for one analysis session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtensionOptions {
    pub default_style: Style,
    /// Keyed by dotted extension, e.g. `.js`.
    pub overrides: HashMap<String, Style>,
    pub try_extensions: Vec<String>,
    pub esm: bool,
}

impl FileExtensionOptions {
    pub fn style_for(&self, ext: &str) -> Style {
        self.overrides.get(ext).copied().unwrap_or(self.default_style)
    }
}

impl Default for FileExtensionOptions {
    fn default() -> Self {
        Self {
            default_style: Style::Always,
            overrides: HashMap::new(),
            try_extensions: default_try_extensions(),
            esm: false,
        }
    }
}

/// Builds the effective options from the rule's positional options and the shared settings.
///
/// Each of `tryExtensions` and `esm` falls back independently: rule option,
/// then shared setting, then the built-in default.
pub fn resolve_options(
    rule_options: &[Value],
    settings: &Value,
) -> Result<FileExtensionOptions, OptionsError> {
    let default_style = rule_options
        .first()
        .and_then(Value::as_str)
        .and_then(Style::parse)
        .unwrap_or(Style::Always);

    let empty = Map::new();
    let override_option = rule_options.get(1).and_then(Value::as_object).unwrap_or(&empty);

    let mut overrides = HashMap::new();
    for (key, value) in override_option {
        if key == TRY_EXTENSIONS_KEY || key == ESM_KEY {
            continue;
        }
        let style = value.as_str().and_then(Style::parse).ok_or_else(|| {
            OptionsError::InvalidOverride { extension: key.clone(), value: value.to_string() }
        })?;
        trace!("Override: '{}' -> {}", key, style.as_str());
        overrides.insert(normalize_extension(key), style);
    }

    let try_extensions = match override_option.get(TRY_EXTENSIONS_KEY).and_then(Value::as_array) {
        Some(list) => string_list(list)?,
        None => match shared_setting(settings, TRY_EXTENSIONS_KEY).and_then(Value::as_array) {
            Some(list) => string_list(list)?,
            None => default_try_extensions(),
        },
    };

    let esm = is_true(override_option.get(ESM_KEY))
        || is_true(shared_setting(settings, ESM_KEY));

    debug!(
        "Resolved options: style={}, overrides={}, tryExtensions={:?}, esm={}",
        default_style.as_str(),
        overrides.len(),
        try_extensions,
        esm
    );
    Ok(FileExtensionOptions { default_style, overrides, try_extensions, esm })
}

fn shared_setting<'a>(settings: &'a Value, key: &str) -> Option<&'a Value> {
    SHARED_SETTINGS_KEYS.iter().find_map(|ns| settings.get(ns).and_then(|s| s.get(key)))
}

fn is_true(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

fn string_list(list: &[Value]) -> Result<Vec<String>, OptionsError> {
    list.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| OptionsError::InvalidTryExtension(v.to_string()))
        })
        .collect()
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') { ext.to_string() } else { format!(".{}", ext) }
}

fn default_try_extensions() -> Vec<String> {
    DEFAULT_TRY_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}
