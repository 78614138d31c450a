//! Extension tables shared by collection, parsing and resolution.

/// File extensions for JavaScript/TypeScript files that should be analyzed
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

/// Default extensions tried when a relative request has none on disk.
pub const DEFAULT_TRY_EXTENSIONS: &[&str] = &[".js", ".json", ".node"];

/// Runtime extension -> TypeScript sources that compile to it.
pub const TS_SOURCE_FOR_RUNTIME: &[(&str, &[&str])] = &[
    (".js", &[".ts", ".tsx"]),
    (".jsx", &[".tsx"]),
    (".mjs", &[".mts"]),
    (".cjs", &[".cts"]),
];

/// Directories never walked when collecting sources.
pub const SKIPPED_DIRS: &[&str] = &["node_modules"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_ts_extensions_includes_all_variants() {
        for ext in ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"] {
            assert!(JS_TS_EXTENSIONS.contains(&ext), "missing '{}'", ext);
        }
        assert_eq!(JS_TS_EXTENSIONS.len(), 8);
    }

    #[test]
    fn test_default_try_extensions_are_dotted() {
        assert!(DEFAULT_TRY_EXTENSIONS.iter().all(|e| e.starts_with('.')));
        assert_eq!(DEFAULT_TRY_EXTENSIONS, &[".js", ".json", ".node"]);
    }

    #[test]
    fn test_ts_sources_cover_every_runtime_extension() {
        for (runtime, sources) in TS_SOURCE_FOR_RUNTIME {
            assert!(runtime.starts_with('.'));
            assert!(!sources.is_empty(), "no sources for '{}'", runtime);
        }
    }
}
