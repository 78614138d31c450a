use regex::Regex;
use std::sync::LazyLock;

/// `name` or `@scope/name`: a single package segment with no subpath.
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@[^/\\]+[/\\])?[^/\\]+$").expect("valid regex"));

/// Node.js builtins written with a trailing slash (`fs/`), which force the builtin.
static CORE_MODULE_OVERRIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:assert|async_hooks|buffer|child_process|cluster|console|constants|crypto|dgram|diagnostics_channel|dns|domain|events|fs|http|http2|https|inspector|module|net|os|path|perf_hooks|process|punycode|querystring|readline|repl|stream|string_decoder|sys|timers|tls|trace_events|tty|url|util|v8|vm|wasi|worker_threads|zlib)[/\\]$",
    )
    .expect("valid regex")
});

pub fn is_package_name(specifier: &str) -> bool {
    PACKAGE_NAME.is_match(specifier)
}

pub fn is_core_module_override(specifier: &str) -> bool {
    CORE_MODULE_OVERRIDE.is_match(specifier)
}

/// Extension of the last path segment, dot included.
///
/// Trailing separators are ignored, dotfiles have no extension and a name
/// ending in `.` has the extension `.`.
pub fn extname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    let base_start = trimmed.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let base = &trimmed[base_start..];
    if base == ".." {
        return "";
    }
    match base.rfind('.') {
        None | Some(0) => "",
        Some(i) => &base[i..],
    }
}
