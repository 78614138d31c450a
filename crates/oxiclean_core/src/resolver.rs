use log::{debug, trace};
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::TS_SOURCE_FOR_RUNTIME;

/// Resolves a relative or absolute `request` made from `from_file` to a file on disk.
///
/// Bare requests are left unresolved. Directories are not resolved to index
/// files since a directory import has no extension of its own.
pub fn resolve(
    from_file: &Path,
    request: &str,
    try_extensions: &[String],
    esm: bool,
) -> Option<PathBuf> {
    if !(request.starts_with("./") || request.starts_with("../") || request.starts_with('/')) {
        trace!("Not resolving non-relative request '{}'", request);
        return None;
    }
    if names_directory(request) {
        trace!("Not resolving directory request '{}'", request);
        return None;
    }

    let base = from_file.parent().unwrap_or(Path::new("."));
    let p = clean(base.join(request).to_string_lossy().to_string());
    let resolved = resolve_file(Path::new(&p), try_extensions, esm);
    match &resolved {
        Some(r) => debug!("Resolved '{}' from {} to {}", request, from_file.display(), r.display()),
        None => trace!("Failed to resolve '{}' from {}", request, from_file.display()),
    }
    resolved
}

fn resolve_file(p: &Path, try_extensions: &[String], esm: bool) -> Option<PathBuf> {
    if p.is_file() {
        return Some(canonical(p.to_path_buf()));
    }

    for ext in try_extensions {
        let candidate = PathBuf::from(format!("{}{}", p.display(), ext));
        if candidate.is_file() {
            return Some(canonical(candidate));
        }
    }

    // Under ESM, TypeScript sources are imported by their compiled name.
    if esm {
        let text = p.to_string_lossy();
        for (runtime, sources) in TS_SOURCE_FOR_RUNTIME {
            if let Some(stem) = text.strip_suffix(runtime) {
                for source in *sources {
                    let candidate = PathBuf::from(format!("{}{}", stem, source));
                    if candidate.is_file() {
                        trace!("Mapped {} to TypeScript source {}", text, candidate.display());
                        return Some(canonical(candidate));
                    }
                }
            }
        }
    }

    None
}

/// `./dir/`, `./`, `..`, `../..`: forms that can only mean a directory.
fn names_directory(request: &str) -> bool {
    if request.ends_with(['/', '\\']) {
        return true;
    }
    let last = request.rsplit(['/', '\\']).next().unwrap_or(request);
    last == "." || last == ".."
}

fn canonical(p: PathBuf) -> PathBuf {
    p.canonicalize().unwrap_or(p)
}
