use anyhow::Result;
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::{JS_TS_EXTENSIONS, SKIPPED_DIRS};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Substring the root-relative path must contain.
    pub glob: Option<String>,
}

/// Collects every JS/TS source file under the root, honoring ignore files.
pub fn collect_sources(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(true)
        .git_ignore(true)
        .filter_entry(|dent| !is_skipped_dir(dent))
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !JS_TS_EXTENSIONS.contains(&ext) {
            continue;
        }

        if let Some(gl) = &cfg.glob
            && !matches_glob(root, p, gl)
        {
            trace!("Skipping {} (does not match '{}')", p.display(), gl);
            continue;
        }

        trace!("Found source file: {}", p.display());
        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}

fn is_skipped_dir(dent: &DirEntry) -> bool {
    dent.file_type().is_some_and(|ft| ft.is_dir())
        && dent.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn matches_glob(root: &Path, p: &Path, gl: &str) -> bool {
    p.strip_prefix(root).map(|rel| rel.to_string_lossy().contains(gl)).unwrap_or(false)
}
