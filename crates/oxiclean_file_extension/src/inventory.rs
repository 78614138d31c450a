use std::{fs, path::Path};

use crate::specifier::extname;

/// Lists the extensions of every file next to `resolved` that shares its basename.
///
/// For `/src/foo.js` with `foo.js`, `foo.d.ts` and `foobar.js` on disk this
/// yields `.js` and `.d.ts` in directory-listing order. An unreadable
/// directory yields nothing.
pub fn list_sibling_extensions(resolved: &Path) -> Vec<String> {
    let Some(file_name) = resolved.file_name().map(|n| n.to_string_lossy()) else {
        return Vec::new();
    };
    let basename = &file_name[..file_name.len() - extname(&file_name).len()];
    let prefix = format!("{}.", basename);
    let directory = resolved.parent().unwrap_or(Path::new("."));

    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            name.starts_with(&prefix).then(|| name[basename.len()..].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sorted(mut exts: Vec<String>) -> Vec<String> {
        exts.sort();
        exts
    }

    #[test]
    fn test_lists_same_basename_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["foo.js", "foo.d.ts", "foobar.js", "bar.js", "foo"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let exts = list_sibling_extensions(&dir.join("foo.js"));
        assert_eq!(sorted(exts), vec![".d.ts", ".js"]);
    }

    #[test]
    fn test_extensionless_resolved_path() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["foo", "foo.js", "foo.json"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let exts = list_sibling_extensions(&dir.join("foo"));
        assert_eq!(sorted(exts), vec![".js", ".json"]);
    }

    #[test]
    fn test_dotted_basename() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["jquery.min.js", "jquery.js"] {
            fs::write(dir.join(name), "").unwrap();
        }

        let exts = list_sibling_extensions(&dir.join("jquery.min.js"));
        assert_eq!(exts, vec![".js"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let exts = list_sibling_extensions(&temp_dir.path().join("nope").join("foo.js"));
        assert!(exts.is_empty());
    }
}
