use log::debug;
use std::path::Path;

use crate::{parser::specifiers_in, resolver::resolve, types::ImportTarget};

/// Enumerates every import-like construct in `src` and resolves each one from `file`.
pub fn import_targets_for(
    file: &Path,
    src: &str,
    try_extensions: &[String],
    esm: bool,
) -> Vec<ImportTarget> {
    let targets: Vec<ImportTarget> = specifiers_in(file, src)
        .into_iter()
        .map(|spec| ImportTarget {
            resolved: resolve(file, &spec.request, try_extensions, esm),
            specifier: spec.request,
            span: spec.span,
            kind: spec.kind,
        })
        .collect();

    debug!(
        "{} of {} import targets resolved in {}",
        targets.iter().filter(|t| t.resolved.is_some()).count(),
        targets.len(),
        file.display()
    );
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpecKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_targets_carry_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("foo.js"), "").unwrap();
        let main = root.join("main.js");
        let src = "import foo from './foo';\nconst x = require('lodash');\nimport('./missing');";
        fs::write(&main, src).unwrap();

        let targets = import_targets_for(&main, src, &[".js".to_string()], false);
        assert_eq!(targets.len(), 3);

        assert_eq!(targets[0].specifier, "./foo");
        assert!(targets[0].resolved.as_ref().unwrap().ends_with("foo.js"));

        assert_eq!(targets[1].specifier, "lodash");
        assert_eq!(targets[1].kind, SpecKind::Require);
        assert!(targets[1].resolved.is_none());

        assert_eq!(targets[2].kind, SpecKind::Dynamic);
        assert!(targets[2].resolved.is_none());
    }
}
