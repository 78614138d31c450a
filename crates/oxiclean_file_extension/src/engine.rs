//! Decides, per import target, which extension its specifier should carry.
//!
//! The canonical extension is the extension of the resolved file when it has
//! one, otherwise the only TypeScript sibling (`.ts`, `.tsx`, `.d.ts`),
//! otherwise the only sibling of any kind. When none of these is unique the
//! target is skipped.

use log::trace;
use oxiclean_core::ImportTarget;

use crate::{
    inventory::list_sibling_extensions,
    options::FileExtensionOptions,
    specifier::{extname, is_core_module_override, is_package_name},
    types::{Decision, FixEdit, Style, Violation, ViolationKind},
};

const TYPESCRIPT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".d.ts"];

/// TypeScript source extension -> extension it is imported by under ESM.
const ESM_RUNTIME_EXTENSIONS: &[(&str, &str)] = &[
    (".ts", ".js"),
    (".tsx", ".js"),
    (".d.ts", ".js"),
    (".mts", ".mjs"),
    (".cts", ".cjs"),
];

pub fn decide(target: &ImportTarget, options: &FileExtensionOptions) -> Decision {
    let name = target.specifier.as_str();
    let Some(resolved) = target.resolved.as_deref() else {
        return Decision::NoViolation;
    };
    if is_package_name(name) || is_core_module_override(name) {
        trace!("Skipping package or builtin specifier '{}'", name);
        return Decision::NoViolation;
    }

    let resolved_text = resolved.to_string_lossy();
    let original_ext = extname(name);
    let resolved_ext = extname(&resolved_text);

    let existing_exts = list_sibling_extensions(resolved);
    let typescript_exts: Vec<&String> =
        existing_exts.iter().filter(|e| TYPESCRIPT_EXTENSIONS.contains(&e.as_str())).collect();

    let found_ext = if !resolved_ext.is_empty() {
        resolved_ext.to_string()
    } else if typescript_exts.len() == 1 {
        typescript_exts[0].clone()
    } else if existing_exts.len() == 1 {
        existing_exts[0].clone()
    } else {
        trace!("Ambiguous extension for '{}': siblings {:?}", name, existing_exts);
        return Decision::NoViolation;
    };

    let ext = if options.esm { esm_runtime_extension(found_ext) } else { found_ext };

    match options.style_for(&ext) {
        Style::Always if ext != original_ext => {
            // Insert right before the closing quote.
            let fix = FixEdit::Insert { offset: target.span.end - 1, text: ext.clone() };
            let violation = violation(target, ViolationKind::RequireExtension, ext);
            Decision::ViolationWithFix { violation, fix }
        }
        Style::Never if ext == original_ext => {
            let fix = if existing_exts.len() == 1 { removal(target, &ext) } else { None };
            let violation = violation(target, ViolationKind::ForbidExtension, ext);
            match fix {
                Some(fix) => Decision::ViolationWithFix { violation, fix },
                None => Decision::ViolationWithoutFix(violation),
            }
        }
        _ => Decision::NoViolation,
    }
}

fn esm_runtime_extension(ext: String) -> String {
    ESM_RUNTIME_EXTENSIONS
        .iter()
        .find(|(source, _)| *source == ext)
        .map_or(ext, |(_, runtime)| runtime.to_string())
}

fn violation(target: &ImportTarget, kind: ViolationKind, extension: String) -> Violation {
    Violation { kind, extension, span: target.span }
}

/// Removes the last occurrence of `ext` in the specifier, offset past the opening quote.
fn removal(target: &ImportTarget, ext: &str) -> Option<FixEdit> {
    let index = u32::try_from(target.specifier.rfind(ext)?).ok()?;
    let start = target.span.start + 1 + index;
    let end = start + u32::try_from(ext.len()).ok()?;
    Some(FixEdit::Remove { start, end, text: ext.to_string() })
}
