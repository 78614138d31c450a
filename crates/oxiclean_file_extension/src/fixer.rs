use log::{debug, warn};

use crate::types::FixEdit;

const QUOTES: &[u8] = b"'\"`";

/// Applies `fixes` to `src` back to front, returning the new text and how many edits were applied.
///
/// An edit is skipped when it overlaps an edit already applied or when the
/// text it targets is not what the edit expects.
pub fn apply_fixes(src: &str, fixes: &[FixEdit]) -> (String, usize) {
    let mut ordered: Vec<&FixEdit> = fixes.iter().collect();
    ordered.sort_by(|a, b| b.start().cmp(&a.start()).then(b.end().cmp(&a.end())));

    let mut out = src.to_string();
    let mut applied = 0;
    let mut boundary: Option<u32> = None;

    for fix in ordered {
        if let Some(b) = boundary
            && (fix.end() > b || fix.start() == b)
        {
            debug!("Skipping overlapping fix at {}..{}", fix.start(), fix.end());
            continue;
        }
        if !is_safe(src, fix) {
            warn!("Skipping fix at {}..{}: source text does not match", fix.start(), fix.end());
            continue;
        }

        match fix {
            FixEdit::Insert { offset, text } => out.insert_str(*offset as usize, text),
            FixEdit::Remove { start, end, .. } => {
                out.replace_range(*start as usize..*end as usize, "");
            }
        }
        boundary = Some(fix.start());
        applied += 1;
    }

    (out, applied)
}

fn is_safe(src: &str, fix: &FixEdit) -> bool {
    match fix {
        FixEdit::Insert { offset, .. } => {
            src.as_bytes().get(*offset as usize).is_some_and(|b| QUOTES.contains(b))
        }
        FixEdit::Remove { start, end, text } => {
            src.get(*start as usize..*end as usize) == Some(text.as_str())
        }
    }
}
