use clap::ValueEnum;
use oxc_span::Span;
use oxiclean_core::SpecKind;

/// Whether a specifier must carry its file extension or must omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Style {
    Always,
    Never,
}

impl Style {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(Style::Always),
            "never" => Some(Style::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Always => "always",
            Style::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    RequireExtension,
    ForbidExtension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub extension: String,
    /// Span of the specifier literal, quotes included.
    pub span: Span,
}

impl Violation {
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::RequireExtension => {
                format!("require file extension '{}'.", self.extension)
            }
            ViolationKind::ForbidExtension => {
                format!("forbid file extension '{}'.", self.extension)
            }
        }
    }
}

/// A textual edit over byte offsets of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixEdit {
    Insert { offset: u32, text: String },
    /// `text` is what `start..end` is expected to contain.
    Remove { start: u32, end: u32, text: String },
}

impl FixEdit {
    pub fn start(&self) -> u32 {
        match self {
            FixEdit::Insert { offset, .. } => *offset,
            FixEdit::Remove { start, .. } => *start,
        }
    }

    pub fn end(&self) -> u32 {
        match self {
            FixEdit::Insert { offset, .. } => *offset,
            FixEdit::Remove { end, .. } => *end,
        }
    }
}

/// Outcome of checking a single import target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NoViolation,
    ViolationWithFix { violation: Violation, fix: FixEdit },
    ViolationWithoutFix(Violation),
}

impl Decision {
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Decision::NoViolation => None,
            Decision::ViolationWithFix { violation, .. } => Some(violation),
            Decision::ViolationWithoutFix(violation) => Some(violation),
        }
    }

    pub fn fix(&self) -> Option<&FixEdit> {
        match self {
            Decision::ViolationWithFix { fix, .. } => Some(fix),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    /// File path relative to the project root
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub specifier: String,
    /// Syntax the specifier appeared in.
    pub construct: SpecKind,
    pub violation: Violation,
    pub fixable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub reports: Vec<Report>,
    pub files_analyzed: usize,
    pub fixes_applied: usize,
}
