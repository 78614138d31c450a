use oxc_span::Span;
use std::path::PathBuf;

/// An import-like construct found in a source file, before resolution.
#[derive(Debug, Clone)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
    /// Span of the string literal, quotes included.
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Static,
    Dynamic,
    Require,
    ReExport,
    /// TypeScript `import x = require('...')`.
    ImportEquals,
}

impl SpecKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecKind::Static => "import",
            SpecKind::Dynamic => "import()",
            SpecKind::Require => "require",
            SpecKind::ReExport => "export from",
            SpecKind::ImportEquals => "import =",
        }
    }
}

/// A specifier paired with the file it resolved to, if any.
#[derive(Debug, Clone)]
pub struct ImportTarget {
    pub specifier: String,
    pub resolved: Option<PathBuf>,
    pub span: Span,
    pub kind: SpecKind,
}
