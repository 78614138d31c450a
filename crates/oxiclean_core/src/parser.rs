use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{Visit, walk};
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

use crate::types::{SpecKind, Specifier};

/// Extracts specifiers from already-loaded source text.
///
/// Every import-like construct is collected wherever it appears, including
/// inside functions and blocks. Type-only imports are kept: their specifiers
/// are written the same way as runtime ones and follow the same policy.
pub fn specifiers_in(file: &Path, src: &str) -> Vec<Specifier> {
    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, .. } = OxcParser::new(&allocator, src, st).parse();

    let mut collector = SpecifierCollector { specs: Vec::new() };
    collector.visit_program(&program);

    debug!("Found {} import specifiers in {}", collector.specs.len(), file.display());
    collector.specs
}

struct SpecifierCollector {
    specs: Vec<Specifier>,
}

impl SpecifierCollector {
    fn push(&mut self, sl: &StringLiteral, kind: SpecKind) {
        trace!("Found {:?} specifier: '{}'", kind, sl.value);
        self.specs.push(Specifier { request: sl.value.to_string(), kind, span: sl.span });
    }
}

impl<'a> Visit<'a> for SpecifierCollector {
    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        self.push(&it.source, SpecKind::Static);
        walk::walk_import_declaration(self, it);
    }

    fn visit_export_named_declaration(&mut self, it: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &it.source {
            self.push(source, SpecKind::ReExport);
        }
        // export const x = require('...')
        walk::walk_export_named_declaration(self, it);
    }

    fn visit_export_all_declaration(&mut self, it: &ExportAllDeclaration<'a>) {
        self.push(&it.source, SpecKind::ReExport);
        walk::walk_export_all_declaration(self, it);
    }

    fn visit_import_expression(&mut self, it: &ImportExpression<'a>) {
        if let Expression::StringLiteral(sl) = &it.source {
            self.push(sl, SpecKind::Dynamic);
        }
        walk::walk_import_expression(self, it);
    }

    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        if let Expression::Identifier(callee_ident) = &it.callee
            && callee_ident.name.as_str() == "require"
            && let Some(Expression::StringLiteral(sl)) =
                it.arguments.first().and_then(|arg| arg.as_expression())
        {
            self.push(sl, SpecKind::Require);
        }
        walk::walk_call_expression(self, it);
    }

    fn visit_ts_import_equals_declaration(&mut self, it: &TSImportEqualsDeclaration<'a>) {
        // import x = require('...')
        if let TSModuleReference::ExternalModuleReference(reference) = &it.module_reference {
            self.push(&reference.expression, SpecKind::ImportEquals);
        }
        walk::walk_ts_import_equals_declaration(self, it);
    }
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    let mut st = SourceType::default()
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")));

    // ESM heuristic - .mjs, .mts are ES modules
    if matches!(ext, Some("mjs") | Some("mts")) {
        st = st.with_module(true);
    }

    st
}
