use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::{
    config::RULE_NAME,
    types::{CheckResult, Report, ViolationKind},
};

pub fn print_no_violations_message<W: Write>(
    writer: &mut W,
    result: &CheckResult,
) -> io::Result<()> {
    debug!("No file extension violations");
    writeln!(
        writer,
        "{} All import specifiers follow the extension policy.",
        "✓".green().bold()
    )?;
    if result.fixes_applied > 0 {
        writeln!(writer, "  Fixed {} specifiers.", result.fixes_applied.to_string().green())?;
    }
    writer.flush()?;
    Ok(())
}

/// Prints reports grouped by file, in the order they were produced.
pub fn print_reports<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    debug!("Printing {} reports", result.reports.len());

    let mut current_file: Option<&str> = None;
    for report in &result.reports {
        if current_file != Some(report.file.as_str()) {
            if current_file.is_some() {
                writeln!(writer)?;
            }
            writeln!(writer, "{}", report.file.bright_white().bold())?;
            current_file = Some(report.file.as_str());
        }
        writeln!(writer, "  {}", format_report(report))?;
    }
    writeln!(writer)?;

    print_summary(writer, result)?;
    writer.flush()?;
    Ok(())
}

fn format_report(report: &Report) -> String {
    let location = format!("{}:{}", report.line, report.column);
    let kind = match report.violation.kind {
        ViolationKind::RequireExtension => "require".yellow(),
        ViolationKind::ForbidExtension => "forbid".magenta(),
    };
    let fixable = if report.fixable { " (fixable)".green().to_string() } else { String::new() };
    format!(
        "{:<8} {} {} {} '{}'  {}{}",
        location.dimmed(),
        kind,
        report.violation.message(),
        report.construct.as_str().cyan(),
        report.specifier,
        RULE_NAME.dimmed(),
        fixable
    )
}

fn print_summary<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let fixable = result.reports.iter().filter(|r| r.fixable).count();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Total violations: {}", result.reports.len().to_string().yellow().bold())?;
    if fixable > 0 {
        writeln!(writer, "  Fixable with --fix: {}", fixable.to_string().green())?;
    }
    if result.fixes_applied > 0 {
        writeln!(writer, "  Fixed: {}", result.fixes_applied.to_string().green())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Violation;
    use oxc_span::Span;
    use oxiclean_core::SpecKind;

    fn report(file: &str, line: usize, kind: ViolationKind, fixable: bool) -> Report {
        Report {
            file: file.to_string(),
            line,
            column: 17,
            specifier: "./foo".to_string(),
            construct: SpecKind::Require,
            violation: Violation { kind, extension: ".js".to_string(), span: Span::new(16, 23) },
            fixable,
        }
    }

    fn render(result: &CheckResult) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_reports(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reports_grouped_by_file() {
        let result = CheckResult {
            reports: vec![
                report("src/a.js", 1, ViolationKind::RequireExtension, true),
                report("src/a.js", 4, ViolationKind::RequireExtension, true),
                report("src/b.js", 2, ViolationKind::ForbidExtension, false),
            ],
            files_analyzed: 2,
            fixes_applied: 0,
        };
        let out = render(&result);

        assert_eq!(out.matches("src/a.js").count(), 1);
        assert_eq!(out.matches("src/b.js").count(), 1);
        assert!(out.contains("require file extension '.js'."));
        assert!(out.contains("forbid file extension '.js'."));
        assert!(out.contains("4:17"));
        assert!(out.contains("require file extension '.js'. require './foo'"));
        assert!(out.contains("Total violations: 3"));
        assert!(out.contains("Fixable with --fix: 2"));
    }

    #[test]
    fn test_no_violations_message() {
        colored::control::set_override(false);
        let result = CheckResult { fixes_applied: 3, ..Default::default() };
        let mut out = Vec::new();
        print_no_violations_message(&mut out, &result).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("All import specifiers follow the extension policy."));
        assert!(out.contains("Fixed 3 specifiers."));
    }
}
