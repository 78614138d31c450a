use anyhow::{Context, Result, anyhow};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    fs,
    path::Path,
    sync::Arc,
    thread,
};

use oxiclean_core::{CollectorConfig, SpecKind, collect_sources, import_targets_for};

use crate::{
    config::Config,
    engine::decide,
    fixer::apply_fixes,
    options::FileExtensionOptions,
    types::{CheckResult, Decision, FixEdit, Report},
};

/// One violation found in a source text, with the specifier it was found on.
#[derive(Debug, Clone)]
pub struct SourceFinding {
    pub specifier: String,
    pub construct: SpecKind,
    pub decision: Decision,
}

struct FileOutcome {
    reports: Vec<Report>,
    fixes_applied: usize,
}

pub fn run_file_extension_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting file extension check");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting source files with glob: {:?}", cfg.glob);
    let collector_cfg = CollectorConfig { root: root.clone(), glob: cfg.glob.clone() };
    let files = collect_sources(&collector_cfg)?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Found {} source files", files.len());

    let cfg = Arc::new(cfg);

    // Files are independent; targets within a file are checked in order.
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .filter_map(|file| {
            let thread_id = thread::current().id();
            debug!("Thread {:?} processing: {}", thread_id, file.display());

            let cfg = Arc::clone(&cfg);
            match check_file(&root, file, &cfg) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!("Error checking {}: {:#}", file.display(), e);
                    None
                }
            }
        })
        .collect();

    let files_analyzed = outcomes.len();
    let fixes_applied = outcomes.iter().map(|o| o.fixes_applied).sum();
    let mut reports: Vec<Report> = outcomes.into_iter().flat_map(|o| o.reports).collect();
    reports.sort_by(|a, b| (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column)));

    info!(
        "File extension check complete. Found {} violations, applied {} fixes",
        reports.len(),
        fixes_applied
    );
    Ok(CheckResult { reports, files_analyzed, fixes_applied })
}

/// Checks every import target in `src`, returning the ones that violate the policy.
pub fn check_source(file: &Path, src: &str, options: &FileExtensionOptions) -> Vec<SourceFinding> {
    import_targets_for(file, src, &options.try_extensions, options.esm)
        .into_iter()
        .filter_map(|target| {
            let decision = decide(&target, options);
            let violation = decision.violation()?;
            trace!("'{}' in {}: {}", target.specifier, file.display(), violation.message());
            Some(SourceFinding { specifier: target.specifier, construct: target.kind, decision })
        })
        .collect()
}

fn check_file(root: &Path, file: &Path, cfg: &Config) -> Result<FileOutcome> {
    let options = cfg.options()?;
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let findings = check_source(file, &src, options);
    let rel_file = relative_display(root, file);

    let fixes: Vec<FixEdit> = if cfg.fix {
        findings.iter().filter_map(|f| f.decision.fix().cloned()).collect()
    } else {
        Vec::new()
    };
    if fixes.is_empty() {
        return Ok(FileOutcome { reports: to_reports(&rel_file, &src, findings), fixes_applied: 0 });
    }

    let (fixed_src, fixes_applied) = apply_fixes(&src, &fixes);
    if fixes_applied == 0 {
        return Ok(FileOutcome { reports: to_reports(&rel_file, &src, findings), fixes_applied });
    }
    fs::write(file, &fixed_src).with_context(|| format!("Failed to write {}", file.display()))?;
    debug!("Applied {} fixes to {}", fixes_applied, rel_file);

    // Only what is still wrong after fixing gets reported.
    let remaining = check_source(file, &fixed_src, options);
    Ok(FileOutcome { reports: to_reports(&rel_file, &fixed_src, remaining), fixes_applied })
}

fn to_reports(rel_file: &str, src: &str, findings: Vec<SourceFinding>) -> Vec<Report> {
    findings
        .into_iter()
        .filter_map(|finding| {
            let fixable = finding.decision.fix().is_some();
            let violation = finding.decision.violation()?.clone();
            let (line, column) = line_column(src, violation.span.start as usize);
            Some(Report {
                file: rel_file.to_string(),
                line,
                column,
                specifier: finding.specifier,
                construct: finding.construct,
                violation,
                fixable,
            })
        })
        .collect()
}

fn relative_display(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).to_string_lossy().to_string()
}

/// 1-based line and column of a byte offset.
fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let before = src.get(..offset).unwrap_or(src);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}
