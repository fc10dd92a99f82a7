use std::io::Write;

use tracing::{debug, info};

use crate::{
    config::ToolSettings,
    error::ReportError,
    frontend::FrontEnd,
    report::{DeclNode, DeclarationReporter, SourceManager, SpanResolver, TreeWalker},
};

/// What one run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Declaration lines written.
    pub reported: usize,
    /// Declarations skipped because they start outside the main file.
    pub filtered: usize,
    /// Diagnostics the front end printed.
    pub diagnostics: usize,
}

/// Walk `root` and write a line per main-file declaration to `out`.
pub fn report_tree<N, W>(
    root: &N,
    source_manager: &SourceManager,
    show_locations: bool,
    out: W,
) -> Result<RunSummary, ReportError>
where
    N: DeclNode,
    W: Write,
{
    let resolver = SpanResolver::new(source_manager);
    let mut reporter = DeclarationReporter::new(out, resolver).with_locations(show_locations);
    TreeWalker::walk(root, |node| reporter.report(node).map(|_| ()))?;

    Ok(RunSummary {
        reported: reporter.reported(),
        filtered: reporter.filtered(),
        diagnostics: 0,
    })
}

/// Analyze `source` with `frontend` and report its declarations.
///
/// No source means nothing to do. Front-end diagnostics are counted but do
/// not fail the run.
pub fn run<F, W>(
    source: Option<&str>,
    frontend: &F,
    settings: &ToolSettings,
    mut out: W,
) -> Result<RunSummary, ReportError>
where
    F: FrontEnd,
    W: Write,
{
    let Some(source) = source else {
        debug!("No source given, nothing to report");
        return Ok(RunSummary::default());
    };

    let unit = frontend.parse(source)?;
    info!(
        "Front end built a tree with {} top-level nodes ({} diagnostics)",
        unit.root.inner.len(),
        unit.diagnostics.len()
    );

    let source_manager = SourceManager::new(unit.main_file, settings.frontend.main_file_name.clone());
    let mut summary = report_tree(&unit.root, &source_manager, settings.report.show_locations, &mut out)?;
    out.flush()?;

    summary.diagnostics = unit.diagnostics.len();
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/src/driver_tests.rs"]
mod tests;
