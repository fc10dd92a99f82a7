use once_cell::sync::Lazy;
use regex::Regex;

static DIAGNOSTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?):(\d+):(\d+):\s*(fatal error|error|warning|note|remark):\s*(.*)$")
        .expect("diagnostic pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// A diagnostic clang printed while building the tree.
///
/// These are logged and counted, never turned into tool failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendDiagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
}

impl FrontendDiagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Parse clang's stderr into diagnostics, skipping caret and source lines.
pub fn parse_diagnostics(output: &str) -> Vec<FrontendDiagnostic> {
    output.lines().filter_map(parse_diagnostic_line).collect()
}

/// Expected format: `filename:line:column: severity: message`
fn parse_diagnostic_line(line: &str) -> Option<FrontendDiagnostic> {
    let caps = DIAGNOSTIC_RE.captures(line)?;

    let file = caps.get(1)?.as_str().to_owned();
    let line_num: u32 = caps.get(2)?.as_str().parse().ok()?;
    let column: u32 = caps.get(3)?.as_str().parse().ok()?;
    let severity = match caps.get(4)?.as_str() {
        "error" | "fatal error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Note,
    };
    let message = caps.get(5)?.as_str().to_string();

    Some(FrontendDiagnostic {
        file,
        line: line_num,
        column,
        severity,
        message,
    })
}

#[cfg(test)]
#[path = "../../tests/src/frontend/diagnostics_tests.rs"]
mod tests;
