use std::{
    io::Write,
    process::{Command, Stdio},
};

use tracing::{debug, warn};

use crate::{
    config::FrontendSettings,
    error::FrontendError,
    frontend::{
        FrontEnd, TranslationUnit,
        clang_nodes::Node,
        diagnostics::{FrontendDiagnostic, parse_diagnostics},
    },
};

/// File name clang reports for a unit read from stdin.
pub const STDIN_FILE: &str = "<stdin>";

/// Build the clang argument list for an AST dump of stdin.
pub fn clang_args(settings: &FrontendSettings) -> Vec<String> {
    let mut args = vec!["-x".to_string(), settings.language.as_clang_arg().to_string()];
    if let Some(std) = &settings.std {
        args.push(format!("-std={std}"));
    }
    args.extend(settings.extra_flags.iter().cloned());
    args.extend(
        ["-fsyntax-only", "-fno-color-diagnostics", "-Xclang", "-ast-dump=json", "-"].into_iter().map(str::to_string),
    );
    args
}

/// Runs the system clang on in-memory source and deserializes its JSON AST
/// dump.
///
/// The source is piped on stdin, so no temporary file is created and no
/// include paths beyond clang's defaults are in effect.
pub struct ClangFrontEnd {
    settings: FrontendSettings,
}

impl ClangFrontEnd {
    pub fn new(settings: FrontendSettings) -> Self {
        Self {
            settings,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.settings.clang_path);
        command.args(clang_args(&self.settings)).stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());
        command
    }

    fn describe(&self) -> String {
        self.settings.clang_path.clone()
    }
}

impl FrontEnd for ClangFrontEnd {
    fn parse(
        &self,
        source: &str,
    ) -> Result<TranslationUnit, FrontendError> {
        debug!("AST dump: {} {}", self.settings.clang_path, clang_args(&self.settings).join(" "));

        let mut child = self.command().spawn().map_err(|e| FrontendError::LaunchFailed {
            command: self.describe(),
            reason: e.to_string(),
        })?;

        // clang reads all of stdin before emitting anything, so writing first
        // cannot deadlock against a full stdout pipe.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(source.as_bytes())
        {
            // clang may exit early on a bad flag; its stderr says why.
            debug!("[ast-dump] failed to write source to clang: {e}");
        }

        let output = child.wait_with_output().map_err(|e| FrontendError::LaunchFailed {
            command: self.describe(),
            reason: e.to_string(),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = parse_diagnostics(&stderr);
        log_diagnostics(&diagnostics);

        if !output.status.success() {
            debug!("[ast-dump] exited with {} (partial AST may still be usable)", output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.is_empty() || !stdout.starts_with('{') {
            warn!("[ast-dump] produced no usable JSON");
            return Err(FrontendError::NoAst {
                command: self.describe(),
            });
        }
        debug!("[ast-dump] produced {} bytes of JSON", stdout.len());

        let root: Node = serde_json::from_str(&stdout).map_err(|e| FrontendError::MalformedAst(e.to_string()))?;

        Ok(TranslationUnit {
            root,
            main_file: STDIN_FILE.to_string(),
            diagnostics,
        })
    }
}

fn log_diagnostics(diagnostics: &[FrontendDiagnostic]) {
    for diag in diagnostics {
        if diag.is_error() {
            warn!("[ast-dump] {}:{}:{}: {}", diag.file, diag.line, diag.column, diag.message);
        } else {
            debug!("[ast-dump] {}:{}:{}: {:?}: {}", diag.file, diag.line, diag.column, diag.severity, diag.message);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/frontend/compiler_tests.rs"]
mod tests;
