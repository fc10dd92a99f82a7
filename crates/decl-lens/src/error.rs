use std::fmt::{Display, Formatter};

/// Failures while obtaining a declaration tree from the compiler front end.
#[derive(Debug)]
pub enum FrontendError {
    /// The compiler executable could not be spawned or fed its input.
    LaunchFailed {
        command: String,
        reason: String,
    },
    /// The compiler ran but produced no AST dump on stdout.
    NoAst {
        command: String,
    },
    /// The AST dump was not valid Clang JSON.
    MalformedAst(String),
}

impl Display for FrontendError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::LaunchFailed {
                command,
                reason,
            } => write!(f, "failed to launch {command}: {reason}"),
            Self::NoAst {
                command,
            } => write!(f, "{command} produced no AST dump"),
            Self::MalformedAst(reason) => write!(f, "malformed AST dump: {reason}"),
        }
    }
}

impl std::error::Error for FrontendError {}

/// Errors that abort a reporting run.
///
/// Locations that cannot be mapped to the main file are not errors; the
/// span resolver filters those nodes out.
#[derive(Debug)]
pub enum ReportError {
    /// The walker was handed something other than a translation unit root.
    InvalidTree(String),
    Frontend(FrontendError),
    /// Writing to the output sink failed.
    Io(std::io::Error),
}

impl Display for ReportError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::InvalidTree(reason) => write!(f, "invalid declaration tree: {reason}"),
            Self::Frontend(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTree(_) => None,
            Self::Frontend(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<FrontendError> for ReportError {
    fn from(err: FrontendError) -> Self {
        Self::Frontend(err)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
