//! Boundary to the compiler front end that parses and analyzes the source.

pub mod clang_nodes;
mod compiler;
mod diagnostics;

pub use clang_nodes::{Clang, Node};
pub use compiler::{ClangFrontEnd, STDIN_FILE, clang_args};
pub use diagnostics::{FrontendDiagnostic, Severity, parse_diagnostics};

use crate::error::FrontendError;

/// A fully analyzed compilation unit.
pub struct TranslationUnit {
    /// Root of the declaration tree (a `TranslationUnitDecl`).
    pub root: Node,
    /// File identity the front end assigned to the in-memory source.
    pub main_file: String,
    pub diagnostics: Vec<FrontendDiagnostic>,
}

/// Something that turns source text into a declaration tree.
pub trait FrontEnd {
    fn parse(
        &self,
        source: &str,
    ) -> Result<TranslationUnit, FrontendError>;
}
