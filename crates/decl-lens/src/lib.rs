pub mod config;
pub mod driver;
pub mod error;
pub mod frontend;
pub mod report;

#[cfg(test)]
#[path = "../tests/src/fake_tree.rs"]
pub(crate) mod fake_tree;

pub use config::ToolSettings;
pub use driver::{RunSummary, report_tree, run};
pub use error::{FrontendError, ReportError};
pub use frontend::{ClangFrontEnd, FrontEnd, TranslationUnit};
pub use report::{DeclKind, DeclNode, DeclarationReporter, SourceLoc, SourceManager, SourceSpan, SpanResolver, TreeWalker};
