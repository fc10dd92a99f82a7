//! Declaration reporting: span resolution, line formatting, tree walking.

mod node;
mod reporter;
mod span;
mod walker;

pub use node::{DeclKind, DeclNode, SourceLoc};
pub use reporter::{DeclarationReporter, format_line};
pub use span::{SourceManager, SourceSpan, SpanResolver};
pub use walker::TreeWalker;
