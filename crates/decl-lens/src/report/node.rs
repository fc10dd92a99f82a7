use std::{borrow::Cow, sync::Arc};

/// A location resolved to a concrete file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLoc {
    /// File identity as the front end names it.
    pub file: Arc<str>,
    /// Zero-based byte offset into `file`.
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

/// Declaration category, carrying the fields its report line prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind<'a> {
    Function {
        name: &'a str,
        ty: &'a str,
    },
    ParmVar {
        name: &'a str,
        ty: &'a str,
    },
    Record {
        tag: Cow<'a, str>,
    },
    Other {
        tag: Cow<'a, str>,
    },
}

impl DeclKind<'_> {
    /// Kind tag without the `Decl` suffix, e.g. `Function` or `CXXRecord`.
    pub fn tag(&self) -> &str {
        match self {
            Self::Function {
                ..
            } => "Function",
            Self::ParmVar {
                ..
            } => "ParmVar",
            Self::Record {
                tag,
            }
            | Self::Other {
                tag,
            } => tag.as_ref(),
        }
    }

    /// Templates whose dump lists every instantiation after the pattern.
    pub fn is_template(&self) -> bool {
        matches!(self.tag(), "FunctionTemplate" | "ClassTemplate" | "VarTemplate")
    }

    pub fn is_template_parameter(&self) -> bool {
        matches!(self.tag(), "TemplateTypeParm" | "NonTypeTemplateParm" | "TemplateTemplateParm")
    }
}

/// The slice of a front-end AST node the reporter needs.
///
/// Implemented by the Clang JSON tree and by hand-built trees in tests.
pub trait DeclNode: Sized {
    /// `None` for nodes that are not declarations: statements, expressions,
    /// attributes, and the translation unit itself.
    fn decl_kind(&self) -> Option<DeclKind<'_>>;

    fn is_translation_unit(&self) -> bool;

    /// Declarations the compiler synthesized rather than the user wrote,
    /// e.g. builtin typedefs or a class's injected name.
    fn is_implicit(&self) -> bool;

    fn begin_loc(&self) -> Option<SourceLoc>;

    fn end_loc(&self) -> Option<SourceLoc>;

    /// Where the declared name is spelled.
    fn name_loc(&self) -> Option<SourceLoc>;

    /// Children in source order.
    fn children(&self) -> &[Self];
}
