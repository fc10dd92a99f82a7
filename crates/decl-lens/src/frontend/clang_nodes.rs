use std::borrow::Cow;

use clang_ast::{BareSourceLocation, Kind, SourceLocation, SourceRange};
use serde::Deserialize;

use crate::report::{DeclKind, DeclNode, SourceLoc};

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of the Clang AST node kinds the reporter
/// distinguishes.
///
/// Functions and parameters carry the name and type the report prints.
/// Records are kept apart so the location trailer can pick them out.
/// Everything else, including the translation unit, lands in `Other`.
#[derive(Deserialize)]
pub enum Clang {
    FunctionDecl(ValueDecl),
    ParmVarDecl(ValueDecl),
    CXXRecordDecl(RecordDecl),
    RecordDecl(RecordDecl),

    // The `loc` and `range` fields MUST be deserialized even for kinds we do
    // not inspect. clang-ast carries the "current file" across the stream
    // through `SourceLocation`; skipping a location that switches files would
    // leave every following node with the wrong file.
    Other {
        kind: Kind,
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<SourceRange>,
        #[serde(rename = "isImplicit", default)]
        is_implicit: Option<bool>,
    },
}

/// Declarations with a name and a declared type.
///
/// `ty` captures Clang's `type.qualType`, e.g. `"int (int, int)"` for a
/// function or `"const char *"` for a parameter.
#[derive(Deserialize, Debug)]
pub struct ValueDecl {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct RecordDecl {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct QualType {
    #[serde(rename = "qualType")]
    pub qual_type: Option<String>,
}

impl ValueDecl {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn qual_type(&self) -> &str {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref()).unwrap_or("")
    }
}

/// Extract the best concrete location for spans.
///
/// Prefers the expansion location (where a macro was invoked) over the
/// spelling location (inside the macro definition), matching how offsets
/// into the main file are computed.
pub fn resolve_loc(loc: &SourceLocation) -> Option<&BareSourceLocation> {
    loc.expansion_loc.as_ref().or(loc.spelling_loc.as_ref())
}

/// Extract the location a name was written at, preferring spelling.
pub fn resolve_spelling_loc(loc: &SourceLocation) -> Option<&BareSourceLocation> {
    loc.spelling_loc.as_ref().or(loc.expansion_loc.as_ref())
}

fn to_source_loc(bare: &BareSourceLocation) -> Option<SourceLoc> {
    if bare.file.is_empty() {
        return None;
    }
    Some(SourceLoc {
        file: bare.file.clone(),
        offset: bare.offset,
        line: bare.line,
        col: bare.col,
    })
}

impl Clang {
    fn range(&self) -> Option<&SourceRange> {
        match self {
            Self::FunctionDecl(d) | Self::ParmVarDecl(d) => d.range.as_ref(),
            Self::CXXRecordDecl(d) | Self::RecordDecl(d) => d.range.as_ref(),
            Self::Other {
                range,
                ..
            } => range.as_ref(),
        }
    }

    fn loc(&self) -> Option<&SourceLocation> {
        match self {
            Self::FunctionDecl(d) | Self::ParmVarDecl(d) => d.loc.as_ref(),
            Self::CXXRecordDecl(d) | Self::RecordDecl(d) => d.loc.as_ref(),
            Self::Other {
                loc,
                ..
            } => loc.as_ref(),
        }
    }

    fn is_implicit(&self) -> bool {
        let flag = match self {
            Self::FunctionDecl(d) | Self::ParmVarDecl(d) => d.is_implicit,
            Self::CXXRecordDecl(d) | Self::RecordDecl(d) => d.is_implicit,
            Self::Other {
                is_implicit,
                ..
            } => *is_implicit,
        };
        flag.unwrap_or(false)
    }
}

/// Clang node kinds are their class names, so every declaration kind ends in
/// `Decl`. The tag is the name without that suffix.
fn decl_tag(kind: &Kind) -> Option<Cow<'static, str>> {
    if matches!(kind, Kind::TranslationUnitDecl) {
        return None;
    }
    let name = format!("{kind:?}");
    let tag = name.strip_suffix("Decl")?;
    if tag.is_empty() {
        return None;
    }
    Some(Cow::Owned(tag.to_string()))
}

impl DeclNode for Node {
    fn decl_kind(&self) -> Option<DeclKind<'_>> {
        match &self.kind {
            Clang::FunctionDecl(d) => Some(DeclKind::Function {
                name: d.name(),
                ty: d.qual_type(),
            }),
            Clang::ParmVarDecl(d) => Some(DeclKind::ParmVar {
                name: d.name(),
                ty: d.qual_type(),
            }),
            Clang::CXXRecordDecl(_) => Some(DeclKind::Record {
                tag: Cow::Borrowed("CXXRecord"),
            }),
            Clang::RecordDecl(_) => Some(DeclKind::Record {
                tag: Cow::Borrowed("Record"),
            }),
            Clang::Other {
                kind,
                ..
            } => decl_tag(kind).map(|tag| DeclKind::Other {
                tag,
            }),
        }
    }

    fn is_translation_unit(&self) -> bool {
        matches!(
            &self.kind,
            Clang::Other {
                kind: Kind::TranslationUnitDecl,
                ..
            }
        )
    }

    fn is_implicit(&self) -> bool {
        self.kind.is_implicit()
    }

    fn begin_loc(&self) -> Option<SourceLoc> {
        self.kind.range().and_then(|r| resolve_loc(&r.begin)).and_then(to_source_loc)
    }

    fn end_loc(&self) -> Option<SourceLoc> {
        self.kind.range().and_then(|r| resolve_loc(&r.end)).and_then(to_source_loc)
    }

    fn name_loc(&self) -> Option<SourceLoc> {
        self.kind.loc().and_then(resolve_spelling_loc).and_then(to_source_loc)
    }

    fn children(&self) -> &[Self] {
        &self.inner
    }
}

#[cfg(test)]
#[path = "../../tests/src/frontend/clang_nodes_tests.rs"]
mod tests;
