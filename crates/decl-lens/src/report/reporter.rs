use std::io::Write;

use tracing::trace;

use crate::{
    error::ReportError,
    report::{
        node::{DeclKind, DeclNode},
        span::{SourceSpan, SpanResolver},
    },
};

/// Render one report line (without the newline).
///
/// `FunctionDecl <input.cc, 0, 38> add 'int (int, int)' `. The trailing
/// spaces are part of the format.
pub fn format_line(
    kind: &DeclKind<'_>,
    span: &SourceSpan,
) -> String {
    let mut line = format!("{}Decl <{}, {}, {}> ", kind.tag(), span.filename, span.begin, span.end);
    line.push_str(&extra_fields(kind));
    line
}

/// Kind-specific trailing fields: name and type for functions and
/// parameters, nothing otherwise.
fn extra_fields(kind: &DeclKind<'_>) -> String {
    match kind {
        DeclKind::Function {
            name,
            ty,
        }
        | DeclKind::ParmVar {
            name,
            ty,
        } => format!("{name} '{ty}' "),
        DeclKind::Record {
            ..
        }
        | DeclKind::Other {
            ..
        } => String::new(),
    }
}

/// Writes a line for every declaration that starts in the main file.
pub struct DeclarationReporter<'a, W> {
    out: W,
    resolver: SpanResolver<'a>,
    show_locations: bool,
    reported: usize,
    filtered: usize,
}

impl<'a, W: Write> DeclarationReporter<'a, W> {
    pub fn new(
        out: W,
        resolver: SpanResolver<'a>,
    ) -> Self {
        Self {
            out,
            resolver,
            show_locations: false,
            reported: 0,
            filtered: 0,
        }
    }

    /// Also print `Found declaration at L:C` after Function and Record lines.
    pub fn with_locations(
        mut self,
        show_locations: bool,
    ) -> Self {
        self.show_locations = show_locations;
        self
    }

    /// Report `node`, returning the line written, or `None` when the node
    /// is not a declaration or does not start in the main file.
    pub fn report<N: DeclNode>(
        &mut self,
        node: &N,
    ) -> Result<Option<String>, ReportError> {
        let Some(kind) = node.decl_kind() else {
            return Ok(None);
        };
        let Some(span) = self.resolver.resolve(node.begin_loc().as_ref(), node.end_loc().as_ref()) else {
            trace!("Skipping {}Decl outside the main file", kind.tag());
            self.filtered += 1;
            return Ok(None);
        };

        let line = format_line(&kind, &span);
        writeln!(self.out, "{line}")?;
        self.reported += 1;

        if self.show_locations && matches!(kind, DeclKind::Function { .. } | DeclKind::Record { .. }) {
            self.write_location(node)?;
        }

        Ok(Some(line))
    }

    fn write_location<N: DeclNode>(
        &mut self,
        node: &N,
    ) -> Result<(), ReportError> {
        let sm = self.resolver.source_manager();
        let Some(loc) = node.name_loc() else {
            return Ok(());
        };
        if let Some((line, col)) = sm.line_col(&loc) {
            writeln!(self.out, "Found declaration at {line}:{col}")?;
        }
        Ok(())
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn filtered(&self) -> usize {
        self.filtered
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "../../tests/src/report/reporter_tests.rs"]
mod tests;
