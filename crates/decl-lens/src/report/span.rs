use tracing::trace;

use crate::report::node::SourceLoc;

/// A declaration's extent inside the main file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub filename: String,
    pub begin: usize,
    pub end: usize,
}

/// Knows which file identity is the main input and how to name it.
#[derive(Debug, Clone)]
pub struct SourceManager {
    main_file: String,
    display_name: String,
}

impl SourceManager {
    pub fn new(
        main_file: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            main_file: main_file.into(),
            display_name: display_name.into(),
        }
    }

    pub fn is_in_main_file(
        &self,
        loc: &SourceLoc,
    ) -> bool {
        *loc.file == *self.main_file
    }

    /// Printable name of the file `loc` lives in.
    pub fn filename<'a>(
        &'a self,
        loc: &'a SourceLoc,
    ) -> &'a str {
        if self.is_in_main_file(loc) {
            &self.display_name
        } else {
            &loc.file
        }
    }

    pub fn file_offset(
        &self,
        loc: &SourceLoc,
    ) -> usize {
        loc.offset
    }

    /// One-based line and column, or `None` when the front end left them out.
    pub fn line_col(
        &self,
        loc: &SourceLoc,
    ) -> Option<(usize, usize)> {
        (loc.line > 0 && loc.col > 0).then_some((loc.line, loc.col))
    }
}

/// Maps a node's begin/end locations to a span in the main file.
pub struct SpanResolver<'a> {
    source_manager: &'a SourceManager,
}

impl<'a> SpanResolver<'a> {
    pub fn new(source_manager: &'a SourceManager) -> Self {
        Self {
            source_manager,
        }
    }

    pub fn source_manager(&self) -> &'a SourceManager {
        self.source_manager
    }

    /// Resolve a range, or `None` if its begin is missing or lies outside
    /// the main file. An end that does not resolve into the main file
    /// collapses the span onto its begin.
    pub fn resolve(
        &self,
        begin: Option<&SourceLoc>,
        end: Option<&SourceLoc>,
    ) -> Option<SourceSpan> {
        let sm = self.source_manager;
        let begin = begin.filter(|loc| sm.is_in_main_file(loc))?;
        let begin_offset = sm.file_offset(begin);

        let end_offset = match end.filter(|loc| sm.is_in_main_file(loc)) {
            Some(end) => sm.file_offset(end).max(begin_offset),
            None => {
                trace!("End of range starting at {begin_offset} is outside the main file");
                begin_offset
            },
        };

        Some(SourceSpan {
            filename: sm.filename(begin).to_string(),
            begin: begin_offset,
            end: end_offset,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src/report/span_tests.rs"]
mod tests;
