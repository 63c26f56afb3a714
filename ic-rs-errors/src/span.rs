use std::{
    fmt::{Display, Formatter},
    ops::Range,
};

use codespan_reporting::files::Files;
use if_chain::if_chain;

use crate::lazy_files::{FileId, FILE_CACHE};

/// Store the details of a code span, for use in error messaging.
/// `r` is set such that `span.l..span.r` will return the correct span of chars.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq, PartialOrd)]
pub struct Span {
    /// Left index of the span
    pub l: usize,
    /// Right index of the span
    pub r: usize,
    /// The ID of the file in the global [`FILE_CACHE`]
    pub file_id: FileId,
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let files = FILE_CACHE.read();

        if_chain! {
            if let Ok(name) = files.name(self.file_id);
            if let Ok(idx) = files.line_index(self.file_id, self.l);
            if let Ok(line_num) = files.line_number(self.file_id, idx);
            if let Ok(column_num) = files.column_number(self.file_id, idx, self.l);
            then {
                write!(f, "{name}:{line_num}:{column_num}")
            } else {
                write!(f, "{self:?}")
            }
        }
    }
}

impl Span {
    /// Create a new [`Span`]
    ///
    /// # Arguments
    /// `file_id` - The [`FileId`] of the file in the [`FILE_CACHE`]
    /// `range` - The range containing the start and end indices of the span.
    #[inline]
    pub fn new(file_id: FileId, range: Range<usize>) -> Self {
        Self {
            file_id,
            l: range.start,
            r: range.end,
        }
    }

    /// Combine two optional spans into one covering both, handling `None` cases.
    /// Spans in different files are not merged; the left one wins.
    pub fn combine(left: Option<Span>, right: Option<Span>) -> Option<Self> {
        match (left, right) {
            (Some(x), None) | (None, Some(x)) => Some(x),
            (Some(ls), Some(rs)) => {
                if ls.file_id != rs.file_id {
                    return Some(ls);
                }

                Some(Self {
                    file_id: ls.file_id,
                    l: ls.l,
                    r: rs.r,
                })
            }
            (None, None) => None,
        }
    }

    /// Return the source code that this span represents, if the file is cached.
    pub fn code(&self) -> Option<String> {
        let files = FILE_CACHE.read();

        files
            .get(self.file_id)
            .ok()
            .and_then(|f| f.source().get(self.l..self.r).map(|code| code.to_string()))
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.l..self.r
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
