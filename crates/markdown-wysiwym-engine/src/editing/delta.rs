use std::ops::Range;

use thiserror::Error;
use xi_rope::Rope;

/// Errors raised by the edit adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit notification {got} arrived out of order (expected {expected})")]
    OutOfOrder { expected: u64, got: u64 },
    #[error("Edit range {start}..{end} is outside the document (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("Edit range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
    #[error("Replaced lines {start}..{end} are outside the document ({count} lines)")]
    LinesOutOfBounds {
        start: usize,
        end: usize,
        count: usize,
    },
}

/// One text replacement described in whole lines.
///
/// `start_line` is the line holding the start of the replaced text and
/// `end_line_exclusive` the line holding its end, so their difference is the
/// number of line breaks removed. `inserted_line_count` is the number of line
/// breaks inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDelta {
    pub start_line: usize,
    pub end_line_exclusive: usize,
    pub inserted_line_count: usize,
}

impl EditDelta {
    pub fn new(start_line: usize, end_line_exclusive: usize, inserted_line_count: usize) -> Self {
        Self {
            start_line,
            end_line_exclusive,
            inserted_line_count,
        }
    }

    /// Derives the inserted line count by counting `\n` in `inserted_text`.
    pub fn from_line_change(
        replaced_line_start: usize,
        replaced_line_end_exclusive: usize,
        inserted_text: &str,
    ) -> Self {
        Self::new(
            replaced_line_start,
            replaced_line_end_exclusive,
            count_newlines(inserted_text),
        )
    }

    /// Derives the delta for replacing `range` of `rope` with `inserted_text`.
    ///
    /// `rope` must be the text as it was before the edit.
    pub fn from_byte_edit(
        rope: &Rope,
        range: Range<usize>,
        inserted_text: &str,
    ) -> Result<Self, EditError> {
        check_byte_range(rope, &range)?;
        Ok(Self::new(
            rope.line_of_offset(range.start),
            rope.line_of_offset(range.end),
            count_newlines(inserted_text),
        ))
    }

    /// Line breaks removed by the edit.
    #[must_use]
    pub fn removed_line_count(&self) -> i64 {
        self.end_line_exclusive as i64 - self.start_line as i64
    }

    /// Net change in the document's line count.
    #[must_use]
    pub fn net_change(&self) -> i64 {
        self.inserted_line_count as i64 - self.removed_line_count()
    }
}

/// A host edit notification in line terms, before sequencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub replaced_line_start: usize,
    pub replaced_line_end_exclusive: usize,
    pub inserted_text: String,
}

impl TextChange {
    pub fn new(start: usize, end_exclusive: usize, inserted_text: impl Into<String>) -> Self {
        Self {
            replaced_line_start: start,
            replaced_line_end_exclusive: end_exclusive,
            inserted_text: inserted_text.into(),
        }
    }

    pub fn delta(&self) -> EditDelta {
        EditDelta::from_line_change(
            self.replaced_line_start,
            self.replaced_line_end_exclusive,
            &self.inserted_text,
        )
    }
}

/// Admits each edit notification exactly once, in order.
///
/// Sequence numbers start at 0 and must increase by exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSequencer {
    next: u64,
}

impl EditSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence number the next notification must carry.
    pub fn expected(&self) -> u64 {
        self.next
    }

    /// Accepts `seq` if it is the expected number, advancing the sequencer.
    pub fn admit(&mut self, seq: u64) -> Result<(), EditError> {
        if seq != self.next {
            return Err(EditError::OutOfOrder {
                expected: self.next,
                got: seq,
            });
        }
        self.next += 1;
        Ok(())
    }
}

pub(crate) fn check_byte_range(rope: &Rope, range: &Range<usize>) -> Result<(), EditError> {
    let len = rope.len();
    if range.start > range.end || range.end > len {
        return Err(EditError::OutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    if !rope.is_codepoint_boundary(range.start) || !rope.is_codepoint_boundary(range.end) {
        return Err(EditError::NotCharBoundary {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
