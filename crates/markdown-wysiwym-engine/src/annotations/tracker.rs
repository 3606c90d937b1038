use log::warn;

use crate::editing::{EditDelta, EditError, EditSequencer, TextChange};

use super::{range::LineRange, set::AnnotationSet};

/// An [`AnnotationSet`] fed by a sequenced stream of edit notifications.
///
/// Notifications carry a sequence number; a duplicate or out-of-order number
/// is rejected and leaves the ranges untouched.
#[derive(Debug, Clone, Default)]
pub struct AnnotationTracker {
    set: AnnotationSet,
    sequencer: EditSequencer,
}

impl AnnotationTracker {
    pub fn new(set: AnnotationSet) -> Self {
        Self {
            set,
            sequencer: EditSequencer::new(),
        }
    }

    pub fn set(&self) -> &AnnotationSet {
        &self.set
    }

    /// Sequence number the next notification must carry.
    pub fn next_sequence(&self) -> u64 {
        self.sequencer.expected()
    }

    /// Applies notification `seq`, returning the delta it produced.
    pub fn apply(&mut self, seq: u64, change: &TextChange) -> Result<EditDelta, EditError> {
        if let Err(e) = self.sequencer.admit(seq) {
            warn!("Rejected edit notification: {e}");
            return Err(e);
        }
        let delta = change.delta();
        self.set.adjust_for_edit(&delta);
        Ok(delta)
    }

    pub fn add(&mut self, range: LineRange) {
        self.set.add(range);
    }

    pub fn remove(&mut self, range: LineRange) {
        self.set.remove(range);
    }

    pub fn query(&self, line: usize) -> bool {
        self.set.query(line)
    }
}
