//! Undo log for a single patch application.

use crate::error::PatchError;
use crate::types::{PatchEntry, Revert};

/// The reverts of every entry applied so far, oldest first.
#[derive(Debug, Default)]
pub struct Journal {
    reverts: Vec<Revert>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the revert of one successfully applied entry.
    pub fn record(&mut self, revert: Revert) {
        self.reverts.push(revert);
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.reverts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverts.is_empty()
    }

    /// Replays the recorded reverts newest first, consuming the journal.
    ///
    /// Every revert entry is attempted even if an earlier one fails; the
    /// first failure is returned.
    pub fn unwind<F>(self, mut undo: F) -> Result<(), PatchError>
    where
        F: FnMut(&PatchEntry) -> Result<(), PatchError>,
    {
        let mut first_failure = None;
        for revert in self.reverts.into_iter().rev() {
            for entry in &revert {
                if let Err(err) = undo(entry) {
                    first_failure.get_or_insert(err);
                }
            }
        }
        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
