use atomic_json_patch_pointer::{format_json_pointer, is_child, with_last};
use serde_json::Value;

use super::PatchOperation;
use crate::error::PatchError;
use crate::navigator;
use crate::types::{PatchEntry, Revert, Written};
use crate::validate::{require_from, require_path};

/// `move`: removes the value at `from` and adds it at `path`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOp;

impl PatchOperation for MoveOp {
    fn name(&self) -> &str {
        "move"
    }

    /// A location cannot be moved into one of its own children.
    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError> {
        let path = require_path(entry)?;
        let from = require_from(entry)?;
        if is_child(&from, &path) {
            return Err(PatchError::InvalidPatchFrom);
        }
        Ok(())
    }

    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError> {
        let path = require_path(entry)?;
        let from = require_from(entry)?;
        if from == path {
            return Ok(Vec::new());
        }

        let value = navigator::delete(document, &from)?;
        let outcome = if entry.restore {
            navigator::restore(document, &path, value.clone())
        } else {
            navigator::write(document, &path, value.clone())
        };
        let written = match outcome {
            Ok(written) => written,
            Err(err) => {
                navigator::restore(document, &from, value)?;
                return Err(err);
            }
        };

        let from = format_json_pointer(&from);
        Ok(match written {
            Written::Inserted(index) => {
                let landed = format_json_pointer(&with_last(&path, index.to_string())?);
                vec![PatchEntry::move_from(landed, from).restoring()]
            }
            Written::Created => vec![PatchEntry::move_from(entry.path.clone(), from).restoring()],
            // The overwritten value goes back first, then the moved one.
            Written::Replaced(previous) => vec![
                PatchEntry::replace(entry.path.clone(), previous),
                PatchEntry::restore(from, value),
            ],
        })
    }
}
