use serde_json::Value;

use super::{revert_write, PatchOperation};
use crate::error::PatchError;
use crate::navigator;
use crate::types::{PatchEntry, Revert};
use crate::validate::{require_path, require_value};

/// `add`: inserts into an array, upserts an object member or replaces the
/// whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOp;

impl PatchOperation for AddOp {
    fn name(&self) -> &str {
        "add"
    }

    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError> {
        require_path(entry)?;
        require_value(entry)?;
        Ok(())
    }

    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError> {
        let path = require_path(entry)?;
        let value = require_value(entry)?.clone();
        let written = if entry.restore {
            navigator::restore(document, &path, value)?
        } else {
            navigator::write(document, &path, value)?
        };
        revert_write(&path, written)
    }
}
