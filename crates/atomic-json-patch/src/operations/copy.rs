use serde_json::Value;

use super::{revert_write, PatchOperation};
use crate::error::PatchError;
use crate::navigator;
use crate::types::{PatchEntry, Revert};
use crate::validate::{require_from, require_path};

/// `copy`: adds a deep copy of the value at `from` at `path`.
///
/// The revert follows the same rules as `add`, so copying over an existing
/// member restores that member on rollback.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOp;

impl PatchOperation for CopyOp {
    fn name(&self) -> &str {
        "copy"
    }

    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError> {
        require_path(entry)?;
        require_from(entry)?;
        Ok(())
    }

    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError> {
        let path = require_path(entry)?;
        let from = require_from(entry)?;
        let value = navigator::read(document, &from)?.clone();
        let written = navigator::write(document, &path, value)?;
        revert_write(&path, written)
    }
}
