use serde_json::Value;

use super::PatchOperation;
use crate::error::PatchError;
use crate::navigator;
use crate::types::{PatchEntry, Revert};
use crate::validate::{require_not_root, require_path};

/// `remove`: deletes an object member or array element.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOp;

impl PatchOperation for RemoveOp {
    fn name(&self) -> &str {
        "remove"
    }

    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError> {
        require_path(entry)?;
        require_not_root(entry)
    }

    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError> {
        let path = require_path(entry)?;
        let removed = navigator::delete(document, &path)?;
        Ok(vec![PatchEntry::restore(entry.path.clone(), removed)])
    }
}
