use serde_json::Value;

use super::PatchOperation;
use crate::error::PatchError;
use crate::navigator;
use crate::types::{PatchEntry, Revert};
use crate::validate::{require_path, require_value};

/// `replace`: overwrites an existing location in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceOp;

impl PatchOperation for ReplaceOp {
    fn name(&self) -> &str {
        "replace"
    }

    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError> {
        require_path(entry)?;
        require_value(entry)?;
        Ok(())
    }

    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError> {
        let path = require_path(entry)?;
        let value = require_value(entry)?.clone();
        let previous = navigator::update(document, &path, value)?;
        Ok(vec![PatchEntry::replace(entry.path.clone(), previous)])
    }
}
