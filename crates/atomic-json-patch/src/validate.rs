//! Member checks shared by the operation validators.
//!
//! These are public so custom operations can validate their entries the
//! same way the built-in ones do.

use atomic_json_patch_pointer::try_parse_json_pointer;
use serde_json::Value;

use crate::error::PatchError;
use crate::types::{Path, PatchEntry};

/// Checks that `path` is a well-formed pointer and returns its tokens.
pub fn require_path(entry: &PatchEntry) -> Result<Path, PatchError> {
    Ok(try_parse_json_pointer(&entry.path)?)
}

/// Checks that `from` is present and well-formed and returns its tokens.
pub fn require_from(entry: &PatchEntry) -> Result<Path, PatchError> {
    let from = entry.from.as_deref().ok_or(PatchError::InvalidPatchFrom)?;
    Ok(try_parse_json_pointer(from)?)
}

/// Checks that `value` is present. An explicit `null` counts as present.
pub fn require_value(entry: &PatchEntry) -> Result<&Value, PatchError> {
    entry.value.as_ref().ok_or(PatchError::InvalidPatchValue)
}

/// Rejects entries that target the whole document.
pub fn require_not_root(entry: &PatchEntry) -> Result<(), PatchError> {
    if entry.path.is_empty() {
        return Err(PatchError::InvalidPatchPath);
    }
    Ok(())
}
