//! Validation functions for JSON Pointer.

use crate::{parse_json_pointer, Path, PointerError};

/// Tells whether `pointer` is a well-formed JSON Pointer string: either
/// empty (the root) or starting with `/`.
pub fn is_well_formed(pointer: &str) -> bool {
    pointer.is_empty() || pointer.starts_with('/')
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns [`PointerError::Malformed`] if the pointer is non-empty but
/// doesn't start with `/`.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if is_well_formed(pointer) {
        Ok(())
    } else {
        Err(PointerError::Malformed(pointer.to_string()))
    }
}

/// Validate and parse a JSON Pointer string in one step.
pub fn try_parse_json_pointer(pointer: &str) -> Result<Path, PointerError> {
    validate_json_pointer(pointer)?;
    Ok(parse_json_pointer(pointer))
}
