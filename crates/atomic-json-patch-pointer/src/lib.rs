//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements the pointer layer used by the patch engine:
//! converting [JSON Pointer](https://tools.ietf.org/html/rfc6901) strings
//! into unescaped token sequences and back, plus the small predicates the
//! engine needs to reason about paths.
//!
//! # Example
//!
//! ```
//! use atomic_json_patch_pointer::{format_json_pointer, parse_json_pointer};
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/a~1b");
//! assert_eq!(path, vec!["foo".to_string(), "a/b".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! let pointer = format_json_pointer(&path);
//! assert_eq!(pointer, "/foo/a~1b");
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

pub mod util;
pub use util::{
    escape_component, format_json_pointer, is_child, is_path_equal, is_root, is_valid_index,
    parent, parse_json_pointer, unescape_component, with_last,
};

pub mod validate;
pub use validate::{is_well_formed, try_parse_json_pointer, validate_json_pointer};

/// The token that addresses the position after the last array element.
pub const APPEND_TOKEN: &str = "-";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("path \"{0}\" is missing a leading slash")]
    Malformed(String),
    #[error("NO_PARENT")]
    NoParent,
}
