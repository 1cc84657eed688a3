//! atomic-json-patch - RFC 6902 JSON Patch with all-or-nothing application.
//!
//! A patch is applied entry by entry. Each entry leaves an inverse in a
//! journal; if any entry fails, the journal is replayed backwards and the
//! document is exactly as it was before the call.
//!
//! # Example
//!
//! ```
//! use atomic_json_patch::{JsonPatch, PatchEntry, PatchError};
//! use serde_json::json;
//!
//! let engine = JsonPatch::new();
//! let mut doc = json!({"foo": "Hello"});
//!
//! let err = engine
//!     .apply(
//!         &mut doc,
//!         &[
//!             PatchEntry::add("/bar", json!("World")),
//!             PatchEntry::test("/a", json!(1)),
//!         ],
//!     )
//!     .unwrap_err();
//!
//! assert!(matches!(err, PatchError::UnknownPath { .. }));
//! assert_eq!(doc, json!({"foo": "Hello"}));
//! ```

pub mod accessor;
pub mod codec;
pub mod engine;
pub mod error;
pub mod journal;
pub mod json_cli;
pub mod navigator;
pub mod operations;
pub mod types;
pub mod validate;

pub use accessor::{AccessError, ArrayAccessor, ContainerAccessor, ObjectAccessor};
pub use codec::{decode_document, decode_patch, encode_document, encode_patch};
pub use engine::{apply_patch, apply_to_string, read, JsonPatch};
pub use error::PatchError;
pub use journal::Journal;
pub use operations::PatchOperation;
pub use types::{Path, PatchEntry, PatchOptions, Revert, Written};
pub use validate::{require_from, require_not_root, require_path, require_value};
