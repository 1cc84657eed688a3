//! Core logic of the command-line tools.
//!
//! - `json-patch`  : apply a JSON Patch to a document
//! - `json-pointer`: look up a JSON Pointer in a document

use serde_json::Value;

use crate::codec::{decode_document, encode_document};
use crate::engine::{read, JsonPatch};
use crate::error::PatchError;
use crate::types::PatchOptions;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Io(std::io::Error),
    Patch(PatchError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Patch(e) => match e.context_pointer() {
                Some(pointer) if !e.to_string().contains(pointer) => write!(f, "{e} (at {pointer})"),
                _ => write!(f, "{e}"),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

fn cli_options() -> PatchOptions {
    PatchOptions::default().pretty()
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Applies a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    Ok(JsonPatch::with_options(cli_options()).apply_to_string(doc_json, patch_json)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Looks up a JSON Pointer (RFC 6901) in a document.
///
/// Returns the located value as a pretty-printed JSON string.
pub fn read_json_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let options = cli_options();
    let doc: Value = decode_document(doc_json, &options)?;
    let found = read(&doc, pointer)?;
    Ok(encode_document(found, &options)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
