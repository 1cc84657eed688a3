//! Error type shared by every layer of the patch engine.

use atomic_json_patch_pointer::PointerError;
use thiserror::Error;

/// Everything that can go wrong while decoding, validating or applying a
/// patch.
///
/// Variants fall in four groups: malformed input, validation errors
/// (the patch itself is wrong), runtime errors (the patch does not fit the
/// document) and internal invariant violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    // ── Malformed input ───────────────────────────────────────────────────
    #[error("malformed JSON document: {message}")]
    MalformedDocument { message: String, raw: String },
    #[error("JSON document exceeds the maximum nesting depth of {max_depth}")]
    InvalidJsonDepth { max_depth: usize },
    #[error("malformed patch: {message}")]
    MalformedPatch { message: String },

    // ── Validation ────────────────────────────────────────────────────────
    #[error("\"op\" is missing or not a string")]
    InvalidPatchOperation,
    #[error("unknown operation \"{op}\"")]
    UnknownPatchOperation { op: String },
    #[error("\"path\" is missing or not a string")]
    InvalidPatchPath,
    #[error("\"from\" is missing or not a string")]
    InvalidPatchFrom,
    #[error("\"value\" is missing")]
    InvalidPatchValue,
    #[error("path \"{pointer}\" is missing a leading slash")]
    MalformedPath { pointer: String },
    #[error("{source} in patch /{index}")]
    InvalidPatch {
        index: usize,
        pointer: String,
        source: Box<PatchError>,
    },

    // ── Runtime ───────────────────────────────────────────────────────────
    #[error("Unknown document path \"{pointer}\"")]
    UnknownPath {
        pointer: String,
        document: Option<String>,
    },
    #[error("Exceeding array boundaries trying to add index \"{index}\"")]
    ArrayBoundary {
        pointer: String,
        index: String,
        document: Option<String>,
    },
    #[error("cannot append to a non-array container at \"{pointer}\"")]
    AppendToNonArray { pointer: String },
    #[error("Test operation failed asserting that \"{actual}\" equals \"{expected}\"")]
    FailedTest {
        pointer: String,
        expected: String,
        actual: String,
    },

    // ── Internal ──────────────────────────────────────────────────────────
    #[error("internal error: {0}")]
    Internal(String),
    #[error("{source} (rollback failed: {message})")]
    Rollback {
        source: Box<PatchError>,
        message: String,
    },
}

impl PatchError {
    /// Wraps a validation failure of the entry at `index`.
    pub fn invalid_patch(index: usize, source: PatchError) -> Self {
        PatchError::InvalidPatch {
            index,
            pointer: format!("/{index}"),
            source: Box::new(source),
        }
    }

    /// The pointer the error refers to, if any.
    ///
    /// For [`PatchError::InvalidPatch`] this is the pointer of the offending
    /// entry inside the patch (`/i`); for runtime errors it is the document
    /// location where resolution stopped.
    pub fn context_pointer(&self) -> Option<&str> {
        match self {
            PatchError::MalformedPath { pointer }
            | PatchError::InvalidPatch { pointer, .. }
            | PatchError::UnknownPath { pointer, .. }
            | PatchError::ArrayBoundary { pointer, .. }
            | PatchError::AppendToNonArray { pointer }
            | PatchError::FailedTest { pointer, .. } => Some(pointer),
            PatchError::Rollback { source, .. } => source.context_pointer(),
            _ => None,
        }
    }

    /// A JSON snapshot of the document (or sub-document) the error refers to.
    ///
    /// The snapshot is taken when the failing entry runs, before rollback,
    /// so it includes the effects of the entries applied ahead of it. The
    /// pointer of the error refers to that same state.
    pub fn context_document(&self) -> Option<&str> {
        match self {
            PatchError::MalformedDocument { raw, .. } => Some(raw),
            PatchError::UnknownPath { document, .. }
            | PatchError::ArrayBoundary { document, .. } => document.as_deref(),
            PatchError::InvalidPatch { source, .. } | PatchError::Rollback { source, .. } => {
                source.context_document()
            }
            _ => None,
        }
    }

    /// Whether the error means the patch itself is invalid, as opposed to
    /// not fitting the document.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PatchError::MalformedPatch { .. }
                | PatchError::InvalidPatchOperation
                | PatchError::UnknownPatchOperation { .. }
                | PatchError::InvalidPatchPath
                | PatchError::InvalidPatchFrom
                | PatchError::InvalidPatchValue
                | PatchError::MalformedPath { .. }
                | PatchError::InvalidPatch { .. }
        )
    }
}

impl From<PointerError> for PatchError {
    fn from(err: PointerError) -> Self {
        match err {
            PointerError::Malformed(pointer) => PatchError::MalformedPath { pointer },
            PointerError::NoParent => PatchError::Internal("root has no parent".to_string()),
        }
    }
}
