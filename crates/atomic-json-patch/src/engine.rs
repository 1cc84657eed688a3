//! All-or-nothing patch application.
//!
//! [`JsonPatch`] owns the operation registry. Entries are validated and
//! applied one at a time; every applied entry leaves its revert in a
//! [`Journal`]. When an entry fails, the journal is replayed newest first
//! and the document is back to its state before the call.

use std::borrow::Borrow;

use atomic_json_patch_pointer::try_parse_json_pointer;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::codec::{decode_document, encode_document, not_an_array, parse_patch};
use crate::error::PatchError;
use crate::journal::Journal;
use crate::navigator;
use crate::operations::{builtin, PatchOperation};
use crate::types::{PatchEntry, PatchOptions};

/// A JSON Patch engine with a registry of operations.
///
/// Starts with the six RFC 6902 operations; more can be registered, and a
/// registered operation replaces a built-in one of the same name.
pub struct JsonPatch {
    operations: IndexMap<String, Box<dyn PatchOperation>>,
    options: PatchOptions,
}

impl Default for JsonPatch {
    fn default() -> Self {
        Self::with_options(PatchOptions::default())
    }
}

impl std::fmt::Debug for JsonPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonPatch")
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

impl JsonPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PatchOptions) -> Self {
        let mut engine = Self {
            operations: IndexMap::new(),
            options,
        };
        for operation in builtin() {
            engine.operations.insert(operation.name().to_string(), operation);
        }
        engine
    }

    pub fn options(&self) -> &PatchOptions {
        &self.options
    }

    /// Registers `operation` under its name, returning the handler it
    /// replaces, if any.
    pub fn register_operation<O>(&mut self, operation: O) -> Option<Box<dyn PatchOperation>>
    where
        O: PatchOperation + 'static,
    {
        let name = operation.name().to_string();
        debug!(op = %name, "registering patch operation");
        self.operations.insert(name, Box::new(operation))
    }

    /// Names of the registered operations, in registration order.
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    fn handler(&self, op: &str) -> Result<&dyn PatchOperation, PatchError> {
        self.operations
            .get(op)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| PatchError::UnknownPatchOperation { op: op.to_string() })
    }

    fn validate(&self, entry: &PatchEntry) -> Result<&dyn PatchOperation, PatchError> {
        let handler = self.handler(&entry.op)?;
        handler.validate(entry)?;
        Ok(handler)
    }

    // ── apply ─────────────────────────────────────────────────────────────

    /// Applies `entries` to `document`, all or nothing.
    ///
    /// # Errors
    ///
    /// A validation failure of entry `i` is returned as
    /// [`PatchError::InvalidPatch`] with pointer `/i`; runtime failures are
    /// returned as raised. Either way the document is left unchanged.
    pub fn apply(&self, document: &mut Value, entries: &[PatchEntry]) -> Result<(), PatchError> {
        self.run(document, entries.iter().map(Ok::<_, PatchError>))
    }

    /// Applies a patch given as a JSON value, decoding entries lazily.
    pub fn apply_json(&self, document: &mut Value, patch: &Value) -> Result<(), PatchError> {
        let entries = patch.as_array().ok_or_else(not_an_array)?;
        self.run(document, entries.iter().map(PatchEntry::from_json))
    }

    /// Applies a patch given as JSON text.
    pub fn apply_str(&self, document: &mut Value, patch: &str) -> Result<(), PatchError> {
        let entries = parse_patch(patch, &self.options)?;
        self.run(document, entries.iter().map(PatchEntry::from_json))
    }

    /// Decodes `document`, applies `patch` and encodes the result.
    pub fn apply_to_string(&self, document: &str, patch: &str) -> Result<String, PatchError> {
        let mut value = decode_document(document, &self.options)?;
        self.apply_str(&mut value, patch)?;
        encode_document(&value, &self.options)
    }

    fn run<I, E>(&self, document: &mut Value, entries: I) -> Result<(), PatchError>
    where
        I: IntoIterator<Item = Result<E, PatchError>>,
        E: Borrow<PatchEntry>,
    {
        let mut journal = Journal::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if let Err(err) = self.step(document, index, entry, &mut journal) {
                warn!(index, error = %err, "patch rejected, rolling back");
                return Err(self.rollback(document, journal, err));
            }
        }
        debug!(applied = journal.len(), "patch applied");
        Ok(())
    }

    fn step<E>(
        &self,
        document: &mut Value,
        index: usize,
        entry: Result<E, PatchError>,
        journal: &mut Journal,
    ) -> Result<(), PatchError>
    where
        E: Borrow<PatchEntry>,
    {
        let entry = entry.map_err(|err| PatchError::invalid_patch(index, err))?;
        let entry: &PatchEntry = entry.borrow();
        let handler = self
            .validate(entry)
            .map_err(|err| PatchError::invalid_patch(index, err))?;
        let revert = handler.apply(document, entry)?;
        debug!(index, op = %entry.op, path = %entry.path, "applied patch entry");
        journal.record(revert);
        Ok(())
    }

    fn rollback(&self, document: &mut Value, journal: Journal, cause: PatchError) -> PatchError {
        let entries = journal.len();
        let outcome = journal.unwind(|entry| {
            self.handler(&entry.op)?.apply(document, entry).map(drop)
        });
        match outcome {
            Ok(()) => {
                debug!(entries, "rolled back");
                cause
            }
            Err(err) => {
                error!(entries, error = %err, "rollback failed, document may be inconsistent");
                PatchError::Rollback {
                    source: Box::new(cause),
                    message: err.to_string(),
                }
            }
        }
    }

    // ── validation ────────────────────────────────────────────────────────

    /// Whether every entry names a registered operation and passes its
    /// validation. Never touches a document.
    pub fn is_valid_patch(&self, entries: &[PatchEntry]) -> bool {
        entries.iter().all(|entry| self.validate(entry).is_ok())
    }

    /// [`is_valid_patch`](Self::is_valid_patch) for a patch given as a JSON
    /// value.
    pub fn is_valid_patch_json(&self, patch: &Value) -> bool {
        patch
            .as_array()
            .is_some_and(|entries| self.all_valid(entries))
    }

    /// [`is_valid_patch`](Self::is_valid_patch) for a patch given as JSON
    /// text. The text is decoded under the same options as
    /// [`apply_str`](Self::apply_str), depth limit included.
    pub fn is_valid_patch_str(&self, patch: &str) -> bool {
        parse_patch(patch, &self.options).is_ok_and(|entries| self.all_valid(&entries))
    }

    fn all_valid(&self, entries: &[Value]) -> bool {
        entries
            .iter()
            .all(|raw| PatchEntry::from_json(raw).is_ok_and(|entry| self.validate(&entry).is_ok()))
    }
}

// ── Free functions ────────────────────────────────────────────────────────

/// Returns the value `pointer` refers to in `document`.
///
/// # Errors
///
/// [`PatchError::MalformedPath`] if the pointer is not well-formed,
/// [`PatchError::UnknownPath`] if it does not resolve.
pub fn read<'a>(document: &'a Value, pointer: &str) -> Result<&'a Value, PatchError> {
    let path = try_parse_json_pointer(pointer)?;
    navigator::read(document, &path)
}

/// Applies `entries` with the built-in operations only.
pub fn apply_patch(document: &mut Value, entries: &[PatchEntry]) -> Result<(), PatchError> {
    JsonPatch::new().apply(document, entries)
}

/// Decodes `document`, applies `patch` and encodes the result.
pub fn apply_to_string(document: &str, patch: &str, options: PatchOptions) -> Result<String, PatchError> {
    JsonPatch::with_options(options).apply_to_string(document, patch)
}
