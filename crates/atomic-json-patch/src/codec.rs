//! JSON codec for documents and patches.
//!
//! Documents and patches travel as JSON text; internally they are
//! `serde_json::Value` trees and [`PatchEntry`] lists.

use atomic_json_patch_util::json_depth;
use serde_json::{json, Map, Value};

use crate::error::PatchError;
use crate::types::{PatchEntry, PatchOptions};

const OP: &str = "op";
const PATH: &str = "path";
const FROM: &str = "from";
const VALUE: &str = "value";

// ── PatchEntry <-> Value ──────────────────────────────────────────────────

impl PatchEntry {
    /// Decodes one patch entry.
    ///
    /// `op` and `path` must be strings and `from`, when present, too.
    /// Whether the members required by the operation are present is left to
    /// its validation.
    pub fn from_json(value: &Value) -> Result<Self, PatchError> {
        let map = value.as_object().ok_or(PatchError::InvalidPatchOperation)?;
        let op = map
            .get(OP)
            .and_then(Value::as_str)
            .ok_or(PatchError::InvalidPatchOperation)?;
        let path = map
            .get(PATH)
            .and_then(Value::as_str)
            .ok_or(PatchError::InvalidPatchPath)?;
        let from = match map.get(FROM) {
            None => None,
            Some(Value::String(from)) => Some(from.clone()),
            Some(_) => return Err(PatchError::InvalidPatchFrom),
        };
        let extra = map
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), OP | PATH | FROM | VALUE))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(PatchEntry {
            op: op.to_string(),
            path: path.to_string(),
            value: map.get(VALUE).cloned(),
            from,
            extra,
            restore: false,
        })
    }

    /// Encodes the entry in RFC 6902 form, extra members last.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(OP.into(), json!(self.op));
        map.insert(PATH.into(), json!(self.path));
        if let Some(from) = &self.from {
            map.insert(FROM.into(), json!(from));
        }
        if let Some(value) = &self.value {
            map.insert(VALUE.into(), value.clone());
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

// ── Documents ─────────────────────────────────────────────────────────────

fn check_depth(value: &Value, options: &PatchOptions) -> Result<(), PatchError> {
    match options.max_depth {
        Some(max_depth) if json_depth(value) > max_depth => {
            Err(PatchError::InvalidJsonDepth { max_depth })
        }
        _ => Ok(()),
    }
}

/// Parses a JSON document, enforcing `options.max_depth`.
pub fn decode_document(text: &str, options: &PatchOptions) -> Result<Value, PatchError> {
    let value: Value = serde_json::from_str(text).map_err(|e| PatchError::MalformedDocument {
        message: e.to_string(),
        raw: text.to_string(),
    })?;
    check_depth(&value, options)?;
    Ok(value)
}

/// Serializes a document, pretty-printed when `options.pretty` is set.
pub fn encode_document(value: &Value, options: &PatchOptions) -> Result<String, PatchError> {
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|e| PatchError::Internal(e.to_string()))
}

// ── Patches ───────────────────────────────────────────────────────────────

/// Parses patch text into its raw entries without decoding them.
pub(crate) fn parse_patch(text: &str, options: &PatchOptions) -> Result<Vec<Value>, PatchError> {
    let value: Value = serde_json::from_str(text).map_err(|e| PatchError::MalformedPatch {
        message: e.to_string(),
    })?;
    check_depth(&value, options)?;
    match value {
        Value::Array(entries) => Ok(entries),
        _ => Err(not_an_array()),
    }
}

pub(crate) fn not_an_array() -> PatchError {
    PatchError::MalformedPatch {
        message: "a patch must be an array of operations".to_string(),
    }
}

/// Decodes patch text into entries.
///
/// An entry that cannot be decoded fails with [`PatchError::InvalidPatch`]
/// carrying its index.
pub fn decode_patch(text: &str, options: &PatchOptions) -> Result<Vec<PatchEntry>, PatchError> {
    parse_patch(text, options)?
        .iter()
        .enumerate()
        .map(|(index, raw)| PatchEntry::from_json(raw).map_err(|e| PatchError::invalid_patch(index, e)))
        .collect()
}

/// Encodes entries as patch text.
pub fn encode_patch(entries: &[PatchEntry], options: &PatchOptions) -> Result<String, PatchError> {
    let patch = Value::Array(entries.iter().map(PatchEntry::to_json).collect());
    encode_document(&patch, options)
}
