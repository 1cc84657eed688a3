//! Pointer-driven reads and writes over a JSON document.
//!
//! Mutations walk down with `&mut` to the container that holds the last
//! token and act on that single link; nothing above it is touched.

use std::mem;

use atomic_json_patch_pointer::format_json_pointer;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::accessor::{AccessError, ArrayAccessor, ContainerAccessor, ObjectAccessor};
use crate::error::PatchError;
use crate::types::Written;

/// The container holding the last token of a path.
#[derive(Debug)]
pub enum Parent<'a, 't> {
    /// The path is empty; the slot is the document itself.
    Root(&'a mut Value),
    Array(&'a mut Vec<Value>, &'t str),
    Object(&'a mut Map<String, Value>, &'t str),
}

fn snapshot<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

fn unknown_path(path: &[String], document: Option<String>) -> PatchError {
    PatchError::UnknownPath {
        pointer: format_json_pointer(path),
        document,
    }
}

fn access_failure(err: AccessError, path: &[String], document: Option<String>) -> PatchError {
    let pointer = format_json_pointer(path);
    match err {
        AccessError::Absent => PatchError::UnknownPath { pointer, document },
        AccessError::Boundary { index } => PatchError::ArrayBoundary {
            pointer,
            index,
            document,
        },
        AccessError::AppendToNonArray => PatchError::AppendToNonArray { pointer },
    }
}

/// Descends one token, reporting the container where the walk stopped.
fn child_mut<'a>(node: &'a mut Value, token: &str, path: &[String]) -> Result<&'a mut Value, PatchError> {
    match node {
        Value::Array(arr) => {
            if !ArrayAccessor.exists(arr, token) {
                return Err(unknown_path(path, snapshot(&*arr)));
            }
            ArrayAccessor
                .get_mut(arr, token)
                .ok_or_else(|| unknown_path(path, None))
        }
        Value::Object(map) => {
            if !ObjectAccessor.exists(map, token) {
                return Err(unknown_path(path, snapshot(&*map)));
            }
            ObjectAccessor
                .get_mut(map, token)
                .ok_or_else(|| unknown_path(path, None))
        }
        scalar => Err(unknown_path(path, snapshot(&*scalar))),
    }
}

/// Walks every token but the last and returns the container that holds it.
///
/// # Errors
///
/// [`PatchError::UnknownPath`] when an intermediate token is absent or a
/// non-terminal node is a scalar.
pub fn resolve_parent<'a, 't>(document: &'a mut Value, path: &'t [String]) -> Result<Parent<'a, 't>, PatchError> {
    let Some((last, init)) = path.split_last() else {
        return Ok(Parent::Root(document));
    };
    let mut node = document;
    for token in init {
        node = child_mut(node, token, path)?;
    }
    match node {
        Value::Array(arr) => Ok(Parent::Array(arr, last.as_str())),
        Value::Object(map) => Ok(Parent::Object(map, last.as_str())),
        scalar => Err(unknown_path(path, snapshot(&*scalar))),
    }
}

/// Returns the value at `path`.
pub fn read<'a>(document: &'a Value, path: &[String]) -> Result<&'a Value, PatchError> {
    let mut node = document;
    for token in path {
        let next = match node {
            Value::Array(arr) => ArrayAccessor.get(arr, token),
            Value::Object(map) => ObjectAccessor.get(map, token),
            _ => None,
        };
        node = next.ok_or_else(|| unknown_path(path, snapshot(node)))?;
    }
    Ok(node)
}

/// Stores `value` at `path`: array insert/append, object upsert, or root
/// replacement.
pub fn write(document: &mut Value, path: &[String], value: Value) -> Result<Written, PatchError> {
    store(document, path, value, false)
}

/// Puts a previously removed value back at `path`.
///
/// Same as [`write`] except that an object member named `-` is recreated
/// rather than rejected as an append.
pub fn restore(document: &mut Value, path: &[String], value: Value) -> Result<Written, PatchError> {
    store(document, path, value, true)
}

fn store(document: &mut Value, path: &[String], value: Value, restoring: bool) -> Result<Written, PatchError> {
    match resolve_parent(document, path)? {
        Parent::Root(slot) => Ok(Written::Replaced(mem::replace(slot, value))),
        Parent::Array(arr, token) => match ArrayAccessor.set(arr, token, value) {
            Ok(written) => Ok(written),
            Err(err) => Err(access_failure(err, path, snapshot(&*arr))),
        },
        Parent::Object(map, token) if restoring => Ok(ObjectAccessor.insert(map, token, value)),
        Parent::Object(map, token) => match ObjectAccessor.set(map, token, value) {
            Ok(written) => Ok(written),
            Err(err) => Err(access_failure(err, path, snapshot(&*map))),
        },
    }
}

/// Swaps the value at an existing location, returning the previous one.
pub fn update(document: &mut Value, path: &[String], value: Value) -> Result<Value, PatchError> {
    let slot = match resolve_parent(document, path)? {
        Parent::Root(slot) => slot,
        Parent::Array(arr, token) => {
            if !ArrayAccessor.exists(arr, token) {
                return Err(unknown_path(path, snapshot(&*arr)));
            }
            ArrayAccessor
                .get_mut(arr, token)
                .ok_or_else(|| unknown_path(path, None))?
        }
        Parent::Object(map, token) => {
            if !ObjectAccessor.exists(map, token) {
                return Err(unknown_path(path, snapshot(&*map)));
            }
            ObjectAccessor
                .get_mut(map, token)
                .ok_or_else(|| unknown_path(path, None))?
        }
    };
    Ok(mem::replace(slot, value))
}

/// Removes and returns the value at `path`.
///
/// # Errors
///
/// Deleting the root is an internal error: no operation removes the
/// document itself.
pub fn delete(document: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    match resolve_parent(document, path)? {
        Parent::Root(_) => Err(PatchError::Internal("cannot delete the document root".to_string())),
        Parent::Array(arr, token) => match ArrayAccessor.delete(arr, token) {
            Ok(removed) => Ok(removed),
            Err(err) => Err(access_failure(err, path, snapshot(&*arr))),
        },
        Parent::Object(map, token) => match ObjectAccessor.delete(map, token) {
            Ok(removed) => Ok(removed),
            Err(err) => Err(access_failure(err, path, snapshot(&*map))),
        },
    }
}
