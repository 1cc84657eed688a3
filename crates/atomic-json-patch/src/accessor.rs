//! Typed access to the two JSON container kinds.
//!
//! [`ArrayAccessor`] and [`ObjectAccessor`] give arrays and objects the same
//! surface so the navigator can treat "the parent of the last token"
//! uniformly. Absence is always an explicit `None` or [`AccessError::Absent`].

use atomic_json_patch_pointer::{is_valid_index, APPEND_TOKEN};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::Written;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("member does not exist")]
    Absent,
    #[error("index \"{index}\" is outside the array boundaries")]
    Boundary { index: String },
    #[error("the append token only applies to arrays")]
    AppendToNonArray,
}

/// Uniform operations over a JSON container, keyed by a pointer token.
pub trait ContainerAccessor {
    type Container;

    fn exists(&self, container: &Self::Container, token: &str) -> bool;

    fn get<'a>(&self, container: &'a Self::Container, token: &str) -> Option<&'a Value>;

    fn get_mut<'a>(&self, container: &'a mut Self::Container, token: &str)
        -> Option<&'a mut Value>;

    /// Stores `value` under `token`, reporting what happened to the slot.
    fn set(
        &self,
        container: &mut Self::Container,
        token: &str,
        value: Value,
    ) -> Result<Written, AccessError>;

    /// Removes and returns the value under `token`.
    fn delete(&self, container: &mut Self::Container, token: &str) -> Result<Value, AccessError>;

    fn count(&self, container: &Self::Container) -> usize;

    /// Whether keys are positions (array) rather than names (object).
    fn is_ordered_sequence(&self) -> bool;
}

// ── Array ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayAccessor;

impl ArrayAccessor {
    /// Parses a canonical index token; `None` for anything else.
    fn index_of(token: &str) -> Option<usize> {
        if is_valid_index(token) {
            token.parse().ok()
        } else {
            None
        }
    }
}

impl ContainerAccessor for ArrayAccessor {
    type Container = Vec<Value>;

    fn exists(&self, container: &Vec<Value>, token: &str) -> bool {
        Self::index_of(token).is_some_and(|index| index < container.len())
    }

    fn get<'a>(&self, container: &'a Vec<Value>, token: &str) -> Option<&'a Value> {
        Self::index_of(token).and_then(|index| container.get(index))
    }

    fn get_mut<'a>(&self, container: &'a mut Vec<Value>, token: &str) -> Option<&'a mut Value> {
        Self::index_of(token).and_then(move |index| container.get_mut(index))
    }

    /// Inserts or appends; never overwrites an element.
    fn set(&self, container: &mut Vec<Value>, token: &str, value: Value) -> Result<Written, AccessError> {
        if token == APPEND_TOKEN {
            container.push(value);
            return Ok(Written::Inserted(container.len() - 1));
        }
        match Self::index_of(token) {
            Some(index) if index <= container.len() => {
                container.insert(index, value);
                Ok(Written::Inserted(index))
            }
            _ => Err(AccessError::Boundary {
                index: token.to_string(),
            }),
        }
    }

    fn delete(&self, container: &mut Vec<Value>, token: &str) -> Result<Value, AccessError> {
        match Self::index_of(token) {
            Some(index) if index < container.len() => Ok(container.remove(index)),
            _ => Err(AccessError::Absent),
        }
    }

    fn count(&self, container: &Vec<Value>) -> usize {
        container.len()
    }

    fn is_ordered_sequence(&self) -> bool {
        true
    }
}

// ── Object ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectAccessor;

impl ObjectAccessor {
    /// Upserts a member under any name, `-` included.
    pub fn insert(&self, container: &mut Map<String, Value>, token: &str, value: Value) -> Written {
        match container.insert(token.to_string(), value) {
            Some(previous) => Written::Replaced(previous),
            None => Written::Created,
        }
    }
}

impl ContainerAccessor for ObjectAccessor {
    type Container = Map<String, Value>;

    fn exists(&self, container: &Map<String, Value>, token: &str) -> bool {
        container.contains_key(token)
    }

    fn get<'a>(&self, container: &'a Map<String, Value>, token: &str) -> Option<&'a Value> {
        container.get(token)
    }

    fn get_mut<'a>(&self, container: &'a mut Map<String, Value>, token: &str) -> Option<&'a mut Value> {
        container.get_mut(token)
    }

    /// Upserts a member, keeping its position when it already exists.
    fn set(
        &self,
        container: &mut Map<String, Value>,
        token: &str,
        value: Value,
    ) -> Result<Written, AccessError> {
        if token == APPEND_TOKEN {
            return Err(AccessError::AppendToNonArray);
        }
        Ok(self.insert(container, token, value))
    }

    fn delete(&self, container: &mut Map<String, Value>, token: &str) -> Result<Value, AccessError> {
        container.shift_remove(token).ok_or(AccessError::Absent)
    }

    fn count(&self, container: &Map<String, Value>) -> usize {
        container.len()
    }

    fn is_ordered_sequence(&self) -> bool {
        false
    }
}
