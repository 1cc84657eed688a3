//! Core types for the patch engine.

use serde_json::{Map, Value};

pub use atomic_json_patch_pointer::Path;

// ── PatchEntry ────────────────────────────────────────────────────────────

/// A single operation of a JSON Patch document.
///
/// `path` and `from` are kept in their raw pointer form: whether they are
/// well-formed is decided by the operation's validation, not at
/// construction. Members other than `op`, `path`, `value` and `from` are
/// preserved in `extra` so custom operations can read them.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchEntry {
    pub op: String,
    pub path: String,
    pub value: Option<Value>,
    pub from: Option<String>,
    pub extra: Map<String, Value>,
    /// Marks a revert entry that puts back a location which existed before
    /// the forward operation. Its write may recreate an object member named
    /// `-`. Never set by decoding.
    pub restore: bool,
}

impl PatchEntry {
    pub fn new(op: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            path: path.into(),
            value: None,
            from: None,
            extra: Map::new(),
            restore: false,
        }
    }

    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::new("add", path).with_value(value)
    }

    /// An `add` that puts a removed value back where it was.
    pub fn restore(path: impl Into<String>, value: Value) -> Self {
        Self::add(path, value).restoring()
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new("remove", path)
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::new("replace", path).with_value(value)
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new("move", path).with_from(from)
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new("copy", path).with_from(from)
    }

    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Self::new("test", path).with_value(value)
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Marks the entry as a restoring revert.
    pub fn restoring(mut self) -> Self {
        self.restore = true;
        self
    }

    /// Attaches an extra member, e.g. a parameter of a custom operation.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

// ── Revert / Written ──────────────────────────────────────────────────────

/// The inverse of one applied entry.
///
/// Applied in order against the state right after the forward operation,
/// the entries restore the state right before it. Empty means the forward
/// operation did not mutate anything.
pub type Revert = Vec<PatchEntry>;

/// Outcome of writing a value into a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Written {
    /// The value was inserted into an array at this index.
    Inserted(usize),
    /// A new object member was created.
    Created,
    /// An existing object member, or the document root, was overwritten.
    Replaced(Value),
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for decoding, applying and encoding documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Maximum container nesting depth accepted when decoding JSON text.
    /// `None` leaves the limit to the JSON parser.
    pub max_depth: Option<usize>,
    /// Pretty-print encoded documents.
    pub pretty: bool,
}

impl PatchOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}
