//! Type definitions for JSON Pointer.

/// A step in a JSON Pointer path, already unescaped.
///
/// Array indices are kept in their textual form; whether a step is a valid
/// index depends on the container it is applied to.
pub type PathStep = String;

/// A JSON Pointer path. The empty path addresses the document root.
pub type Path = Vec<PathStep>;
