//! atomic-json-patch-util - JSON value helpers.
//!
//! Small, dependency-light helpers shared by the patch engine: the
//! structural equality behind the `test` operation and the nesting depth
//! check used when decoding documents.

pub mod json_depth;
pub mod json_equal;

// Re-exports for convenience
pub use json_depth::json_depth;
pub use json_equal::{json_equal, number_equal};
