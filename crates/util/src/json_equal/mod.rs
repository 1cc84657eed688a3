//! JSON equality utilities.
//!
//! Provides the structural equality used by the `test` operation.

mod deep_equal;

pub use deep_equal::{json_equal, number_equal};
