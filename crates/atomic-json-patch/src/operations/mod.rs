//! Patch operations.
//!
//! Every operation, built-in or user-registered, implements
//! [`PatchOperation`]: a validation pass that never touches the document,
//! and an application that mutates it and returns the entries undoing the
//! mutation.

mod add;
mod copy;
mod move_op;
mod remove;
mod replace;

pub use add::AddOp;
pub use copy::CopyOp;
pub use move_op::MoveOp;
pub use remove::RemoveOp;
pub use replace::ReplaceOp;
pub use test::TestOp;

use atomic_json_patch_pointer::{format_json_pointer, with_last};
use serde_json::Value;

use crate::error::PatchError;
use crate::types::{PatchEntry, Revert, Written};

/// A named patch operation.
///
/// Handlers are stateless: everything they need comes from the entry and
/// the document.
pub trait PatchOperation: Send + Sync {
    /// The `op` member this handler is registered under.
    fn name(&self) -> &str;

    /// Checks the entry's members without looking at the document.
    fn validate(&self, entry: &PatchEntry) -> Result<(), PatchError>;

    /// Applies a validated entry and returns its [`Revert`].
    ///
    /// During rollback, handlers also receive revert entries. Those with
    /// `restore` set put back a location that existed before.
    ///
    /// On error the document must be left as it was before the call.
    fn apply(&self, document: &mut Value, entry: &PatchEntry) -> Result<Revert, PatchError>;
}

/// The six RFC 6902 operations, in registration order.
pub fn builtin() -> Vec<Box<dyn PatchOperation>> {
    vec![
        Box::new(AddOp),
        Box::new(RemoveOp),
        Box::new(ReplaceOp),
        Box::new(MoveOp),
        Box::new(CopyOp),
        Box::new(TestOp),
    ]
}

/// Builds the revert of a write at `path`.
///
/// Array writes are undone at the index the value actually landed at, so
/// an append (`/list/-`) is reverted by removing that concrete index.
pub(crate) fn revert_write(path: &[String], written: Written) -> Result<Revert, PatchError> {
    let entry = match written {
        Written::Inserted(index) => PatchEntry::remove(format_json_pointer(&with_last(path, index.to_string())?)),
        Written::Created => PatchEntry::remove(format_json_pointer(path)),
        Written::Replaced(previous) => PatchEntry::replace(format_json_pointer(path), previous),
    };
    Ok(vec![entry])
}
