//! Binding-level errors.

use plist_pool::{Handle, Kind, Pool};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A typed import was handed a handle of a different store kind.
    #[error("kind mismatch: expected {expected:?}, found {found:?}")]
    KindMismatch { expected: Kind, found: Kind },
    /// A node-addressed removal was handed a node that is not attached
    /// under the container it was called on.
    #[error("node is not a child of this container")]
    NotAChild,
}

pub(crate) fn expect_kind(pool: &Pool, handle: Handle, expected: Kind) -> Result<(), TreeError> {
    let found = pool.kind(handle);
    if found == expected {
        Ok(())
    } else {
        Err(TreeError::KindMismatch { expected, found })
    }
}
