//! # Hand-Off Error Types
//!
//! All errors that can occur in the thread hand-off primitives.
//!
//! The list is deliberately short. Lock and condition-variable operations are
//! infallible at this layer (`parking_lot` has no poisoning), and a `pop`
//! that can never be satisfied is a logical deadlock owned by the caller's
//! shutdown protocol, not an error value.

use std::io;
use thiserror::Error;

/// Errors that can occur in the thread hand-off primitives.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The OS refused to create a worker thread.
    #[error("failed to spawn thread {name:?}: {source}")]
    Spawn {
        /// Name the thread would have carried.
        name: String,
        /// Underlying OS error.
        source: io::Error,
    },

    /// A worker thread panicked before or while being joined.
    ///
    /// Returned only from an explicit [`crate::ScopedThread::join`]; when the
    /// panic is discovered during drop instead, the payload is re-raised on
    /// the joining thread.
    #[error("worker thread {name:?} panicked")]
    WorkerPanic {
        /// Name of the panicked thread, if it had one.
        name: Option<String>,
    },
}

/// Convenience result type for hand-off operations.
pub type SyncResult<T> = Result<T, SyncError>;
