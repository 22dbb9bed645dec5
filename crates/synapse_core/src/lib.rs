//! # SYNAPSE Core
//!
//! Thread hand-off primitives for the engine:
//! - [`BlockingQueue`]: a mutex-protected FIFO that producers push into and
//!   consumers block on
//! - [`ScopedThread`]: an RAII owner of one running thread, joined exactly
//!   once when the owner is dropped
//!
//! ## Architecture Rules
//!
//! 1. **Two suspension points only** - `BlockingQueue::pop` and dropping a
//!    `ScopedThread`; everything else holds a lock briefly or not at all
//! 2. **No cancellation surface** - shutdown travels through the queue as a
//!    sentinel value of the payload type
//! 3. **Ownership is structural** - a worker thread has exactly one owner and
//!    only that owner can join it
//!
//! ## Example
//!
//! ```rust,ignore
//! use synapse_core::{BlockingQueue, ScopedThread};
//! use std::sync::Arc;
//!
//! let jobs: Arc<BlockingQueue<Option<Job>>> = Arc::new(BlockingQueue::new());
//!
//! let worker = {
//!     let jobs = Arc::clone(&jobs);
//!     ScopedThread::spawn("asset-loader", move || {
//!         while let Some(job) = jobs.pop() {
//!             job.run();
//!         }
//!     })?
//! };
//!
//! jobs.push(Some(load_textures));
//! jobs.push(None); // sentinel: worker loop exits
//! // `worker` drops here and blocks until the loop has returned
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod sync;

pub use error::{SyncError, SyncResult};
pub use sync::{BlockingQueue, ScopedThread};
