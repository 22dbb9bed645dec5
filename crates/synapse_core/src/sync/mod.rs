//! # Synchronization Primitives for Cross-Thread Hand-Off
//!
//! ## The Problem
//!
//! ```text
//! Thread 1 (Main/Game loop):   produces work (assets, compute requests)
//! Thread 2 (Background):       consumes work, must sleep when idle
//!
//! Busy-polling a shared Vec:   WASTED CORES
//! Detached worker threads:     USE-AFTER-FREE on engine shutdown
//! ```
//!
//! ## The Solution
//!
//! ```text
//! BlockingQueue:  producers push under a mutex, a condvar wakes one sleeping
//!                 consumer per push; pop() re-checks the predicate in a loop
//!
//! ScopedThread:   the worker handle lives inside an owner whose Drop joins,
//!                 so no scope can exit while its worker is still running
//! ```
//!
//! Exactly two suspension points: `pop` on an empty queue, and dropping the
//! thread owner. Neither holds the queue lock while suspended.

mod blocking_queue;
mod scoped_thread;

pub use blocking_queue::BlockingQueue;
pub use scoped_thread::ScopedThread;
