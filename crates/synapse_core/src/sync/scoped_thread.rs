//! # Scoped Thread Owner
//!
//! Makes "this thread outlives nothing" a structural guarantee: the handle of
//! a running worker lives inside a [`ScopedThread`], and dropping the owner
//! joins the worker. No caller discipline required.

use crate::error::{SyncError, SyncResult};
use std::panic;
use std::thread::{self, JoinHandle, ThreadId};

/// RAII owner of one running worker thread.
///
/// A `ScopedThread` always owns exactly one joinable thread; Rust's move
/// semantics make a second owner or a double join unrepresentable. Dropping
/// the owner blocks until the worker's closure has returned, on every exit
/// path of the owning scope, including early returns and unwinding.
///
/// There is no way to detach. A worker that must not block its owner's scope
/// on shutdown should exit promptly when it receives the caller's sentinel
/// (see [`BlockingQueue`](crate::BlockingQueue)).
///
/// # Panics in the worker
///
/// If the worker panicked, dropping the owner re-raises the payload on the
/// joining thread, exactly like `std::thread::scope`. Use [`join`](Self::join)
/// instead of drop to observe the panic as a normal [`SyncError`].
///
/// # Example
///
/// ```rust,ignore
/// {
///     let _worker = ScopedThread::spawn("chunk-mesher", move || {
///         mesh_chunks(queue);
///     })?;
///     // ... produce work ...
/// } // blocks here until mesh_chunks returns
/// ```
pub struct ScopedThread {
    /// `Some` for the whole lifetime of the owner. Taken only by `join`
    /// (which consumes `self`) and by `Drop`.
    handle: Option<JoinHandle<()>>,
}

impl ScopedThread {
    /// Spawns a named worker thread and takes ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Spawn`] if the OS refuses to create the thread
    /// (resource exhaustion, or a name containing an interior nul byte).
    /// Recoverable: nothing was spawned, the caller may retry.
    pub fn spawn<F>(name: impl Into<String>, f: F) -> SyncResult<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let name = name.into();
        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(f)
            .map_err(|source| SyncError::Spawn { name: name.clone(), source })?;
        tracing::debug!(name = %name, id = ?handle.thread().id(), "spawned worker thread");
        Ok(Self { handle: Some(handle) })
    }

    /// Adopts an already-running thread.
    ///
    /// A `JoinHandle` is joinable by construction and can only be supplied
    /// once, so adoption cannot fail: the "empty or already-joined handle"
    /// hazard of other runtimes is ruled out by the type system.
    #[must_use]
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle: Some(handle) }
    }

    /// Returns the identifier of the owned thread.
    ///
    /// Diagnostics only; carries no ownership semantics.
    #[must_use]
    pub fn id(&self) -> ThreadId {
        self.handle().thread().id()
    }

    /// Returns the name of the owned thread, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.handle().thread().name()
    }

    /// Returns whether the worker's closure has already returned.
    ///
    /// Advisory snapshot: `false` may be stale by the time the caller acts
    /// on it. Dropping or joining is the only way to synchronize.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle().is_finished()
    }

    /// Joins the worker now, consuming the owner.
    ///
    /// Equivalent to dropping, except a worker panic comes back as a value
    /// instead of being re-raised.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::WorkerPanic`] if the worker's closure panicked.
    pub fn join(mut self) -> SyncResult<()> {
        if let Some(handle) = self.handle.take() {
            let name = handle.thread().name().map(str::to_owned);
            tracing::trace!(name = ?name, "joining worker thread");
            handle
                .join()
                .map_err(|_| SyncError::WorkerPanic { name })?;
        }
        Ok(())
    }

    /// Access to the owned handle.
    fn handle(&self) -> &JoinHandle<()> {
        // Invariant: `handle` is `Some` until `join` or `Drop` takes it, and
        // both retire the owner.
        self.handle
            .as_ref()
            .expect("ScopedThread invariant violated: no owned thread")
    }
}

impl Drop for ScopedThread {
    /// Blocks until the worker's closure has returned, then retires the
    /// handle.
    ///
    /// A worker panic is re-raised here. If this thread is itself already
    /// unwinding, the nested panic aborts the process; a failed join is not a
    /// condition this destructor can report or recover from.
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::trace!(id = ?handle.thread().id(), "joining worker thread on drop");
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl std::fmt::Debug for ScopedThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedThread")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_drop_blocks_until_work_returns() {
        let finished = Arc::new(AtomicBool::new(false));

        {
            let finished = Arc::clone(&finished);
            let _worker = ScopedThread::spawn("t-drop-join", move || {
                thread::sleep(Duration::from_millis(50));
                finished.store(true, Ordering::SeqCst);
            })
            .unwrap();
        }

        // The flag is written as the very last step of the closure; seeing it
        // here proves drop joined rather than detached.
        assert!(finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_spawn_carries_name_and_id() {
        let worker = ScopedThread::spawn("t-named", || {}).unwrap();
        assert_eq!(worker.name(), Some("t-named"));
        let id = worker.id();
        assert_eq!(worker.id(), id);
    }

    #[test]
    fn test_adopt_running_handle() {
        let counter = Arc::new(AtomicU32::new(0));
        let handle = {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        };
        let expected_id = handle.thread().id();

        let worker = ScopedThread::new(handle);
        assert_eq!(worker.id(), expected_id);
        drop(worker);

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_join_is_clean() {
        let ran = Arc::new(AtomicBool::new(false));
        let worker = {
            let ran = Arc::clone(&ran);
            ScopedThread::spawn("t-join", move || {
                ran.store(true, Ordering::SeqCst);
            })
            .unwrap()
        };

        worker.join().unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_join_reports_worker_panic_as_error() {
        let worker = ScopedThread::spawn("t-panic", || {
            panic!("worker exploded");
        })
        .unwrap();

        match worker.join() {
            Err(SyncError::WorkerPanic { name }) => {
                assert_eq!(name.as_deref(), Some("t-panic"));
            }
            other => panic!("expected WorkerPanic, got {other:?}"),
        }
    }

    #[test]
    fn test_is_finished_eventually_true() {
        let worker = ScopedThread::spawn("t-finish", || {}).unwrap();
        while !worker.is_finished() {
            thread::yield_now();
        }
        worker.join().unwrap();
    }
}
