//! # Blocking FIFO Queue
//!
//! Multi-producer, multi-consumer hand-off queue. Producers never wait on
//! queue state; consumers sleep on a condvar until something arrives.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// A thread-safe FIFO queue whose `pop` blocks until an element is available.
///
/// All access to the inner sequence goes through one mutex; a condition
/// variable paired with that mutex wakes one sleeping consumer per push.
/// FIFO order is exact in the total order imposed by the lock: the nth
/// successful pop returns the nth successful push. Wake order among several
/// blocked consumers is whatever the OS decides, so tests must not assume
/// round-robin fairness.
///
/// # Shutdown
///
/// There is no timeout and no cancellation. A blocked `pop` returns only when
/// a later `push` feeds it. Callers that need to stop a consumer loop push a
/// sentinel value of `T` (for example `None` with `T = Option<Job>`) and have
/// the loop exit on receiving it.
///
/// # Example
///
/// ```rust,ignore
/// let queue: Arc<BlockingQueue<u32>> = Arc::new(BlockingQueue::new());
///
/// let consumer = queue.clone();
/// thread::spawn(move || {
///     let value = consumer.pop(); // sleeps until the push below
/// });
///
/// queue.push(42);
/// ```
pub struct BlockingQueue<T> {
    /// The FIFO sequence. Touched only while `items`' mutex is held.
    items: Mutex<VecDeque<T>>,
    /// Signalled after every push; waiters re-check the predicate on wake.
    available: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// Appends `value` to the tail of the queue and wakes one sleeping
    /// consumer.
    ///
    /// Never blocks on queue state, only briefly on the lock. Infallible.
    pub fn push(&self, value: T) {
        let mut items = self.items.lock();
        items.push_back(value);
        // Signal outside the critical section so the woken consumer does not
        // immediately sleep again on a still-held lock.
        drop(items);
        self.available.notify_one();
    }

    /// Removes and returns the head of the queue, blocking until one exists.
    ///
    /// The wait is a predicate loop: a wakeup with the queue still empty
    /// (spurious, or a racing consumer took the element first) goes back to
    /// sleep. The lock is released for the duration of each wait.
    ///
    /// Blocks forever if nothing is ever pushed; see the type-level docs for
    /// the sentinel shutdown protocol.
    pub fn pop(&self) -> T {
        let mut items = self.items.lock();
        loop {
            if let Some(value) = items.pop_front() {
                return value;
            }
            self.available.wait(&mut items);
        }
    }

    /// Removes and returns the head of the queue if one exists, without
    /// waiting.
    ///
    /// Self-contained under a single lock acquisition: check and removal
    /// cannot be split by another thread.
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    /// Returns the number of queued elements.
    ///
    /// Advisory snapshot only: another thread may push or pop before the
    /// caller acts on the answer. Never use it to guard a later `pop`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Returns whether the queue is currently empty.
    ///
    /// Same advisory caveat as [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
