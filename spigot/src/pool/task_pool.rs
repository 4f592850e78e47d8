//! # Task Pool
//!
//! Shared work queue of digit positions plus the table of computed digits.
//!
//! ## Thread Safety
//! - Queue and results are guarded jointly by a single `Mutex`
//! - `try_claim_next` and `record_result` are the whole critical section
//!   for a worker's turn, so the emptiness check and the dequeue can never be
//!   split across two lock acquisitions
//! - `lock` is still available for callers that need several operations
//!   under one acquisition
//!
//! ## Lifecycle
//! The queue is filled once with `1..=total_tasks` and only ever drained.
//! The result table starts empty, each position is written once, and the
//! ordered read happens after every worker has been joined.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use spigot_api::{DigitPosition, PoolError};

/// Queue and result table, only reachable through the pool's lock.
#[derive(Debug)]
pub struct TaskState {
    queue: VecDeque<DigitPosition>,
    results: HashMap<DigitPosition, String>,
    total_tasks: DigitPosition,
}

impl TaskState {
    fn new(total_tasks: DigitPosition) -> Self {
        Self {
            queue: (1..=total_tasks).collect(),
            results: HashMap::with_capacity(total_tasks as usize),
            total_tasks,
        }
    }

    /// True when no position is left to hand out.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes the earliest queued position.
    pub fn pop_front(&mut self) -> Result<DigitPosition, PoolError> {
        self.queue.pop_front().ok_or(PoolError::QueueEmpty)
    }

    /// Records the digit text for `position`. A position is written at most once.
    pub fn insert_result(&mut self, position: DigitPosition, text: String) -> Result<(), PoolError> {
        use std::collections::hash_map::Entry;

        match self.results.entry(position) {
            Entry::Occupied(_) => Err(PoolError::DuplicateResult(position)),
            Entry::Vacant(slot) => {
                slot.insert(text);
                Ok(())
            }
        }
    }

    /// Concatenates the results for `1..=total_tasks` in ascending order.
    pub fn snapshot_ordered_result(&self) -> Result<String, PoolError> {
        let mut out = String::with_capacity(self.total_tasks as usize);
        for position in 1..=self.total_tasks {
            let text = self
                .results
                .get(&position)
                .ok_or(PoolError::Incomplete { missing: position })?;
            out.push_str(text);
        }
        Ok(out)
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn resolved(&self) -> usize {
        self.results.len()
    }
}

/// Work queue and result table shared by all workers of a run.
pub struct TaskPool {
    total_tasks: DigitPosition,
    state: Mutex<TaskState>,
}

impl fmt::Debug for TaskPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("TaskPool")
            .field("total_tasks", &self.total_tasks)
            .field("remaining", &state.remaining())
            .field("resolved", &state.resolved())
            .finish()
    }
}

impl TaskPool {
    /// Creates a pool whose queue holds `1..=total_tasks` in order.
    pub fn new(total_tasks: DigitPosition) -> Self {
        Self {
            total_tasks,
            state: Mutex::new(TaskState::new(total_tasks)),
        }
    }

    /// Acquires the pool lock; it is released when the guard drops.
    ///
    /// Every critical section is a single queue or map operation, so the
    /// state stays consistent even if a holder panicked and the lock is
    /// recovered from poisoning.
    pub fn lock(&self) -> MutexGuard<'_, TaskState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the next position, or `None` once the queue is drained.
    pub fn try_claim_next(&self) -> Option<DigitPosition> {
        let mut state = self.lock();
        if state.is_empty() {
            return None;
        }
        state.pop_front().ok()
    }

    /// Stores the digit for `position` and returns how many positions are resolved.
    pub fn record_result(&self, position: DigitPosition, text: String) -> Result<usize, PoolError> {
        let mut state = self.lock();
        state.insert_result(position, text)?;
        Ok(state.resolved())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.lock().remaining()
    }

    pub fn resolved(&self) -> usize {
        self.lock().resolved()
    }

    pub fn total_tasks(&self) -> DigitPosition {
        self.total_tasks
    }

    /// Positions that have a recorded digit, ascending.
    pub fn result_keys(&self) -> Vec<DigitPosition> {
        let mut keys: Vec<DigitPosition> = self.lock().results.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Ordered digit string; only meaningful once every worker has finished.
    pub fn snapshot_ordered_result(&self) -> Result<String, PoolError> {
        self.lock().snapshot_ordered_result()
    }
}
