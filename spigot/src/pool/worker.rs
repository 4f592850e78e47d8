//! # Worker Thread Module
//!
//! A worker is a named OS thread that repeatedly claims a digit position
//! from the shared [`TaskPool`], computes it outside the lock, and records
//! the result.
//!
//! ## Core Algorithm
//! 1. Stop if the run was cancelled
//! 2. Claim the next position (check and pop under one lock acquisition)
//! 3. Compute the digit with no lock held
//! 4. Record the result under the lock, then emit a progress event
//! 5. Repeat until the queue is drained
//!
//! An extraction error cancels the run so the remaining workers stop at
//! their next claim.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use spigot_api::{CoordinatorError, DigitExtractor, DigitResult};

use super::cancel::CancellationToken;
use super::progress::{ProgressEvent, ProgressSender};
use super::task_pool::TaskPool;

/// Status codes for worker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    /// Worker is between claims
    Idle = 0,

    /// Worker is computing a digit
    Computing = 1,

    /// Worker drained the queue or observed cancellation
    Finished = 2,

    /// Worker stopped on an extraction or pool error
    Error = 3,
}

impl From<usize> for WorkerStatus {
    fn from(value: usize) -> Self {
        match value {
            0 => WorkerStatus::Idle,
            1 => WorkerStatus::Computing,
            2 => WorkerStatus::Finished,
            _ => WorkerStatus::Error,
        }
    }
}

/// What a worker did during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub id: usize,
    pub computed: usize,
}

pub type WorkerHandle = JoinHandle<Result<WorkerStats, CoordinatorError>>;

pub struct Worker {
    id: usize,
    pool: Arc<TaskPool>,
    extractor: Arc<dyn DigitExtractor>,
    cancel: CancellationToken,
    progress: Option<ProgressSender>,
    status: Arc<AtomicUsize>,
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("extractor", &self.extractor.name())
            .field("status", &self.get_status())
            .finish()
    }
}

impl Worker {
    pub fn new(
        id: usize,
        pool: Arc<TaskPool>,
        extractor: Arc<dyn DigitExtractor>,
        cancel: CancellationToken,
        progress: Option<ProgressSender>,
    ) -> Self {
        Self {
            id,
            pool,
            extractor,
            cancel,
            progress,
            status: Arc::new(AtomicUsize::new(WorkerStatus::Idle as usize)),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Shared handle to the worker's status, readable after `spawn`.
    pub fn status(&self) -> Arc<AtomicUsize> {
        self.status.clone()
    }

    pub fn get_status(&self) -> WorkerStatus {
        self.status.load(Ordering::Relaxed).into()
    }

    /// Launches the worker loop on a thread named `{name_prefix}-{id}`.
    pub fn spawn(self, name_prefix: &str) -> io::Result<WorkerHandle> {
        thread::Builder::new()
            .name(format!("{}-{}", name_prefix, self.id))
            .spawn(move || self.run_loop())
    }

    /// Main worker loop, run on the calling thread.
    pub fn run_loop(self) -> Result<WorkerStats, CoordinatorError> {
        let span = crate::worker_span!(self.id, extractor = self.extractor.name());
        let _guard = span.enter();

        let mut computed = 0usize;
        while !self.cancel.is_cancelled() {
            let Some(position) = self.pool.try_claim_next() else {
                break;
            };
            crate::log_worker!(self.id, "claimed", position = position);

            self.set_status(WorkerStatus::Computing);
            let digit = match self.extractor.compute_digit(position) {
                Ok(digit) => digit,
                Err(err) => {
                    crate::log_error!(err, worker = self.id, position = position);
                    return Err(self.fail(err.into()));
                }
            };

            let result = DigitResult::new(position, digit);
            if let Err(err) = self.pool.record_result(result.position, result.text) {
                crate::log_error!(err, worker = self.id, position = position);
                return Err(self.fail(err.into()));
            }
            computed += 1;

            if let Some(progress) = &self.progress {
                // Reporter gone means nobody is watching; the run continues.
                let _ = progress.send(ProgressEvent::DigitComputed {
                    worker: self.id,
                    position,
                });
            }
            self.set_status(WorkerStatus::Idle);
        }

        self.set_status(WorkerStatus::Finished);
        crate::log_worker!(self.id, "finished", computed = computed);
        Ok(WorkerStats {
            id: self.id,
            computed,
        })
    }

    fn set_status(&self, status: WorkerStatus) {
        self.status.store(status as usize, Ordering::Relaxed);
    }

    fn fail(&self, err: CoordinatorError) -> CoordinatorError {
        self.set_status(WorkerStatus::Error);
        self.cancel.cancel();
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spigot_api::{DigitError, DigitPosition};

    struct Echo;

    impl DigitExtractor for Echo {
        fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError> {
            Ok(position % 10)
        }
    }

    struct FailsAt(DigitPosition);

    impl DigitExtractor for FailsAt {
        fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError> {
            if position == self.0 {
                Err(DigitError::ZeroPosition)
            } else {
                Ok(0)
            }
        }
    }

    #[test]
    fn test_single_worker_drains_pool() {
        let pool = Arc::new(TaskPool::new(12));
        let worker = Worker::new(0, pool.clone(), Arc::new(Echo), CancellationToken::new(), None);
        let status = worker.status();

        let stats = worker.run_loop().unwrap();
        assert_eq!(stats, WorkerStats { id: 0, computed: 12 });
        assert_eq!(WorkerStatus::from(status.load(Ordering::Relaxed)), WorkerStatus::Finished);
        assert_eq!(pool.snapshot_ordered_result().unwrap(), "123456789012");
    }

    #[test]
    fn test_cancelled_worker_claims_nothing() {
        let pool = Arc::new(TaskPool::new(4));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let stats = Worker::new(1, pool.clone(), Arc::new(Echo), cancel, None)
            .run_loop()
            .unwrap();
        assert_eq!(stats.computed, 0);
        assert_eq!(pool.remaining(), 4);
    }

    #[test]
    fn test_extraction_error_cancels_run() {
        let pool = Arc::new(TaskPool::new(5));
        let cancel = CancellationToken::new();
        let worker = Worker::new(2, pool.clone(), Arc::new(FailsAt(3)), cancel.clone(), None);
        let status = worker.status();

        let err = worker.run_loop().unwrap_err();
        assert!(matches!(err, CoordinatorError::Extraction(DigitError::ZeroPosition)));
        assert!(cancel.is_cancelled());
        assert_eq!(WorkerStatus::from(status.load(Ordering::Relaxed)), WorkerStatus::Error);
        assert_eq!(pool.resolved(), 2);
    }

    #[test]
    fn test_extraction_error_leaves_parent_token_alone() {
        let pool = Arc::new(TaskPool::new(5));
        let parent = CancellationToken::new();
        let run = parent.child_token();

        assert!(Worker::new(0, pool, Arc::new(FailsAt(1)), run.clone(), None)
            .run_loop()
            .is_err());
        assert!(run.is_cancelled());
        assert!(!parent.is_cancelled());
    }
}
