//! # Coordinator
//!
//! Drives one run: validates the digit count, fills a [`TaskPool`], spawns a
//! fixed set of [`Worker`] threads, joins all of them and assembles the
//! ordered digit string.
//!
//! ## Thread Safety
//! - The pool is shared through an `Arc` owned jointly by the coordinator
//!   and its workers for the duration of the run; there is no global state
//! - The ordered read happens strictly after every worker has been joined
//! - Joining blocks without a timeout; a [`CancellationToken`] is the only
//!   way to cut a run short

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use spigot_api::{CoordinatorError, DigitExtractor, DigitPosition, MAX_DIGIT_POSITION};

use crate::config::SpigotConfig;
use crate::digits::BellardExtractor;

use super::cancel::CancellationToken;
use super::progress::{self, ProgressReporter};
use super::task_pool::TaskPool;
use super::worker::{Worker, WorkerHandle, WorkerStats};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    /// Digits after the decimal point, ordered by position.
    pub digits: String,
    pub worker_count: usize,
    pub elapsed: Duration,
    pub workers: Vec<WorkerStats>,
}

/// Checks a requested digit count before any work is scheduled.
pub fn validate_digit_count(requested: u64) -> Result<DigitPosition, CoordinatorError> {
    match DigitPosition::try_from(requested) {
        Ok(count) if (1..=MAX_DIGIT_POSITION).contains(&count) => Ok(count),
        _ => Err(CoordinatorError::InvalidDigitCount {
            requested,
            max: MAX_DIGIT_POSITION,
        }),
    }
}

pub struct Coordinator {
    config: SpigotConfig,
    extractor: Arc<dyn DigitExtractor>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("config", &self.config)
            .field("extractor", &self.extractor.name())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl Coordinator {
    /// Coordinator computing decimal digits of π with the spigot method.
    pub fn new(config: SpigotConfig) -> Self {
        Self::with_extractor(config, Arc::new(BellardExtractor))
    }

    pub fn with_extractor(config: SpigotConfig, extractor: Arc<dyn DigitExtractor>) -> Self {
        Self {
            config,
            extractor,
            cancel: CancellationToken::new(),
        }
    }

    /// Uses `token` instead of a fresh one, so a run can be cancelled by
    /// whoever else holds it.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &SpigotConfig {
        &self.config
    }

    /// Token that stops workers at their next claim when cancelled.
    ///
    /// Only the holder of the token cancels it; worker failures stop their own
    /// run without touching it. Cancellation is permanent: later runs on this
    /// coordinator return `Cancelled` unless a fresh token is installed with
    /// `with_cancellation`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Computes `total_digits` digits and returns them in position order.
    pub fn run(&self, total_digits: u64) -> Result<RunReport, CoordinatorError> {
        let total = validate_digit_count(total_digits)?;
        let run_id = Uuid::new_v4();
        let worker_count = self.config.effective_workers();

        let span = crate::run_span!(run_id, total, workers = worker_count);
        let _guard = span.enter();
        crate::log_run!("started", extractor = self.extractor.name());

        let started = Instant::now();
        let pool = Arc::new(TaskPool::new(total));
        let workers = self.drive(&pool, worker_count)?;

        if self.cancel.is_cancelled() && pool.resolved() < total as usize {
            crate::log_run!("cancelled", resolved = pool.resolved());
            return Err(CoordinatorError::Cancelled);
        }

        let digits = pool.snapshot_ordered_result()?;
        let elapsed = started.elapsed();
        crate::log_run!(
            "completed",
            digits = digits.len(),
            elapsed_ms = elapsed.as_millis() as u64
        );

        Ok(RunReport {
            run_id,
            digits,
            worker_count,
            elapsed,
            workers,
        })
    }

    /// Runs `worker_count` workers against `pool` until it is drained or the
    /// run is cancelled, then joins every one of them.
    ///
    /// The first worker error wins over errors caused by the cancellation
    /// that error triggered.
    pub fn drive(
        &self,
        pool: &Arc<TaskPool>,
        worker_count: usize,
    ) -> Result<Vec<WorkerStats>, CoordinatorError> {
        let (progress_tx, reporter) = if self.config.show_progress {
            let (tx, rx) = progress::channel();
            let reporter = ProgressReporter::spawn(rx, io::stdout()).map_err(reporter_error)?;
            (Some(tx), Some(reporter))
        } else {
            (None, None)
        };

        // Internal failures stop this run only; the caller's token is left alone.
        let stop = self.cancel.child_token();

        let mut handles: Vec<(usize, WorkerHandle)> = Vec::with_capacity(worker_count);
        let mut spawn_error = None;
        for id in 0..worker_count.max(1) {
            let worker = Worker::new(
                id,
                pool.clone(),
                self.extractor.clone(),
                stop.clone(),
                progress_tx.clone(),
            );
            match worker.spawn(&self.config.thread_name_prefix) {
                Ok(handle) => handles.push((id, handle)),
                Err(err) => {
                    crate::log_error!(err, worker = id);
                    stop.cancel();
                    spawn_error = Some(CoordinatorError::WorkerSpawn(err.to_string()));
                    break;
                }
            }
        }
        // The reporter exits once the workers' senders are gone.
        drop(progress_tx);

        let mut stats = Vec::with_capacity(handles.len());
        let mut first_error = spawn_error;
        for (id, handle) in handles {
            match handle.join() {
                Ok(Ok(worker_stats)) => stats.push(worker_stats),
                Ok(Err(err)) => {
                    first_error.get_or_insert(err);
                }
                Err(_) => {
                    stop.cancel();
                    first_error.get_or_insert(CoordinatorError::WorkerPanicked { worker: id });
                }
            }
        }

        if let Some(reporter) = reporter {
            if reporter.finish().is_none() {
                tracing::warn!("progress reporter panicked");
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(stats),
        }
    }
}

fn reporter_error(err: io::Error) -> CoordinatorError {
    anyhow::Error::new(err)
        .context("failed to start progress reporter")
        .into()
}
