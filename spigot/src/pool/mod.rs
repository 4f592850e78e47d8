//! # Worker Pool Module
//!
//! Parallel computation of a range of digit positions.
//!
//! ## Key Concepts
//! - Task pool: one queue of positions and one result table behind one lock
//! - Workers: a fixed set of OS threads, one per logical CPU by default
//! - Coordinator: spawns, joins and assembles the ordered digit string
//!
//! ## Design Principles
//! - The expensive arithmetic never runs inside the critical section
//! - Claiming a position is a single atomic check-and-pop
//! - Shared state is passed explicitly and lives only as long as a run

pub mod cancel;
pub mod coordinator;
pub mod progress;
pub mod task_pool;
pub mod worker;

pub use cancel::CancellationToken;
pub use coordinator::{validate_digit_count, Coordinator, RunReport};
pub use progress::{ProgressEvent, ProgressReporter};
pub use task_pool::{TaskPool, TaskState};
pub use worker::{Worker, WorkerStats, WorkerStatus};
