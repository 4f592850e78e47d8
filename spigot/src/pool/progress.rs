//! # Progress Reporting
//!
//! Workers announce each computed digit on a `flume` channel; a reporter
//! thread owns the output stream and prints one marker per event. Workers
//! never touch stdout and never take a lock for it.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};

use flume::{Receiver, Sender};
use tracing::debug;

use spigot_api::DigitPosition;

/// Character printed per computed digit.
pub const PROGRESS_MARKER: u8 = b'.';

/// Event emitted by a worker after recording a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    DigitComputed {
        worker: usize,
        position: DigitPosition,
    },
}

pub type ProgressSender = Sender<ProgressEvent>;

/// Creates an unbounded progress channel.
pub fn channel() -> (ProgressSender, Receiver<ProgressEvent>) {
    flume::unbounded()
}

/// Thread that drains progress events into a writer.
///
/// The reporter stops once every sender has been dropped.
#[derive(Debug)]
pub struct ProgressReporter<W: Write + Send + 'static> {
    handle: JoinHandle<(usize, W)>,
}

impl<W: Write + Send + 'static> ProgressReporter<W> {
    pub fn spawn(events: Receiver<ProgressEvent>, mut out: W) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("spigot-progress".to_string())
            .spawn(move || {
                let mut count = 0usize;
                for _event in events.iter() {
                    count += 1;
                    if let Err(err) = out.write_all(&[PROGRESS_MARKER]).and_then(|_| out.flush()) {
                        debug!(error = %err, "progress output failed");
                    }
                }
                (count, out)
            })?;
        Ok(Self { handle })
    }

    /// Waits for the channel to close; returns the number of events seen and the writer.
    ///
    /// Returns `None` if the reporter thread panicked.
    pub fn finish(self) -> Option<(usize, W)> {
        self.handle.join().ok()
    }
}
