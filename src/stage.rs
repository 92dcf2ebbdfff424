//! Stage threads and the channels that connect them.
//!
//! Every source and transformer runs its body on a dedicated thread. The body
//! receives an [`Emitter`] wrapping the sending half of a fresh
//! `crossbeam` bounded channel; the receiving half is handed back to the
//! caller and becomes the next [`Iter`](crate::Iter). When the body returns,
//! the emitter is dropped and the consumer sees the end of the sequence.

use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{debug, error, trace};

use crate::config::StageConfig;
use crate::error::Disconnected;

/// Sending half handed to a stage body.
pub(crate) struct Emitter<T> {
    tx: Sender<T>,
}

impl<T> Emitter<T> {
    /// Blocks until the consumer takes `value` (or a slot frees up when the
    /// channel has capacity). Fails once the consumer has dropped its end.
    pub(crate) fn send(&self, value: T) -> Result<(), Disconnected> {
        self.tx.send(value).map_err(|_| Disconnected)
    }
}

/// Logs when a stage thread unwinds out of a caller callback.
struct PanicLog {
    stage: &'static str,
}

impl Drop for PanicLog {
    fn drop(&mut self) {
        if thread::panicking() {
            error!(stage = self.stage, "stage callback panicked, ending its sequence early");
        }
    }
}

/// Start `body` on its own thread and return the receiver it feeds.
///
/// # Panics
///
/// Panics if the OS refuses to create the thread, like [`std::thread::spawn`].
pub(crate) fn spawn<U, F>(config: &StageConfig, stage: &'static str, body: F) -> Receiver<U>
where
    U: Send + 'static,
    F: FnOnce(&Emitter<U>) -> Result<(), Disconnected> + Send + 'static,
{
    let (tx, rx) = channel::bounded(config.capacity);

    let mut builder = thread::Builder::new().name(config.stage_thread_name(stage));
    if let Some(size) = config.stack_size {
        builder = builder.stack_size(size);
    }

    let spawned = builder.spawn(move || {
        let _panic_log = PanicLog { stage };
        let out = Emitter { tx };
        debug!(stage, "stage started");
        match body(&out) {
            Ok(()) => debug!(stage, "stage finished"),
            Err(Disconnected) => trace!(stage, "consumer hung up, stopping early"),
        }
    });
    if let Err(err) = spawned {
        panic!("failed to spawn `{stage}` stage thread: {err}");
    }

    rx
}

/// Push `0, 1, 2, ...` into `tx` until its receiver is dropped. Returns
/// how many values were taken, or `None` if a send waited more than five
/// seconds with the receiver still alive.
#[cfg(test)]
pub(crate) fn feed_until_hangup(tx: Sender<u64>) -> Option<u64> {
    use std::time::Duration;

    use crossbeam::channel::SendTimeoutError;

    for v in 0u64.. {
        match tx.send_timeout(v, Duration::from_secs(5)) {
            Ok(()) => {}
            Err(SendTimeoutError::Disconnected(_)) => return Some(v),
            Err(SendTimeoutError::Timeout(_)) => return None,
        }
    }
    None
}
