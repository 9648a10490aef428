use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use vitium_core::QuizEvent;

/// How a calculation delay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationOutcome {
    Elapsed,
    Cancelled,
}

#[derive(Debug, Default)]
struct CancelSignal {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Fixed-length delay shown while results are "computed".
///
/// The delay cannot be skipped by the user, but the owner of a
/// `CalculationHandle` can cancel it when the view goes away.
#[derive(Debug)]
pub struct CalculationTimer {
    delay: Duration,
    signal: Arc<CancelSignal>,
}

/// Cancels the `CalculationTimer` it was taken from.
#[derive(Debug, Clone)]
pub struct CalculationHandle {
    signal: Arc<CancelSignal>,
}

impl CalculationTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            signal: Arc::new(CancelSignal::default()),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn handle(&self) -> CalculationHandle {
        CalculationHandle {
            signal: Arc::clone(&self.signal),
        }
    }

    /// Sleeps for the configured delay unless cancelled first.
    pub async fn wait(self) -> CalculationOutcome {
        if self.signal.cancelled.load(Ordering::Acquire) {
            return CalculationOutcome::Cancelled;
        }

        tokio::select! {
            () = tokio::time::sleep(self.delay) => {
                if self.signal.cancelled.load(Ordering::Acquire) {
                    CalculationOutcome::Cancelled
                } else {
                    CalculationOutcome::Elapsed
                }
            }
            () = self.signal.notify.notified() => CalculationOutcome::Cancelled,
        }
    }

    /// Waits, then yields the event that moves the session with `ticket` to results.
    pub async fn wait_for_results(self, ticket: u64) -> Option<QuizEvent> {
        match self.wait().await {
            CalculationOutcome::Elapsed => Some(QuizEvent::CalculationElapsed { ticket }),
            CalculationOutcome::Cancelled => None,
        }
    }
}

impl CalculationHandle {
    pub fn cancel(&self) {
        self.signal.cancelled.store(true, Ordering::Release);
        // notify_one keeps a permit if the timer is not polled yet.
        self.signal.notify.notify_one();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.signal.cancelled.load(Ordering::Acquire)
    }
}
