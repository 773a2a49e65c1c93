use std::{
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// A cancellation token, shared between the sampling loop and whatever
/// wants to stop it (e.g. the Ctrl-C handler).
#[derive(Default)]
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl CancellationToken {
    // A poisoned lock still holds a valid bool; nothing else is guarded.
    fn guard(&self) -> MutexGuard<'_, bool> {
        self.mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark the [`CancellationToken`] as cancelled, waking any sleeper.
    ///
    /// This is idempotent; once cancelled, it stays cancelled.
    pub fn cancel(&self) {
        let mut guard = self.guard();

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.guard()
    }

    /// Sleeps for `duration` unless cancelled first.
    ///
    /// Returns whether the token is cancelled after waking up.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = self.guard();

        if duration.is_zero() || *guard {
            return *guard;
        }

        let (guard, _) = self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);

        *guard
    }
}
