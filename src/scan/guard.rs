use std::{
    sync::{
        atomic::{AtomicU8, Ordering},
        Mutex,
    },
    time::{Duration, Instant},
};

pub const SCAN_COOLDOWN: Duration = Duration::from_millis(1000);

const IDLE: u8 = 0;
const SCANNING: u8 = 1;
const COOLDOWN: u8 = 2;

/// Re-entrancy guard around scan handling: Idle -> Scanning -> Cooldown ->
/// Idle. A wedge scanner re-emits the same code many times while it stays in
/// front of the reader; entry is a synchronous compare-and-swap so a second
/// read can never slip in while the first is still being handled. Purely a
/// UX/cost optimisation: the ledger stays the arbiter of claim uniqueness.
pub struct ScanGuard {
    state: AtomicU8,
    cooldown: Duration,
    cooldown_started: Mutex<Option<Instant>>,
}

impl ScanGuard {
    pub fn new() -> Self {
        Self::with_cooldown(SCAN_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            state: AtomicU8::new(IDLE),
            cooldown,
            cooldown_started: Mutex::new(None),
        }
    }

    /// Returns a permit if the guard is idle (or its cooldown has expired),
    /// `None` otherwise. Dropping the permit starts the cooldown window, on
    /// every exit path including errors.
    pub fn try_begin(&self) -> Option<ScanPermit<'_>> {
        if self.state.load(Ordering::Acquire) == COOLDOWN {
            let expired = self
                .cooldown_started
                .lock()
                .expect("Cooldown lock poisoned")
                .is_some_and(|started| started.elapsed() >= self.cooldown);

            if !expired {
                return None;
            }

            let _ = self
                .state
                .compare_exchange(COOLDOWN, IDLE, Ordering::AcqRel, Ordering::Acquire);
        }

        self.state
            .compare_exchange(IDLE, SCANNING, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        Some(ScanPermit { guard: self })
    }
}

pub struct ScanPermit<'a> {
    guard: &'a ScanGuard,
}

impl Drop for ScanPermit<'_> {
    fn drop(&mut self) {
        *self
            .guard
            .cooldown_started
            .lock()
            .expect("Cooldown lock poisoned") = Some(Instant::now());

        self.guard.state.store(COOLDOWN, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_while_scanning() {
        let guard = ScanGuard::with_cooldown(Duration::from_millis(20));

        let permit = guard.try_begin();
        assert!(permit.is_some());
        assert!(guard.try_begin().is_none());

        drop(permit);
    }

    #[test]
    fn rejects_during_cooldown() {
        let guard = ScanGuard::with_cooldown(Duration::from_millis(50));

        drop(guard.try_begin().unwrap());
        assert!(guard.try_begin().is_none());
    }

    #[test]
    fn accepts_after_cooldown_expires() {
        let guard = ScanGuard::with_cooldown(Duration::from_millis(10));

        drop(guard.try_begin().unwrap());
        std::thread::sleep(Duration::from_millis(15));
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn cooldown_starts_even_when_handling_panics() {
        let guard = ScanGuard::with_cooldown(Duration::from_millis(10));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _permit = guard.try_begin().unwrap();
            panic!("scan handler blew up");
        }));
        assert!(result.is_err());

        // Permit was dropped during unwinding, so the guard is cooling down.
        assert!(guard.try_begin().is_none());
        std::thread::sleep(Duration::from_millis(15));
        assert!(guard.try_begin().is_some());
    }
}
