//! One-shot timer slot
//!
//! Each engine owns a single slot, so at most one timer can be pending per
//! engine. Scheduling replaces whatever was pending; the old callback is
//! simply dropped and can never fire.

#[derive(Debug, Clone)]
struct Pending<E> {
    remaining_ms: f64,
    event: E,
}

/// A cancellable "fire `event` after `delay_ms`" slot, advanced by the host
#[derive(Debug, Clone)]
pub struct OneShot<E> {
    pending: Option<Pending<E>>,
}

impl<E> Default for OneShot<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> OneShot<E> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the slot, replacing any pending timer
    pub fn schedule(&mut self, delay_ms: f64, event: E) {
        if self.pending.is_some() {
            log::debug!("Replacing pending timer");
        }
        self.pending = Some(Pending {
            remaining_ms: delay_ms.max(0.0),
            event,
        });
    }

    /// Drop the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Time left before the pending timer fires
    pub fn remaining_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.remaining_ms)
    }

    /// Let `dt_ms` elapse; yields the event if the timer fired
    pub fn advance(&mut self, dt_ms: f64) -> Option<E> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms -= dt_ms.max(0.0);
        if pending.remaining_ms <= 0.0 {
            self.pending.take().map(|p| p.event)
        } else {
            None
        }
    }
}
