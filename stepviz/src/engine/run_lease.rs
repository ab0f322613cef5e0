// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mutual exclusion for runs against one array. See [`SessionSlot`] and [`RunLease`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError,
                atomic::{AtomicBool, Ordering}};

use crate::{Array, DEBUG_STEPVIZ_ENGINE, StepVizError, StepVizResult};

/// The current array of a session plus the "a run is in flight" marker.
///
/// The marker is only ever set through [`SessionSlot::try_acquire()`], which hands out
/// a [`RunLease`]. The lease clears the marker when dropped, so a run that is abandoned
/// half way (its step stream dropped) never leaves the slot locked.
#[derive(Debug, Default)]
pub struct SessionSlot {
    in_flight: AtomicBool,
    array: Mutex<Array>,
}

impl SessionSlot {
    #[must_use]
    pub fn new(array: Array) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            array: Mutex::new(array),
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool { self.in_flight.load(Ordering::SeqCst) }

    /// Marks a run as in flight.
    ///
    /// # Errors
    ///
    /// [`StepVizError::ConcurrentRun`] if another lease is still alive. The existing run
    /// is not affected.
    pub fn try_acquire(self: &Arc<Self>) -> StepVizResult<RunLease> {
        match self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => Ok(RunLease {
                slot: Arc::clone(self),
            }),
            Err(_) => {
                tracing::warn!(message = "Rejected request, a run is already in flight");
                Err(StepVizError::ConcurrentRun)
            }
        }
    }

    /// A copy of the current array.
    #[must_use]
    pub fn array(&self) -> Array { self.lock_array().clone() }

    fn lock_array(&self) -> MutexGuard<'_, Array> {
        // The array is replaced wholesale, so a panic elsewhere can't leave it torn.
        self.array.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Proof that the holder is the only run in flight against a [`SessionSlot`].
#[derive(Debug)]
pub struct RunLease {
    slot: Arc<SessionSlot>,
}

impl RunLease {
    /// Replaces the array of the session.
    pub fn replace_array(&self, array: Array) { *self.slot.lock_array() = array; }
}

impl Drop for RunLease {
    fn drop(&mut self) {
        DEBUG_STEPVIZ_ENGINE.then(|| {
            tracing::debug!(message = "Run lease released");
        });
        self.slot.in_flight.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn second_acquire_is_rejected_until_first_is_dropped() {
        let slot = Arc::new(SessionSlot::default());

        let lease = slot.try_acquire().unwrap();
        assert!(slot.is_in_flight());
        assert_eq!(slot.try_acquire().unwrap_err(), StepVizError::ConcurrentRun);

        drop(lease);
        assert!(!slot.is_in_flight());
        assert!(slot.try_acquire().is_ok());
    }

    #[test]
    fn lease_replaces_array() {
        let slot = Arc::new(SessionSlot::new(Array::from(vec![3, 1, 2])));
        let lease = slot.try_acquire().unwrap();
        lease.replace_array(Array::new_sorted(vec![1, 2, 3]));
        drop(lease);

        let array = slot.array();
        assert_eq!(array.as_slice(), &[1, 2, 3]);
        assert!(array.is_sorted());
    }

    #[test]
    fn leases_from_many_threads_never_overlap() {
        let slot = Arc::new(SessionSlot::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                std::thread::spawn(move || slot.try_acquire().ok())
            })
            .collect();

        let leases: Vec<RunLease> = handles
            .into_iter()
            .filter_map(|it| it.join().unwrap())
            .collect();
        assert_eq!(leases.len(), 1);
    }
}
