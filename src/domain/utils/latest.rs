use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A value replaced wholesale by fetch results, where the most recently
/// issued fetch wins.
///
/// Take a [`Ticket`] before the request goes out and hand it back with the
/// response. A response whose ticket is older than the one already applied
/// is discarded, so a slow early fetch can never overwrite a newer one.
#[derive(Debug)]
pub struct Latest<T> {
    issued: AtomicU64,
    slot: RwLock<(u64, T)>,
}

impl<T: Clone> Latest<T> {
    pub fn new(value: T) -> Self {
        Self {
            issued: AtomicU64::new(0),
            slot: RwLock::new((0, value)),
        }
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns whether the value was applied.
    pub fn apply(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 <= slot.0 {
            log::debug!(
                "Discarding stale response {} (already applied {})",
                ticket.0,
                slot.0
            );
            return false;
        }

        *slot = (ticket.0, value);
        true
    }

    pub fn get(&self) -> T {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .1
            .clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.read().unwrap_or_else(PoisonError::into_inner).1)
    }
}
