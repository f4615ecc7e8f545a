//! Process-wide slot holding the most recently generated batch.
//!
//! Exports of "the last batch" read whatever was stored last. Readers get a
//! shared snapshot so a concurrent store never tears a batch in half.

use std::sync::{Arc, Mutex, PoisonError};

use crate::batch::Batch;

/// Holder for the last generated batch.
///
/// # Example
///
/// ```
/// use coffee_data::{Batch, LastBatch};
///
/// let slot = LastBatch::new();
/// assert!(slot.snapshot().is_none());
///
/// slot.store(Batch::default());
/// assert!(slot.snapshot().is_some());
/// ```
#[derive(Debug, Default)]
pub struct LastBatch {
    slot: Mutex<Option<Arc<Batch>>>,
}

impl LastBatch {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Replace the stored batch, returning the shared handle now held.
    pub fn store(&self, batch: Batch) -> Arc<Batch> {
        let shared = Arc::new(batch);
        let mut guard = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&shared));
        shared
    }

    /// The batch stored last, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Batch>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::batch::{DEFAULT_MAX_RECORDS, RecordCount, generate_batch};
    use crate::data_type::DataType;
    use crate::options::GenerationOptions;

    fn batch_of(raw: i64) -> Batch {
        let count = RecordCount::new(raw, DEFAULT_MAX_RECORDS).expect("count in range");
        generate_batch(DataType::Login, count, &GenerationOptions::default())
    }

    #[test]
    fn later_stores_replace_earlier_ones() {
        let slot = LastBatch::new();
        slot.store(batch_of(2));
        slot.store(batch_of(5));

        assert_eq!(slot.snapshot().map(|batch| batch.len()), Some(5));
    }

    #[test]
    fn snapshots_survive_replacement() {
        let slot = LastBatch::new();
        slot.store(batch_of(3));
        let held = slot.snapshot().expect("batch stored");
        slot.store(batch_of(1));

        assert_eq!(held.len(), 3);
    }

    #[test]
    fn concurrent_stores_leave_one_whole_batch() {
        let slot = Arc::new(LastBatch::new());
        let handles: Vec<_> = (1..=8)
            .map(|count| {
                let shared = Arc::clone(&slot);
                thread::spawn(move || {
                    shared.store(batch_of(count));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let stored = slot.snapshot().expect("batch stored");
        assert!((1..=8).contains(&stored.len()));
        assert_eq!(stored.field_names(), ["benutzername", "passwort"]);
    }
}
