use alloc::vec::Vec;

use zoomer::{Scheduler, TimerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u64>,
}

/// A deterministic virtual-time [`Scheduler`].
///
/// Timers are scheduled relative to the queue's current time and released in `(due, id)` order
/// by [`TimerQueue::pop_due`]. Nothing runs on its own: the adapter decides when time advances.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock forward without firing anything. Time never goes backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Due time of the earliest pending timer.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    /// Releases the earliest timer due at or before `until_ms`, advancing the clock to its due
    /// time. Intervals are re-armed one period later; timeouts are removed.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.id))
            .map(|(i, _)| i)?;

        let entry = self.entries[index];
        self.now_ms = self.now_ms.max(entry.due_ms);
        match entry.period_ms {
            Some(period) => self.entries[index].due_ms = entry.due_ms.saturating_add(period),
            None => {
                self.entries.swap_remove(index);
            }
        }
        Some(entry.id)
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>) -> TimerId {
        self.next_id = self.next_id.saturating_add(1);
        let id = TimerId(self.next_id);
        self.entries.push(Entry {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
        });
        id
    }
}

impl Scheduler for TimerQueue {
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.push(delay_ms, None)
    }

    fn schedule_interval(&mut self, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(period_ms, Some(period_ms))
    }

    fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }
}
