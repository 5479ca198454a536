//! Fixed-Capacity History Buffer for Committed Readings
//!
//! ## Overview
//!
//! Ring buffer holding the most recent `N` committed readings for trend
//! display. When full, pushing a new reading silently evicts the oldest —
//! eviction is routine, not an error, because recent data is what polling
//! clients care about.
//!
//! Iteration and snapshots are newest-first: that is the order the trend
//! table renders, and it puts the most relevant entry at index 0.
//!
//! ## Ordering Invariant
//!
//! The buffer reflects *commit* order, not timestamp order. If commits
//! arrive out of chronological order the history still lists them in arrival
//! order; timestamps are display data, not a sort key.
//!
//! ## Memory Layout
//!
//! Storage is an array of `Option<Reading>` with a wrapping write position:
//!
//! ```text
//! HistoryBuffer<5> after 7 pushes (r2..r6 retained):
//! ┌────┬────┬────┬────┬────┐
//! │ r5 │ r6 │ r2 │ r3 │ r4 │   write_pos = 2, len = 5
//! └────┴────┴────┴────┴────┘
//! newest = physical[write_pos - 1] = r6
//! ```
//!
//! `push` is O(1); `snapshot` is O(N). Capacity is a const generic so the
//! bound is fixed at compile time and never grows with request volume.

use crate::reading::Reading;

/// Default history capacity (entries retained for the trend view)
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Fixed-size ring buffer of committed readings, read newest-first
///
/// Not thread-safe on its own; the [`StateStore`](crate::store::StateStore)
/// wraps it in the lock that also guards the current reading, so the
/// commit-and-append step stays indivisible.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<const N: usize = DEFAULT_HISTORY_CAPACITY> {
    /// Storage slots; `None` until first written
    data: [Option<Reading>; N],

    /// Index where the next push lands, wraps at N
    write_pos: usize,

    /// Number of valid readings, grows to N then stays
    len: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Creates an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [const { None }; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Append a reading, evicting the oldest when at capacity
    pub fn push(&mut self, reading: Reading) {
        self.data[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recently pushed reading
    pub fn latest(&self) -> Option<&Reading> {
        self.get(0)
    }

    /// Iterate newest to oldest
    pub fn iter(&self) -> HistoryIter<'_, N> {
        HistoryIter {
            buffer: self,
            index: 0,
        }
    }

    /// Owned newest-first copy, unaffected by later pushes
    pub fn snapshot(&self) -> Vec<Reading> {
        self.iter().cloned().collect()
    }

    /// Reading by logical index (0 = newest, len-1 = oldest)
    ///
    /// The newest entry sits just behind `write_pos`; older entries walk
    /// backwards through the ring from there:
    ///
    /// ```text
    /// physical = (write_pos + N - 1 - index) % N
    /// ```
    fn get(&self, index: usize) -> Option<&Reading> {
        if index >= self.len {
            return None;
        }

        let physical = (self.write_pos + N - 1 - index) % N;
        self.data[physical].as_ref()
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest-first iterator over buffer contents
pub struct HistoryIter<'a, const N: usize> {
    buffer: &'a HistoryBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = &'a Reading;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Category;

    fn reading(weight: f32, timestamp: u64) -> Reading {
        Reading {
            color: "red".into(),
            weight_grams: weight,
            category: crate::classify(weight),
            timestamp,
        }
    }

    #[test]
    fn empty_buffer() {
        let buffer: HistoryBuffer<5> = HistoryBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.latest().is_none());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = HistoryBuffer::<5>::new();
        buffer.push(reading(145.0, 1000));

        assert_eq!(buffer.len(), 1);
        let latest = buffer.latest().unwrap();
        assert_eq!(latest.weight_grams, 145.0);
        assert_eq!(latest.category, Category::Small);
    }

    #[test]
    fn eviction_keeps_most_recent() {
        let mut buffer = HistoryBuffer::<3>::new();

        for i in 0..5 {
            buffer.push(reading(i as f32 * 100.0, i));
        }

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        // Newest first: pushes 4, 3, 2 survive; 0 and 1 were evicted
        let weights: Vec<f32> = buffer.iter().map(|r| r.weight_grams).collect();
        assert_eq!(weights, vec![400.0, 300.0, 200.0]);
    }

    #[test]
    fn snapshot_is_immune_to_later_pushes() {
        let mut buffer = HistoryBuffer::<4>::new();
        buffer.push(reading(100.0, 1));
        buffer.push(reading(250.0, 2));

        let snapshot = buffer.snapshot();
        buffer.push(reading(500.0, 3));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].weight_grams, 250.0);
        assert_eq!(buffer.latest().unwrap().weight_grams, 500.0);
    }

    #[test]
    fn order_follows_commit_order_not_timestamps() {
        let mut buffer = HistoryBuffer::<4>::new();
        // Second commit carries an earlier timestamp
        buffer.push(reading(100.0, 2000));
        buffer.push(reading(250.0, 1000));

        let timestamps: Vec<u64> = buffer.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![1000, 2000]);
    }
}
