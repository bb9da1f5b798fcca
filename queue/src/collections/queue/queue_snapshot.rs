use super::QueueSize;

/// A consistent view of a queue's cursors and capacity, taken under its lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSnapshot {
  /// Index of the next element to dequeue.
  pub head: usize,
  /// Index of the next free insertion slot.
  pub tail: usize,
  /// Number of slots currently allocated.
  pub capacity: usize,
  pub max_capacity: QueueSize,
}

impl QueueSnapshot {
  /// Number of live elements, `tail - head`.
  pub fn len(&self) -> usize {
    self.tail.saturating_sub(self.head)
  }

  pub fn is_empty(&self) -> bool {
    self.head >= self.tail
  }

  /// Slots that can be filled before the next compaction or growth.
  pub fn free_at_tail(&self) -> usize {
    self.capacity.saturating_sub(self.tail)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_live_and_free_slots() {
    let snapshot = QueueSnapshot {
      head: 2,
      tail: 7,
      capacity: 10,
      max_capacity: QueueSize::Limitless,
    };
    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.free_at_tail(), 3);
    assert!(!snapshot.is_empty());
  }

  #[test]
  fn inconsistent_cursors_saturate_instead_of_overflowing() {
    let snapshot = QueueSnapshot {
      head: 5,
      tail: 3,
      capacity: 2,
      max_capacity: QueueSize::Limited(2),
    };
    assert_eq!(snapshot.len(), 0);
    assert_eq!(snapshot.free_at_tail(), 0);
    assert!(snapshot.is_empty());
  }
}
