//! Capacity arithmetic shared by the buffer's compaction and growth steps.

use super::QueueSize;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 32;

/// Share of the buffer, in percent, that must already have been dequeued
/// before a full-at-tail enqueue compacts in place instead of growing.
pub const DEFAULT_COMPACTION_THRESHOLD_PERCENT: u8 = 20;

/// Below this capacity the buffer doubles; at or above it, it grows by a quarter.
pub(crate) const DOUBLING_LIMIT: usize = 1024;

/// Returns whether `head` has moved far enough into a buffer of `capacity`
/// slots for an in-place compaction to be preferred over growth.
pub(crate) fn should_compact(head: usize, capacity: usize, threshold_percent: u8) -> bool {
  let percent = usize::from(threshold_percent.min(100));
  // floor(capacity * percent / 100) without overflowing on large capacities
  let threshold = capacity / 100 * percent + capacity % 100 * percent / 100;
  head > threshold
}

/// Computes the capacity the buffer should grow to, or `None` when it is
/// already at `max_capacity` and cannot grow any further.
pub(crate) fn next_capacity(current: usize, max_capacity: QueueSize) -> Option<usize> {
  if let QueueSize::Limited(max) = max_capacity {
    if current >= max {
      return None;
    }
  }
  let grown = if current < DOUBLING_LIMIT {
    current.saturating_mul(2)
  } else {
    current.saturating_add(current / 4)
  }
  .max(1);
  let clamped = match max_capacity {
    QueueSize::Limited(max) => grown.min(max),
    QueueSize::Limitless => grown,
  };
  (clamped > current).then_some(clamped)
}
