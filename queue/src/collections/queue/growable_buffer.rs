use std::fmt::Debug;

use super::growth_policy::{next_capacity, should_compact};
use super::{QueueBase, QueueError, QueueReader, QueueSize, QueueSnapshot, QueueWriter};
use crate::QueueConfig;

/// Unsynchronized FIFO storage backing a [`GrowableQueue`](super::GrowableQueue).
///
/// Live elements occupy the contiguous range `[head, tail)` of a slot array.
/// When an enqueue finds the tail at the end of the array, the buffer first
/// tries to compact the live range to the front; only if too few slots have
/// been vacated does it reallocate a larger array. The array never shrinks.
#[derive(Debug)]
pub struct GrowableBuffer<E> {
  slots: Box<[Option<E>]>,
  head: usize,
  tail: usize,
  max_capacity: QueueSize,
  compaction_threshold_percent: u8,
}

impl<E> GrowableBuffer<E> {
  /// Creates a buffer with `initial_capacity` slots. A `max_capacity` of `0` means unbounded.
  pub fn new(initial_capacity: usize, max_capacity: usize) -> Self {
    Self::with_config(QueueConfig::new(initial_capacity, max_capacity))
  }

  pub fn with_config(config: QueueConfig) -> Self {
    let config = config.normalized();
    Self {
      slots: Self::alloc_slots(config.initial_capacity),
      head: 0,
      tail: 0,
      max_capacity: config.max_capacity,
      compaction_threshold_percent: config.compaction_threshold_percent,
    }
  }

  fn alloc_slots(capacity: usize) -> Box<[Option<E>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
  }

  pub fn max_capacity(&self) -> QueueSize {
    self.max_capacity
  }

  pub fn compaction_threshold_percent(&self) -> u8 {
    self.compaction_threshold_percent
  }

  pub fn snapshot(&self) -> QueueSnapshot {
    QueueSnapshot {
      head: self.head,
      tail: self.tail,
      capacity: self.slots.len(),
      max_capacity: self.max_capacity,
    }
  }

  /// Returns the head element without removing it.
  pub fn peek(&self) -> Option<&E> {
    if self.head < self.tail {
      self.slots[self.head].as_ref()
    } else {
      None
    }
  }

  /// Iterates over the live elements from head to tail.
  pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
    self.slots[self.head..self.tail].iter().flatten()
  }

  /// Ensures `slots[tail]` is writable, compacting or growing as needed.
  fn make_room(&mut self) -> bool {
    if self.tail < self.slots.len() {
      return true;
    }
    if self.compact() || self.grow() {
      return true;
    }
    // At the ceiling: any slot a consumer has vacated is still usable.
    if self.head > 0 {
      tracing::debug!(
        "GrowableBuffer::make_room: at max capacity {}, shifting head = {}, tail = {} to the front",
        self.slots.len(),
        self.head,
        self.tail
      );
      self.shift_to_front();
      return true;
    }
    false
  }

  /// Moves the live range to the front of the existing slots when enough of
  /// the buffer has been consumed. Returns whether room was made.
  fn compact(&mut self) -> bool {
    if !should_compact(self.head, self.slots.len(), self.compaction_threshold_percent) {
      return false;
    }
    tracing::debug!(
      "GrowableBuffer::compact: head = {}, tail = {}, capacity = {}",
      self.head,
      self.tail,
      self.slots.len()
    );
    self.shift_to_front();
    true
  }

  fn shift_to_front(&mut self) {
    let len = self.tail - self.head;
    // slots before head are vacant, so swapping carries the vacancies to the back
    for index in 0..len {
      self.slots.swap(index, self.head + index);
    }
    self.head = 0;
    self.tail = len;
  }

  /// Reallocates a larger slot array and moves the live range to its front.
  /// Returns `false` when the buffer is already at its maximum capacity.
  fn grow(&mut self) -> bool {
    let old_capacity = self.slots.len();
    let Some(new_capacity) = next_capacity(old_capacity, self.max_capacity) else {
      return false;
    };
    let len = self.tail - self.head;
    let mut slots = Vec::with_capacity(new_capacity);
    slots.extend(self.slots[self.head..self.tail].iter_mut().map(Option::take));
    slots.resize_with(new_capacity, || None);

    self.slots = slots.into_boxed_slice();
    self.head = 0;
    self.tail = len;
    tracing::debug!(
      "GrowableBuffer::grow: capacity {} -> {}, len = {}",
      old_capacity,
      new_capacity,
      len
    );
    true
  }

  fn clear_live_range(&mut self) {
    let (head, tail) = (self.head, self.tail);
    self.head = 0;
    self.tail = 0;
    for slot in &mut self.slots[head..tail] {
      *slot = None;
    }
  }

  fn rejection_limit(&self) -> usize {
    self.max_capacity.to_option().unwrap_or(self.slots.len())
  }
}

impl<E: Debug> GrowableBuffer<E> {
  fn reject(&self, element: E) -> QueueError<E> {
    let max_capacity = self.rejection_limit();
    tracing::warn!(
      "GrowableBuffer::enqueue: cannot grow beyond max capacity of {}, rejecting {:?}",
      max_capacity,
      element
    );
    QueueError::CapacityExceeded { element, max_capacity }
  }
}

impl<E> Default for GrowableBuffer<E> {
  fn default() -> Self {
    Self::with_config(QueueConfig::default())
  }
}

impl<E> QueueBase<E> for GrowableBuffer<E> {
  fn len(&self) -> QueueSize {
    QueueSize::limited(self.tail - self.head)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.slots.len())
  }

  fn is_empty(&self) -> bool {
    self.tail == 0 || self.head >= self.tail
  }
}

impl<E: Debug> QueueWriter<E> for GrowableBuffer<E> {
  fn enqueue_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    if !self.make_room() {
      return Err(self.reject(element));
    }
    self.slots[self.tail] = Some(element);
    self.tail += 1;
    Ok(())
  }
}

impl<E> QueueReader<E> for GrowableBuffer<E> {
  fn dequeue_mut(&mut self) -> Result<E, QueueError<E>> {
    if self.head >= self.tail {
      return Err(QueueError::EmptyQueue);
    }
    let element = self.slots[self.head].take().ok_or(QueueError::EmptyQueue)?;
    self.head += 1;
    if self.head == self.tail {
      self.head = 0;
      self.tail = 0;
    }
    Ok(element)
  }

  fn reset_mut(&mut self) {
    self.clear_live_range();
  }
}
