use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{
  EnqueueAllError, GrowableBuffer, QueueBase, QueueError, QueueReader, QueueRw, QueueSize, QueueSnapshot, QueueWriter,
};
use crate::collections::Element;
use crate::{ConfigOption, QueueConfig};

/// Thread-safe, growable FIFO queue.
///
/// Clones share the same underlying buffer, so a queue can be handed to
/// several producers and consumers. Every operation holds the queue's lock
/// for its whole duration; none of them block waiting for the queue to change.
/// A dequeue on an empty queue fails with [`QueueError::EmptyQueue`] and an
/// enqueue on a full, maximum-capacity queue fails with
/// [`QueueError::CapacityExceeded`].
///
/// ```
/// use growable_queue_rs::{GrowableQueue, QueueError};
///
/// let queue = GrowableQueue::new(2, 4);
/// for i in 0..4 {
///   queue.enqueue(i).unwrap();
/// }
/// assert!(matches!(queue.enqueue(4), Err(QueueError::CapacityExceeded { element: 4, .. })));
/// assert_eq!(queue.dequeue(), Ok(0));
/// ```
#[derive(Debug)]
pub struct GrowableQueue<E> {
  inner: Arc<Mutex<GrowableBuffer<E>>>,
}

impl<E: Element> GrowableQueue<E> {
  /// Creates a queue with `initial_capacity` slots that may grow up to
  /// `max_capacity` slots. A `max_capacity` of `0` means unbounded.
  pub fn new(initial_capacity: usize, max_capacity: usize) -> Self {
    Self::with_config(QueueConfig::new(initial_capacity, max_capacity))
  }

  pub fn with_config(config: QueueConfig) -> Self {
    Self {
      inner: Arc::new(Mutex::new(GrowableBuffer::with_config(config))),
    }
  }

  pub fn with_options(options: impl IntoIterator<Item = ConfigOption>) -> Self {
    Self::with_config(QueueConfig::from_options(options))
  }

  /// Adds an element at the tail, compacting or growing the buffer if needed.
  pub fn enqueue(&self, element: E) -> Result<(), QueueError<E>> {
    self.with_write(|buffer| buffer.enqueue_mut(element))
  }

  /// Adds the elements in order under a single lock acquisition, stopping at
  /// the first rejected element. The rejected element and the ones after it
  /// are handed back in the error.
  pub fn enqueue_all(&self, elements: impl IntoIterator<Item = E>) -> Result<(), EnqueueAllError<E>> {
    let elements = elements.into_iter().collect::<Vec<_>>();
    self.with_write(|buffer| buffer.enqueue_all_mut(elements))
  }

  /// Removes and returns the head element.
  pub fn dequeue(&self) -> Result<E, QueueError<E>> {
    self.with_write(|buffer| buffer.dequeue_mut())
  }

  /// Like [`dequeue`](Self::dequeue), but maps an empty queue to `None`.
  pub fn try_dequeue(&self) -> Option<E> {
    self.dequeue().ok()
  }

  /// Removes every element; the allocated capacity is kept.
  pub fn reset(&self) {
    self.with_write(|buffer| buffer.reset_mut());
  }

  pub fn is_empty(&self) -> bool {
    self.with_read(|buffer| buffer.is_empty())
  }

  pub fn len(&self) -> QueueSize {
    self.with_read(|buffer| buffer.len())
  }

  pub fn capacity(&self) -> QueueSize {
    self.with_read(|buffer| buffer.capacity())
  }

  pub fn max_capacity(&self) -> QueueSize {
    self.with_read(|buffer| buffer.max_capacity())
  }

  pub fn compaction_threshold_percent(&self) -> u8 {
    self.with_read(|buffer| buffer.compaction_threshold_percent())
  }

  pub fn snapshot(&self) -> QueueSnapshot {
    self.with_read(|buffer| buffer.snapshot())
  }

  fn with_read<R>(&self, f: impl FnOnce(&GrowableBuffer<E>) -> R) -> R {
    let guard = self.lock();
    f(&guard)
  }

  fn with_write<R>(&self, f: impl FnOnce(&mut GrowableBuffer<E>) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }

  fn lock(&self) -> MutexGuard<'_, GrowableBuffer<E>> {
    // cursors are always updated before element drops run, so a poisoned buffer is still consistent
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<E: Element + Clone> GrowableQueue<E> {
  /// Returns a clone of the head element without removing it.
  pub fn peek(&self) -> Option<E> {
    self.with_read(|buffer| buffer.peek().cloned())
  }

  /// Returns clones of the live elements, head first.
  pub fn to_vec(&self) -> Vec<E> {
    self.with_read(|buffer| buffer.iter().cloned().collect())
  }
}

impl<E> Clone for GrowableQueue<E> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<E: Element> Default for GrowableQueue<E> {
  fn default() -> Self {
    Self::with_config(QueueConfig::default())
  }
}

impl<E: Element> QueueBase<E> for GrowableQueue<E> {
  fn len(&self) -> QueueSize {
    GrowableQueue::len(self)
  }

  fn capacity(&self) -> QueueSize {
    GrowableQueue::capacity(self)
  }

  fn is_empty(&self) -> bool {
    GrowableQueue::is_empty(self)
  }
}

impl<E: Element> QueueWriter<E> for GrowableQueue<E> {
  fn enqueue_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    self.enqueue(element)
  }
}

impl<E: Element> QueueReader<E> for GrowableQueue<E> {
  fn dequeue_mut(&mut self) -> Result<E, QueueError<E>> {
    self.dequeue()
  }

  fn reset_mut(&mut self) {
    self.reset();
  }
}

impl<E: Element> QueueRw<E> for GrowableQueue<E> {
  fn enqueue(&self, element: E) -> Result<(), QueueError<E>> {
    GrowableQueue::enqueue(self, element)
  }

  fn dequeue(&self) -> Result<E, QueueError<E>> {
    GrowableQueue::dequeue(self)
  }

  fn reset(&self) {
    GrowableQueue::reset(self);
  }
}
