use super::{EnqueueAllError, QueueError, QueueSize};

/// Common trait defining basic queue operations.<br/>
/// キューの基本操作を定義する共通トレイト。
///
/// It serves as the base trait for [`QueueWriter`], [`QueueReader`], and [`QueueRw`].
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueBase<E> {
  /// Returns the number of elements currently stored in the queue.<br/>
  /// キューに格納されている要素数を返します。
  fn len(&self) -> QueueSize;

  /// Returns the number of slots currently allocated by the queue.<br/>
  /// キューが現在確保しているスロット数を返します。
  ///
  /// This is the allocated size, not the configured ceiling; it only ever grows.
  fn capacity(&self) -> QueueSize;

  /// Returns whether this queue is empty.<br/>
  /// このキューが空かどうかを返します。
  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }
}

/// Trait providing write operations through a mutable reference.<br/>
/// 可変参照を通じた書き込み操作を提供するトレイト。
///
/// Used by owners that already have exclusive access, e.g. from inside a lock.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element at the tail of the queue.<br/>
  /// キューの末尾に要素を追加します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element was added. / 要素が追加された場合。
  /// - `Err(QueueError::CapacityExceeded { .. })` - If the queue is at its maximum capacity. / キューが最大容量に達している場合。
  fn enqueue_mut(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Adds the elements in order, stopping at the first one that is rejected.<br/>
  /// 要素を順に追加し、最初に拒否された要素で停止します。
  ///
  /// The rejected element and everything after it are handed back in the error.
  fn enqueue_all_mut(&mut self, elements: impl IntoIterator<Item = E>) -> Result<(), EnqueueAllError<E>> {
    let mut elements = elements.into_iter();
    while let Some(element) = elements.next() {
      if let Err(error) = self.enqueue_mut(element) {
        return Err(EnqueueAllError {
          error,
          remaining: elements.collect(),
        });
      }
    }
    Ok(())
  }
}

/// Trait providing read operations through a mutable reference.<br/>
/// 可変参照を通じた読み出し操作を提供するトレイト。
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes and returns the head element.<br/>
  /// 先頭の要素を取り除いて返します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(element)` - If an element was removed. / 要素が取り出された場合。
  /// - `Err(QueueError::EmptyQueue)` - If the queue has no elements. / キューが空の場合。
  fn dequeue_mut(&mut self) -> Result<E, QueueError<E>>;

  /// Drops every element and moves both cursors back to the front.
  fn reset_mut(&mut self);
}

/// Trait providing read/write operations through a shared reference.<br/>
/// 共有参照を通じた読み書き操作を提供するトレイト。
///
/// Implementations synchronize internally so that handles can be shared
/// between threads.
pub trait QueueRw<E>: QueueBase<E> {
  /// Adds an element at the tail of the queue while holding the queue's lock.
  fn enqueue(&self, element: E) -> Result<(), QueueError<E>>;

  /// Removes and returns the head element while holding the queue's lock.
  fn dequeue(&self) -> Result<E, QueueError<E>>;

  /// Drops every element while holding the queue's lock.
  fn reset(&self);
}
