use thiserror::Error;

/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
///
/// Both variants are recoverable: the queue is left exactly as it was before
/// the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue is full at its configured maximum capacity and cannot grow.
  /// The element that could not be enqueued is handed back to the caller.<br/>
  /// キューが最大容量に達しており拡張できない。追加できなかった要素は呼び出し元に返される。
  #[error("cannot grow beyond max capacity of {max_capacity}")]
  CapacityExceeded { element: E, max_capacity: usize },
  /// A dequeue was attempted on a queue without elements.<br/>
  /// 要素のないキューから取り出そうとした。
  #[error("queue is empty")]
  EmptyQueue,
}

impl<E> QueueError<E> {
  /// Returns the rejected element, if this error carries one.<br/>
  /// 拒否された要素があれば返します。
  pub fn into_element(self) -> Option<E> {
    match self {
      QueueError::CapacityExceeded { element, .. } => Some(element),
      QueueError::EmptyQueue => None,
    }
  }

  pub fn is_capacity_exceeded(&self) -> bool {
    matches!(self, QueueError::CapacityExceeded { .. })
  }

  pub fn is_empty_queue(&self) -> bool {
    matches!(self, QueueError::EmptyQueue)
  }
}

/// An error returned when a batch enqueue stops part way through.<br/>
/// 一括追加が途中で停止した場合に返されるエラー。
///
/// Carries the error of the rejected element together with every element
/// after it, so none of the batch is lost.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}, {} element(s) not enqueued", .remaining.len() + 1)]
pub struct EnqueueAllError<E> {
  pub error: QueueError<E>,
  pub remaining: Vec<E>,
}

impl<E> EnqueueAllError<E> {
  /// Returns the elements that were not enqueued, the rejected one first.<br/>
  /// 追加されなかった要素を、拒否された要素を先頭にして返します。
  pub fn into_elements(self) -> Vec<E> {
    let mut elements = Vec::with_capacity(self.remaining.len() + 1);
    elements.extend(self.error.into_element());
    elements.extend(self.remaining);
    elements
  }
}

#[cfg(test)]
mod tests {
  use super::{EnqueueAllError, QueueError};

  #[test]
  fn capacity_exceeded_message_names_the_limit() {
    let err = QueueError::CapacityExceeded {
      element: 4,
      max_capacity: 4,
    };
    assert_eq!(err.to_string(), "cannot grow beyond max capacity of 4");
    assert!(err.is_capacity_exceeded());
    assert_eq!(err.into_element(), Some(4));
  }

  #[test]
  fn empty_queue_carries_no_element() {
    let err = QueueError::<i32>::EmptyQueue;
    assert_eq!(err.to_string(), "queue is empty");
    assert!(err.is_empty_queue());
    assert_eq!(err.into_element(), None);
  }

  #[test]
  fn enqueue_all_error_hands_back_rejected_and_remaining_elements() {
    let err = EnqueueAllError {
      error: QueueError::CapacityExceeded {
        element: 3,
        max_capacity: 3,
      },
      remaining: vec![4, 5],
    };
    assert_eq!(
      err.to_string(),
      "cannot grow beyond max capacity of 3, 3 element(s) not enqueued"
    );
    assert_eq!(err.into_elements(), vec![3, 4, 5]);
  }
}
