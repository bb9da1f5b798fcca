mod growable_buffer;
mod growable_queue;
pub(crate) mod growth_policy;
mod queue_error;
mod queue_size;
mod queue_snapshot;
mod traits;

pub use self::{
  growable_buffer::GrowableBuffer,
  growable_queue::GrowableQueue,
  growth_policy::{DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD_PERCENT},
  queue_error::{EnqueueAllError, QueueError},
  queue_size::QueueSize,
  queue_snapshot::QueueSnapshot,
  traits::{QueueBase, QueueReader, QueueRw, QueueWriter},
};
