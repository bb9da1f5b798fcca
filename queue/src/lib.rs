pub mod collections;
mod config;
mod config_option;

pub use collections::{
  Element, EnqueueAllError, GrowableBuffer, GrowableQueue, QueueBase, QueueError, QueueReader, QueueRw, QueueSize,
  QueueSnapshot, QueueWriter, DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD_PERCENT,
};
pub use config::QueueConfig;
pub use config_option::ConfigOption;

pub mod prelude {
  pub use super::{
    ConfigOption, Element, EnqueueAllError, GrowableQueue, QueueBase, QueueConfig, QueueError, QueueReader, QueueRw,
    QueueSize, QueueWriter,
  };
}
