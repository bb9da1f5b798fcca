use crate::collections::QueueSize;
use crate::QueueConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetInitialCapacity(usize),
  SetMaxCapacity(QueueSize),
  SetCompactionThresholdPercent(u8),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut QueueConfig) {
    match self {
      ConfigOption::SetInitialCapacity(initial_capacity) => {
        config.initial_capacity = *initial_capacity;
      }
      ConfigOption::SetMaxCapacity(max_capacity) => {
        config.max_capacity = max_capacity.as_max_capacity();
      }
      ConfigOption::SetCompactionThresholdPercent(percent) => {
        config.compaction_threshold_percent = *percent;
      }
    }
  }

  pub fn with_initial_capacity(initial_capacity: usize) -> ConfigOption {
    ConfigOption::SetInitialCapacity(initial_capacity)
  }

  /// `0` leaves the queue unbounded.
  pub fn with_max_capacity(max_capacity: usize) -> ConfigOption {
    ConfigOption::SetMaxCapacity(QueueSize::from_max_capacity(max_capacity))
  }

  pub fn with_compaction_threshold_percent(percent: u8) -> ConfigOption {
    ConfigOption::SetCompactionThresholdPercent(percent)
  }
}
