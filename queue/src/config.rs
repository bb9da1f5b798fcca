use crate::collections::{QueueSize, DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD_PERCENT};
use crate::ConfigOption;

/// Construction parameters of a [`GrowableQueue`](crate::GrowableQueue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
  /// Number of slots allocated up front.
  pub initial_capacity: usize,
  /// Ceiling on the number of slots. `Limitless` lets the queue grow without bound.
  pub max_capacity: QueueSize,
  /// Percentage of the buffer that must already be dequeued before a
  /// full-at-tail enqueue compacts in place rather than reallocating.
  pub compaction_threshold_percent: u8,
}

impl Default for QueueConfig {
  fn default() -> Self {
    QueueConfig {
      initial_capacity: DEFAULT_CAPACITY,
      max_capacity: QueueSize::Limitless,
      compaction_threshold_percent: DEFAULT_COMPACTION_THRESHOLD_PERCENT,
    }
  }
}

impl QueueConfig {
  /// Builds a configuration from a raw maximum capacity, where `0` means unbounded.
  pub fn new(initial_capacity: usize, max_capacity: usize) -> Self {
    QueueConfig {
      initial_capacity,
      max_capacity: QueueSize::from_max_capacity(max_capacity),
      ..QueueConfig::default()
    }
  }

  pub fn from_options(options: impl IntoIterator<Item = ConfigOption>) -> QueueConfig {
    let mut config = QueueConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Brings the configuration in line with the queue's invariants.
  ///
  /// A `Limited(0)` maximum capacity is read as unbounded, the initial
  /// capacity is lowered to a limited maximum capacity and the compaction
  /// threshold is capped at 100 percent.
  pub fn normalized(mut self) -> Self {
    self.max_capacity = self.max_capacity.as_max_capacity();
    if let QueueSize::Limited(max) = self.max_capacity {
      if self.initial_capacity > max {
        tracing::warn!(
          "QueueConfig::normalized: initial capacity {} exceeds max capacity {}, clamping",
          self.initial_capacity,
          max
        );
        self.initial_capacity = max;
      }
    }
    if self.compaction_threshold_percent > 100 {
      tracing::warn!(
        "QueueConfig::normalized: compaction threshold {}% exceeds 100%, clamping",
        self.compaction_threshold_percent
      );
      self.compaction_threshold_percent = 100;
    }
    self
  }

  pub fn is_bounded(&self) -> bool {
    !self.max_capacity.as_max_capacity().is_limitless()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_unbounded_with_twenty_percent_threshold() {
    let config = QueueConfig::default();
    assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
    assert_eq!(config.max_capacity, QueueSize::Limitless);
    assert_eq!(config.compaction_threshold_percent, 20);
    assert!(!config.is_bounded());
  }

  #[test]
  fn options_are_applied_in_order() {
    let config = QueueConfig::from_options([
      ConfigOption::with_initial_capacity(4),
      ConfigOption::with_max_capacity(16),
      ConfigOption::with_compaction_threshold_percent(50),
      ConfigOption::with_initial_capacity(8),
    ]);
    assert_eq!(config.initial_capacity, 8);
    assert_eq!(config.max_capacity, QueueSize::Limited(16));
    assert_eq!(config.compaction_threshold_percent, 50);
  }

  #[test]
  fn zero_max_capacity_option_is_unbounded() {
    let config = QueueConfig::from_options([ConfigOption::with_max_capacity(0)]);
    assert!(!config.is_bounded());
  }

  #[test]
  fn normalized_clamps_initial_capacity_and_threshold() {
    let config = QueueConfig {
      initial_capacity: 100,
      max_capacity: QueueSize::Limited(10),
      compaction_threshold_percent: 150,
    }
    .normalized();
    assert_eq!(config.initial_capacity, 10);
    assert_eq!(config.compaction_threshold_percent, 100);
  }

  #[test]
  fn normalized_reads_limited_zero_as_unbounded() {
    let config = QueueConfig {
      initial_capacity: 4,
      max_capacity: QueueSize::Limited(0),
      ..QueueConfig::default()
    }
    .normalized();
    assert_eq!(config.initial_capacity, 4);
    assert_eq!(config.max_capacity, QueueSize::Limitless);
    assert!(!config.is_bounded());
  }

  #[test]
  fn default_max_capacity_option_is_unbounded() {
    let config = QueueConfig::from_options([ConfigOption::SetMaxCapacity(QueueSize::default())]).normalized();
    assert_eq!(config.max_capacity, QueueSize::Limitless);
  }

  #[test]
  fn normalized_keeps_valid_config() {
    let config = QueueConfig::new(100, 200);
    assert_eq!(config.clone().normalized(), config);
  }
}
