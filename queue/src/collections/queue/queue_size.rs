use std::cmp::Ordering;

/// The size of a queue, or the ceiling on it.<br/>
/// キューのサイズ、またはその上限。
///
/// Used both for element counts and for the maximum capacity a queue may grow
/// to. A raw maximum of `0` means "no ceiling" and converts to
/// [`QueueSize::Limitless`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueSize {
  /// The queue has no capacity limit.<br/>
  /// キューに容量制限がない。
  Limitless,
  /// The queue has a capacity limit.<br/>
  /// キューに容量制限がある。
  Limited(usize),
}

impl QueueSize {
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Interprets a raw maximum capacity, where `0` stands for unbounded.<br/>
  /// 生の最大容量を解釈します。`0` は無制限を表します。
  pub const fn from_max_capacity(max_capacity: usize) -> Self {
    if max_capacity == 0 {
      Self::Limitless
    } else {
      Self::Limited(max_capacity)
    }
  }

  /// Returns whether the queue has no capacity limit.<br/>
  /// キューに容量制限がないかどうかを返します。
  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// Converts to an option type.<br/>
  /// オプション型に変換します。
  ///
  /// # Return Value / 戻り値
  /// - `None` - If the queue has no capacity limit. / キューに容量制限がない場合。
  /// - `Some(num)` - If the queue has a capacity limit. / キューに容量制限がある場合。
  pub const fn to_option(self) -> Option<usize> {
    match self {
      Self::Limitless => None,
      Self::Limited(value) => Some(value),
    }
  }

  /// Converts to a usize type.<br/>
  /// usize型に変換します。
  ///
  /// # Return Value / 戻り値
  /// - `usize::MAX` - If the queue has no capacity limit. / キューに容量制限がない場合。
  /// - `num` - If the queue has a capacity limit. / キューに容量制限がある場合。
  pub const fn to_usize(self) -> usize {
    match self {
      Self::Limitless => usize::MAX,
      Self::Limited(value) => value,
    }
  }

  /// Converts back to the raw maximum-capacity form, where `0` is unbounded.
  pub const fn to_max_capacity(self) -> usize {
    match self {
      Self::Limitless => 0,
      Self::Limited(value) => value,
    }
  }

  /// Reads the value as a maximum capacity: a `Limited(0)` ceiling is unbounded.
  pub const fn as_max_capacity(self) -> Self {
    Self::from_max_capacity(self.to_max_capacity())
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    QueueSize::limitless()
  }
}

impl From<usize> for QueueSize {
  fn from(max_capacity: usize) -> Self {
    QueueSize::from_max_capacity(max_capacity)
  }
}

impl PartialOrd for QueueSize {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for QueueSize {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (QueueSize::Limitless, QueueSize::Limitless) => Ordering::Equal,
      (QueueSize::Limitless, _) => Ordering::Greater,
      (_, QueueSize::Limitless) => Ordering::Less,
      (QueueSize::Limited(l), QueueSize::Limited(r)) => l.cmp(r),
    }
  }
}
