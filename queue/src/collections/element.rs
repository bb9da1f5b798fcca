use std::fmt::Debug;

/// Bound for values that can be stored in a [`GrowableQueue`](crate::GrowableQueue).<br/>
/// [`GrowableQueue`](crate::GrowableQueue) に格納できる値の境界。
///
/// The queue never looks inside an element. `Debug` is only required so that
/// rejected elements can be reported, and `Send + 'static` so that queue
/// handles can be shared between threads.
pub trait Element: Debug + Send + 'static {}

impl<T> Element for T where T: Debug + Send + 'static {}
