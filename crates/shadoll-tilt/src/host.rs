//! The event loop seen from the controller.

/// Input streams the controller can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputChannel {
    /// Pointer movement over the viewport.
    Pointer,
    /// Device orientation changes.
    Orientation,
}

/// Handle of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Subscriptions and timers provided by the host event loop.
///
/// The host delivers events for subscribed channels by calling
/// [`ModeController::on_pointer`](crate::ModeController::on_pointer) and
/// [`ModeController::on_orientation`](crate::ModeController::on_orientation),
/// and fires timers through
/// [`ModeController::on_timer`](crate::ModeController::on_timer).
/// A cancelled timer must never fire.
pub trait InputHost {
    fn subscribe(&mut self, channel: InputChannel) -> ListenerId;
    fn unsubscribe(&mut self, listener: ListenerId);
    fn schedule(&mut self, delay_ms: u64) -> TimerId;
    fn cancel(&mut self, timer: TimerId);
}
