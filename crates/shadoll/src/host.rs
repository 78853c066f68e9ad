//! The terminal event loop as an [`InputHost`].

use std::collections::BTreeMap;

use shadoll_tilt::{InputChannel, InputHost, ListenerId, TimerId};
use tracing::trace;

/// Subscriptions and one-shot timers, driven by the main loop.
///
/// The loop advances the clock with [`TerminalHost::set_now`], fires the
/// timers returned by [`TerminalHost::take_due`] and only forwards input
/// for channels that have a subscriber.
#[derive(Debug, Default)]
pub struct TerminalHost {
    now_ms: u64,
    next_id: u64,
    listeners: BTreeMap<ListenerId, InputChannel>,
    timers: BTreeMap<TimerId, u64>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_subscribed(&self, channel: InputChannel) -> bool {
        self.listeners.values().any(|c| *c == channel)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Remove and return the timers whose deadline has passed, oldest first.
    pub fn take_due(&mut self) -> Vec<TimerId> {
        let now = self.now_ms;
        let mut due: Vec<(u64, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.timers.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl InputHost for TerminalHost {
    fn subscribe(&mut self, channel: InputChannel) -> ListenerId {
        let id = ListenerId(self.next());
        self.listeners.insert(id, channel);
        trace!(?id, ?channel, "subscribed");
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
        trace!(id = ?listener, "unsubscribed");
    }

    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next());
        self.timers.insert(id, self.now_ms.saturating_add(delay_ms));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}
