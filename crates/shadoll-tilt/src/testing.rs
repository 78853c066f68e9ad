//! Test doubles: an event bus with a virtual clock and a recording sink.

use std::collections::{BTreeMap, BTreeSet};

use crate::host::{InputChannel, InputHost, ListenerId, TimerId};
use crate::mapper::TiltVector;
use crate::presentation::{PresentationClass, PresentationSink};

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub now_ms: u64,
    next_id: u64,
    listeners: BTreeMap<ListenerId, InputChannel>,
    timers: BTreeMap<TimerId, u64>,
    pub subscribe_calls: usize,
}

impl RecordingHost {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_subscribed(&self, channel: InputChannel) -> bool {
        self.listeners.values().any(|c| *c == channel)
    }

    /// Move the virtual clock forward and return the timers that fell due.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerId> {
        self.now_ms += ms;
        let now = self.now_ms;
        let due: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.timers.remove(id);
        }
        due
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl InputHost for RecordingHost {
    fn subscribe(&mut self, channel: InputChannel) -> ListenerId {
        self.subscribe_calls += 1;
        let id = ListenerId(self.next());
        self.listeners.insert(id, channel);
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }

    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next());
        self.timers.insert(id, self.now_ms + delay_ms);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub transform: Option<TiltVector>,
    pub classes: BTreeSet<PresentationClass>,
    pub applied: usize,
}

impl PresentationSink for RecordingSink {
    fn apply_transform(&mut self, tilt: TiltVector) {
        self.applied += 1;
        self.transform = Some(tilt);
    }

    fn clear_transform(&mut self) {
        self.transform = None;
    }

    fn set_class(&mut self, class: PresentationClass, enabled: bool) {
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }
}
