//! Source arbitration between pointer and orientation input.

use tracing::debug;

use crate::sample::{InputSample, InputSource};

/// Which source is authoritative, and when each source was last heard from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArbitrationState {
    pub active_source: InputSource,
    pub last_cursor_ts: Option<u64>,
    pub last_gyro_ts: Option<u64>,
}

/// Decides which input source drives the tilt.
///
/// The active source only changes once it has been silent for longer than
/// the switch-over threshold, so two live sources never alternate within
/// that window. A source that has never been observed counts as silent.
#[derive(Debug, Clone)]
pub struct InputArbiter {
    state: ArbitrationState,
    switch_over_ms: u64,
}

impl InputArbiter {
    pub fn new(switch_over_ms: u64) -> Self {
        Self {
            state: ArbitrationState::default(),
            switch_over_ms,
        }
    }

    pub fn state(&self) -> ArbitrationState {
        self.state
    }

    pub fn active_source(&self) -> InputSource {
        self.state.active_source
    }

    /// Forget all timing and return to cursor-led arbitration.
    pub fn reset(&mut self) {
        self.state = ArbitrationState::default();
    }

    /// Record a sample and return it if it comes from the active source.
    ///
    /// Samples from the inactive source only update its timestamp.
    pub fn observe(&mut self, sample: InputSample) -> Option<InputSample> {
        let now = sample.timestamp_ms;
        match sample.source {
            InputSource::Cursor => {
                self.state.last_cursor_ts = Some(now);
                if self.state.active_source == InputSource::Gyroscope
                    && self.silent_since(self.state.last_gyro_ts, now)
                {
                    self.switch_to(InputSource::Cursor, now);
                }
            }
            InputSource::Gyroscope => {
                self.state.last_gyro_ts = Some(now);
                if self.state.active_source == InputSource::Cursor
                    && self.silent_since(self.state.last_cursor_ts, now)
                {
                    self.switch_to(InputSource::Gyroscope, now);
                }
            }
        }

        (sample.source == self.state.active_source).then_some(sample)
    }

    fn silent_since(&self, last: Option<u64>, now: u64) -> bool {
        last.is_none_or(|ts| now.saturating_sub(ts) > self.switch_over_ms)
    }

    fn switch_to(&mut self, source: InputSource, now: u64) {
        debug!(?source, at_ms = now, "switching active input source");
        self.state.active_source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(source: InputSource, timestamp_ms: u64) -> InputSample {
        InputSample {
            source,
            x: 0.0,
            y: 0.0,
            timestamp_ms,
        }
    }

    #[test]
    fn test_starts_cursor_led() {
        let mut arbiter = InputArbiter::new(1000);
        assert_eq!(arbiter.active_source(), InputSource::Cursor);
        assert!(arbiter.observe(sample(InputSource::Cursor, 10)).is_some());
    }

    #[test]
    fn test_gyroscope_takes_over_when_cursor_never_seen() {
        let mut arbiter = InputArbiter::new(1000);
        assert!(arbiter.observe(sample(InputSource::Gyroscope, 5)).is_some());
        assert_eq!(arbiter.active_source(), InputSource::Gyroscope);
    }

    #[test]
    fn test_no_switch_within_threshold() {
        let mut arbiter = InputArbiter::new(1000);
        arbiter.observe(sample(InputSource::Cursor, 0));

        // Exactly at the threshold the cursor still owns the tilt.
        assert!(arbiter.observe(sample(InputSource::Gyroscope, 1000)).is_none());
        assert_eq!(arbiter.active_source(), InputSource::Cursor);

        // One millisecond later the gyroscope takes over.
        assert!(arbiter.observe(sample(InputSource::Gyroscope, 1001)).is_some());
        assert_eq!(arbiter.active_source(), InputSource::Gyroscope);
    }

    #[test]
    fn test_inactive_samples_refresh_timestamps() {
        let mut arbiter = InputArbiter::new(1000);
        arbiter.observe(sample(InputSource::Gyroscope, 0));
        assert_eq!(arbiter.active_source(), InputSource::Gyroscope);

        // Gyroscope keeps reporting, so the cursor is dropped each time.
        for t in [200, 400, 600] {
            arbiter.observe(sample(InputSource::Gyroscope, t));
            assert!(arbiter.observe(sample(InputSource::Cursor, t + 1)).is_none());
        }
        assert_eq!(arbiter.state().last_cursor_ts, Some(601));

        // The gyroscope goes quiet and the cursor wins.
        assert!(arbiter.observe(sample(InputSource::Cursor, 1601)).is_some());
        assert_eq!(arbiter.active_source(), InputSource::Cursor);
    }

    #[test]
    fn test_reset() {
        let mut arbiter = InputArbiter::new(1000);
        arbiter.observe(sample(InputSource::Gyroscope, 0));
        arbiter.reset();
        assert_eq!(arbiter.state(), ArbitrationState::default());
    }

    fn events() -> impl Strategy<Value = Vec<(bool, u64)>> {
        prop::collection::vec((any::<bool>(), 0u64..1500), 1..60)
    }

    proptest! {
        #[test]
        fn prop_switch_only_after_silence(events in events()) {
            let mut arbiter = InputArbiter::new(1000);
            let mut now = 0u64;
            for (is_gyro, delta) in events {
                now += delta;
                let source = if is_gyro { InputSource::Gyroscope } else { InputSource::Cursor };
                let before = arbiter.state();
                arbiter.observe(sample(source, now));
                let after = arbiter.state();

                if after.active_source != before.active_source {
                    // Only the incoming source can take over, and only once
                    // the previously active source had been quiet long enough.
                    prop_assert_eq!(after.active_source, source);
                    let last_active = match before.active_source {
                        InputSource::Cursor => before.last_cursor_ts,
                        InputSource::Gyroscope => before.last_gyro_ts,
                    };
                    if let Some(ts) = last_active {
                        prop_assert!(now - ts > 1000);
                    }
                }
            }
        }

        #[test]
        fn prop_forwards_only_active_source(events in events()) {
            let mut arbiter = InputArbiter::new(1000);
            let mut now = 0u64;
            for (is_gyro, delta) in events {
                now += delta;
                let source = if is_gyro { InputSource::Gyroscope } else { InputSource::Cursor };
                let forwarded = arbiter.observe(sample(source, now));
                prop_assert_eq!(forwarded.is_some(), arbiter.active_source() == source);
            }
        }
    }
}
