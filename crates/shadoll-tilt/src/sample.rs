//! Raw input events and the normalized samples derived from them.

/// Where a sample came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputSource {
    #[default]
    Cursor,
    Gyroscope,
}

/// Size of the area pointer coordinates are measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a position inside the viewport onto `[-1, 1]` on both axes.
    ///
    /// Returns `None` for a degenerate viewport.
    pub fn normalize(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let nx = (x / self.width) * 2.0 - 1.0;
        let ny = (y / self.height) * 2.0 - 1.0;
        Some((nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)))
    }
}

/// A pointer-move event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub viewport: Viewport,
    pub timestamp_ms: u64,
}

/// A device-orientation event. Axes are `None` while the sensor is not reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationEvent {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub timestamp_ms: u64,
}

/// One input sample.
///
/// Cursor samples carry viewport-relative coordinates in `[-1, 1]`.
/// Gyroscope samples carry raw `beta` (in `x`) and `gamma` (in `y`) degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub source: InputSource,
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

impl InputSample {
    pub fn from_pointer(event: &PointerEvent) -> Option<Self> {
        let (x, y) = event.viewport.normalize(event.client_x, event.client_y)?;
        Some(Self {
            source: InputSource::Cursor,
            x,
            y,
            timestamp_ms: event.timestamp_ms,
        })
    }

    /// Build a gyroscope sample, dropping events with an unavailable axis.
    pub fn from_orientation(event: &OrientationEvent) -> Option<Self> {
        let beta = event.beta.filter(|v| v.is_finite())?;
        let gamma = event.gamma.filter(|v| v.is_finite())?;
        Some(Self {
            source: InputSource::Gyroscope,
            x: beta,
            y: gamma,
            timestamp_ms: event.timestamp_ms,
        })
    }
}
