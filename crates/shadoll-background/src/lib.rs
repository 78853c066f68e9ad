//! Gradient backgrounds for the shadoll placeholder.
//!
//! Every cell is computed from its position and the speed-scaled animation
//! time only, so a static background is the same picture at time zero.

mod classes;
mod gradient;
mod state;

pub use classes::BackgroundClasses;
pub use gradient::gradient_color;
pub use state::BackgroundState;
