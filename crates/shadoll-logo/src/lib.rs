//! The shadoll logo: ASCII art, presentation classes and rendering.

mod art;
mod classes;
mod motion;
mod presentation;
mod widget;

pub use art::{ART_HEIGHT, LogoArt, Part};
pub use classes::{ElementClass, LogoClasses};
pub use motion::{Pose, scripted_pose};
pub use presentation::LogoPresentation;
pub use widget::LogoWidget;
