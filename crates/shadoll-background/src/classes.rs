use shadoll_core::{BackgroundMode, DisplayConfig, GradientKind};

/// Classes on the background element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackgroundClasses {
    pub gradient: GradientKind,
    pub animated: bool,
}

impl BackgroundClasses {
    pub fn for_config(config: &DisplayConfig) -> Self {
        Self {
            gradient: config.gradient,
            animated: config.background == BackgroundMode::Animated,
        }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names = vec![format!("background--{}", self.gradient.as_str())];
        if self.animated {
            names.push("background--animated".to_string());
        }
        names
    }
}
