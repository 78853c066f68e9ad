//! Declarative animation classes derived from the display configuration.

use shadoll_core::{DisplayConfig, ElementAnimation, LogoAnimation, LogoDisplay};

/// Animation class attached to one logo element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    Neon,
    Pulse,
    LColor,
    SColor,
    LExplosion,
    SExplosion,
    LAll,
    SAll,
    SPath1Fly,
    SPath2Fly,
}

impl ElementClass {
    pub fn class_name(&self) -> &'static str {
        match self {
            ElementClass::Neon => "logo-element--neon",
            ElementClass::Pulse => "logo-element--pulse",
            ElementClass::LColor => "logo-element-l--color",
            ElementClass::SColor => "logo-element-s--color",
            ElementClass::LExplosion => "logo-element-l--explosion",
            ElementClass::SExplosion => "logo-element-s--explosion",
            ElementClass::LAll => "logo-element-l--all",
            ElementClass::SAll => "logo-element-s--all",
            ElementClass::SPath1Fly => "s-path-1--fly",
            ElementClass::SPath2Fly => "s-path-2--fly",
        }
    }
}

/// Every class the styling layer puts on the logo for a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoClasses {
    /// Full-body animation; absent for a static logo.
    pub body: Option<LogoAnimation>,
    pub l: Option<ElementClass>,
    pub s: Option<ElementClass>,
    pub s_path_1: Option<ElementClass>,
    pub s_path_2: Option<ElementClass>,
}

impl LogoClasses {
    pub fn for_config(config: &DisplayConfig) -> Self {
        let mut classes = LogoClasses::default();
        if config.logo == LogoDisplay::Static {
            return classes;
        }

        classes.body = Some(config.logo_anim);

        if config.logo.animates_elements() {
            match config.element_anim {
                ElementAnimation::Neon => {
                    classes.l = Some(ElementClass::Neon);
                    classes.s = Some(ElementClass::Neon);
                }
                ElementAnimation::Color => {
                    classes.l = Some(ElementClass::LColor);
                    classes.s = Some(ElementClass::SColor);
                }
                ElementAnimation::Explosion => {
                    classes.l = Some(ElementClass::LExplosion);
                    classes.s = Some(ElementClass::SExplosion);
                }
                ElementAnimation::Fly => {
                    classes.s_path_1 = Some(ElementClass::SPath1Fly);
                    classes.s_path_2 = Some(ElementClass::SPath2Fly);
                    classes.l = Some(ElementClass::Pulse);
                }
                ElementAnimation::All => {
                    classes.l = Some(ElementClass::LAll);
                    classes.s = Some(ElementClass::SAll);
                }
            }
        }

        classes
    }

    /// Class name of the body animation, e.g. `logo--tilt`.
    pub fn body_class_name(&self) -> Option<String> {
        self.body.map(|anim| format!("logo--{}", anim.as_str()))
    }

    /// All class names, for diagnostics.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.body_class_name().into_iter().collect();
        names.extend(
            [self.l, self.s, self.s_path_1, self.s_path_2]
                .into_iter()
                .flatten()
                .map(|c| c.class_name().to_string()),
        );
        names
    }
}
