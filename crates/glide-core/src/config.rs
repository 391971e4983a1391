//! Recognized animation options, as plain serde data.
//!
//! Hosts usually get these from props or a theme file. Everything has a
//! default, so partial documents deserialize:
//!
//! ```rust
//! use glide_core::config::{AnimationMode, MotionConfig};
//!
//! let cfg: MotionConfig = serde_json::from_str(r#"{ "mode": "slide-left" }"#).unwrap();
//! assert_eq!(cfg.mode, AnimationMode::SlideLeft);
//! assert_eq!(cfg.duration_ms, 300);
//! ```

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::{AnimationSpec, Easing};
use crate::interpolate::Extrapolate;

/// Enter/exit transform family for list items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationMode {
    SlideLeft,
    SlideRight,
    SlideLeftSpring,
    SlideRightSpring,
    BottomUp,
    BottomUpSpring,
    /// Scale in from nothing. Any unrecognized mode name lands here.
    #[default]
    Scale,
}

impl AnimationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationMode::SlideLeft => "slide-left",
            AnimationMode::SlideRight => "slide-right",
            AnimationMode::SlideLeftSpring => "slide-left-spring",
            AnimationMode::SlideRightSpring => "slide-right-spring",
            AnimationMode::BottomUp => "bottom-up",
            AnimationMode::BottomUpSpring => "bottom-up-spring",
            AnimationMode::Scale => "scale",
        }
    }

    pub fn easing(self) -> EasingKind {
        match self {
            AnimationMode::SlideLeftSpring
            | AnimationMode::SlideRightSpring
            | AnimationMode::BottomUpSpring => EasingKind::Spring,
            _ => EasingKind::Timing,
        }
    }
}

impl From<&str> for AnimationMode {
    fn from(name: &str) -> Self {
        match name {
            "slide-left" => AnimationMode::SlideLeft,
            "slide-right" => AnimationMode::SlideRight,
            "slide-left-spring" => AnimationMode::SlideLeftSpring,
            "slide-right-spring" => AnimationMode::SlideRightSpring,
            "bottom-up" => AnimationMode::BottomUp,
            "bottom-up-spring" => AnimationMode::BottomUpSpring,
            _ => AnimationMode::Scale,
        }
    }
}

impl From<String> for AnimationMode {
    fn from(name: String) -> Self {
        AnimationMode::from(name.as_str())
    }
}

impl From<AnimationMode> for String {
    fn from(mode: AnimationMode) -> Self {
        mode.as_str().to_owned()
    }
}

impl FromStr for AnimationMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AnimationMode::from(s))
    }
}

impl std::fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    #[default]
    Timing,
    Spring,
}

/// What a sequential step animation does after its last step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepPolicy {
    /// Jump back to the first step.
    #[default]
    Loop,
    /// Stay on the last step.
    Clamp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub mode: AnimationMode,
    /// Per-transition duration.
    pub duration_ms: u64,
    pub easing: EasingKind,
    /// Clamp interpolated styles at the domain edges instead of extrapolating.
    pub clamp: bool,
    pub step_policy: StepPolicy,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Scale,
            duration_ms: 300,
            easing: EasingKind::Timing,
            clamp: true,
            step_policy: StepPolicy::Loop,
        }
    }
}

impl MotionConfig {
    pub fn with_mode(mode: AnimationMode) -> Self {
        Self {
            mode,
            easing: mode.easing(),
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn extrapolate(&self) -> Extrapolate {
        Extrapolate::from_clamp(self.clamp)
    }

    pub fn timing_spec(&self) -> AnimationSpec {
        match self.easing {
            EasingKind::Timing => AnimationSpec::tween(self.duration(), Easing::EaseInOut),
            EasingKind::Spring => AnimationSpec {
                duration: self.duration().max(AnimationSpec::spring().duration),
                ..AnimationSpec::spring()
            },
        }
    }
}
