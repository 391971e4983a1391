//! # Driving values, interpolation, and frame time
//!
//! Glide animates widgets from a handful of scalars instead of per-widget
//! timelines. The core crate has four pieces:
//!
//! - `DrivingValue<T>`: the shared cell a widget's scroll offset, step index,
//!   or progress percentage lives in.
//! - `ControlPoints` / `interpolate`: piecewise-linear mapping from a driving
//!   scalar to a style value (opacity, scale, offset, color).
//! - `AnimatedValue<T>` and `Easing`: timed transitions toward a target.
//! - `Clock` and `FrameScheduler`: where "now" and "next frame" come from.
//!
//! ## Driving values
//!
//! ```rust
//! use glide_core::*;
//!
//! let offset = driving_value(0.0f32);
//! let reader = offset.clone();
//! offset.set(640.0);
//! assert_eq!(reader.get(), 640.0);
//! ```
//!
//! Exactly one producer writes a given value (a scroll handler, a timer, a
//! prop); any number of readers sample it. Clones are handles, so the render
//! path can hold one on another thread.
//!
//! ## Deriving styles
//!
//! ```rust
//! use glide_core::*;
//!
//! let page = 320.0;
//! let opacity = ControlPoints::new([(0.0, 0.3f32), (page, 1.0), (2.0 * page, 0.3)])?;
//! assert_eq!(opacity.sample(page, Extrapolate::Clamp), 1.0);
//! # Ok::<(), glide_core::Error>(())
//! ```
//!
//! ## Time
//!
//! Nothing in Glide reads the system time on its own. Widgets take an
//! `Arc<dyn Clock>` or an explicit `Instant`, and per-frame loops go through
//! `FrameScheduler::request_tick`, so tests use `ManualClock` and
//! `ManualFrameScheduler` instead of sleeping.

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod scheduler;
pub mod tests;
pub mod value;

pub use animation::{AnimatedValue, AnimationSpec, Easing, Lerp};
pub use clock::*;
pub use color::*;
pub use error::{DomainFault, Error, Result};
pub use interpolate::{ControlPoints, Extrapolate, interpolate};
pub use scheduler::*;
pub use value::*;

pub use web_time::{Duration, Instant};
