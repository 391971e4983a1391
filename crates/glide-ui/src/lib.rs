//! Widget engines for Glide.
//!
//! Each module owns the state machine behind one animated widget and leaves
//! painting to the host:
//!
//! - [`list`]: list items that slide or scale in as they become visible,
//!   backed by [`viewability::ViewabilityTracker`].
//! - [`pager`]: onboarding-style paged carousel with indicator dots and a
//!   sticky "last page" state.
//! - [`counter`]: integer label that counts toward a target one frame at a
//!   time.
//! - [`progress`]: circular progress ring plus its counter label.
//! - [`loader`]: multi-step loader that walks through steps on a timer.

pub mod counter;
pub mod list;
pub mod loader;
pub mod pager;
pub mod progress;
pub mod viewability;

pub use counter::{CounterState, FrameCounter, drive_counter};
pub use list::{AnimatedList, DeviceSize, ItemTransform, select_transform};
pub use loader::{MultiStepLoader, StepStatus, StepStyle};
pub use pager::{Advance, IndicatorStyle, PageNavigator, PageState, PagerHost, PagerPhase};
pub use progress::{CircularProgress, RingGeometry};
pub use viewability::{ViewabilityTracker, VisibilityReport};
