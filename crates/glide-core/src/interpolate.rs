//! # Piecewise-linear interpolation
//!
//! Every continuous style value in Glide is a function of one driving scalar:
//! a scroll offset mapped to an indicator's scale, a progress percentage
//! mapped to a stroke offset, a step index mapped to opacity. The mapping is
//! described by [`ControlPoints`], a strictly increasing list of
//! `(breakpoint, output)` pairs, and sampled with [`ControlPoints::sample`].
//!
//! ```rust
//! use glide_core::interpolate::{interpolate, Extrapolate};
//!
//! let scale = interpolate(
//!     480.0,
//!     &[(0.0, 0.8f32), (320.0, 1.5), (640.0, 0.8)],
//!     Extrapolate::Clamp,
//! )?;
//! assert!((scale - 1.15).abs() < 1e-4);
//! # Ok::<(), glide_core::Error>(())
//! ```
//!
//! Outside the breakpoints the result either pins to the nearest endpoint
//! (`Extrapolate::Clamp`) or continues the slope of the nearest segment
//! (`Extrapolate::Extend`). Sampling is pure; callers re-sample every frame
//! instead of caching across driving-value changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::Lerp;
use crate::error::{DomainFault, Error, Result};

/// What to do with inputs outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extrapolate {
    #[default]
    Clamp,
    Extend,
}

impl Extrapolate {
    pub fn from_clamp(clamp: bool) -> Self {
        if clamp {
            Extrapolate::Clamp
        } else {
            Extrapolate::Extend
        }
    }
}

/// Validated breakpoint/output pairs. Most curves have two or three points,
/// so they stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoints<T> {
    points: SmallVec<[(f32, T); 4]>,
}

impl<T: Lerp> ControlPoints<T> {
    pub fn new(points: impl IntoIterator<Item = (f32, T)>) -> Result<Self> {
        let points: SmallVec<[(f32, T); 4]> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(Error::InvalidDomain(DomainFault::TooFewPoints {
                len: points.len(),
            }));
        }
        for (index, (bp, _)) in points.iter().enumerate() {
            if !bp.is_finite() {
                return Err(Error::InvalidDomain(DomainFault::NonFinite { index }));
            }
            if index > 0 && *bp <= points[index - 1].0 {
                return Err(Error::InvalidDomain(DomainFault::NotIncreasing { index }));
            }
        }
        Ok(Self { points })
    }

    /// Two-point curve `[(x0, y0), (x1, y1)]`.
    pub fn linear(x0: f32, y0: T, x1: f32, y1: T) -> Result<Self> {
        Self::new([(x0, y0), (x1, y1)])
    }

    pub fn last_breakpoint(&self) -> f32 {
        self.points[self.points.len() - 1].0
    }

    pub fn sample(&self, x: f32, extrapolate: Extrapolate) -> T {
        let pts = &self.points;
        let last = pts.len() - 1;

        // NaN compares false everywhere; treat it as below the domain.
        if x.is_nan() {
            return pts[0].1.clone();
        }

        let seg = if x <= pts[0].0 {
            if extrapolate == Extrapolate::Clamp {
                return pts[0].1.clone();
            }
            0
        } else if x >= pts[last].0 {
            if extrapolate == Extrapolate::Clamp {
                return pts[last].1.clone();
            }
            last - 1
        } else {
            // First segment whose right edge is beyond x.
            pts.partition_point(|(bp, _)| *bp <= x) - 1
        };

        let (x0, y0) = &pts[seg];
        let (x1, y1) = &pts[seg + 1];
        let t = (x - x0) / (x1 - x0);
        y0.lerp(y1, t)
    }
}

/// Validates `points` and samples them at `x` in one call.
pub fn interpolate<T: Lerp>(x: f32, points: &[(f32, T)], extrapolate: Extrapolate) -> Result<T> {
    let cp = ControlPoints::new(points.iter().cloned())?;
    Ok(cp.sample(x, extrapolate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn ramp() -> ControlPoints<f32> {
        ControlPoints::new([(0.0, 0.0), (10.0, 100.0), (20.0, 150.0)]).unwrap()
    }

    #[test]
    fn rejects_bad_domains() {
        assert_eq!(
            ControlPoints::new([(0.0, 1.0f32)]).unwrap_err(),
            Error::InvalidDomain(DomainFault::TooFewPoints { len: 1 })
        );
        assert_eq!(
            ControlPoints::new([(0.0, 1.0f32), (0.0, 2.0)]).unwrap_err(),
            Error::InvalidDomain(DomainFault::NotIncreasing { index: 1 })
        );
        assert_eq!(
            ControlPoints::new([(0.0, 1.0f32), (5.0, 2.0), (3.0, 0.0)]).unwrap_err(),
            Error::InvalidDomain(DomainFault::NotIncreasing { index: 2 })
        );
        assert_eq!(
            ControlPoints::new([(f32::NAN, 1.0f32), (5.0, 2.0)]).unwrap_err(),
            Error::InvalidDomain(DomainFault::NonFinite { index: 0 })
        );
        assert!(interpolate::<f32>(0.0, &[], Extrapolate::Clamp).is_err());
    }

    #[test]
    fn samples_inside_segments() {
        let cp = ramp();
        assert_eq!(cp.sample(0.0, Extrapolate::Clamp), 0.0);
        assert_eq!(cp.sample(5.0, Extrapolate::Clamp), 50.0);
        assert_eq!(cp.sample(10.0, Extrapolate::Clamp), 100.0);
        assert_eq!(cp.sample(15.0, Extrapolate::Clamp), 125.0);
        assert_eq!(cp.sample(20.0, Extrapolate::Clamp), 150.0);
    }

    #[test]
    fn clamp_pins_to_endpoints() {
        let cp = ramp();
        assert_eq!(cp.sample(-3.0, Extrapolate::Clamp), 0.0);
        let at_end = cp.sample(cp.last_breakpoint(), Extrapolate::Clamp);
        for x in [20.5, 40.0, 1.0e6, f32::INFINITY] {
            assert_eq!(cp.sample(x, Extrapolate::Clamp), at_end);
        }
    }

    #[test]
    fn extend_uses_nearest_segment_slope() {
        let cp = ramp();
        assert_eq!(cp.sample(-5.0, Extrapolate::Extend), -50.0);
        assert_eq!(cp.sample(30.0, Extrapolate::Extend), 200.0);
    }

    #[test]
    fn monotone_outputs_stay_monotone_when_extending() {
        let cp = ramp();
        let mut prev = f32::NEG_INFINITY;
        let mut x = -40.0;
        while x <= 60.0 {
            let y = cp.sample(x, Extrapolate::Extend);
            assert!(y >= prev, "decreased at x={x}: {y} < {prev}");
            prev = y;
            x += 0.25;
        }
    }

    #[test]
    fn nan_input_reads_as_first_output() {
        assert_eq!(ramp().sample(f32::NAN, Extrapolate::Extend), 0.0);
    }

    #[test]
    fn descending_outputs() {
        let cp = ControlPoints::linear(0.0, 282.7f32, 100.0, 0.0).unwrap();
        assert!((cp.sample(50.0, Extrapolate::Clamp) - 141.35).abs() < 1e-3);
        assert_eq!(cp.sample(120.0, Extrapolate::Clamp), 0.0);
    }

    #[test]
    fn colors_blend_per_channel() {
        let cp = ControlPoints::linear(0.0, Color(0, 0, 0, 255), 1.0, Color(200, 100, 50, 255))
            .unwrap();
        assert_eq!(cp.sample(0.5, Extrapolate::Clamp), Color(100, 50, 25, 255));
        assert_eq!(cp.sample(2.0, Extrapolate::Clamp), Color(200, 100, 50, 255));
        // extrapolated channels saturate instead of wrapping
        assert_eq!(cp.sample(2.0, Extrapolate::Extend), Color(255, 200, 100, 255));
        assert_eq!(cp.sample(-1.0, Extrapolate::Extend), Color(0, 0, 0, 255));
    }
}
