//! Cubic Bezier easing for layer spacing.
//!
//! The layer curve is a cubic Bezier with fixed anchors at `(0, 0)` and
//! `(1, 1)` and two user control points. Layer spacing samples only the
//! curve's Y polynomial at the layer's parameter `t`; the control points' X
//! components shape the curve drawn in the editor and nothing else.

use serde::{Deserialize, Serialize};

use crate::point::UnitPoint;

/// Y of the anchored cubic Bezier at parameter `t`.
///
/// `B(t) = 3(1-t)²t·p1y + 3(1-t)t²·p2y + t³`
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
#[must_use]
pub fn cubic_bezier_y(p1y: f64, p2y: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u.powi(2) * t * p1y + 3.0 * u * t.powi(2) * p2y + t.powi(3)
}

/// The two control points of the layer interval curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[UnitPoint; 2]", into = "[UnitPoint; 2]")]
pub struct LayerCurve {
    pub p1: UnitPoint,
    pub p2: UnitPoint,
}

impl LayerCurve {
    #[must_use]
    pub const fn new(p1: UnitPoint, p2: UnitPoint) -> Self {
        Self { p1, p2 }
    }

    /// Sample the easing at `t`. Only the control points' Y values matter.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        cubic_bezier_y(self.p1.y(), self.p2.y(), t)
    }

    #[must_use]
    pub const fn with_p1(self, p1: UnitPoint) -> Self {
        Self { p1, ..self }
    }

    #[must_use]
    pub const fn with_p2(self, p2: UnitPoint) -> Self {
        Self { p2, ..self }
    }
}

impl Default for LayerCurve {
    /// Ease-in-out: `(0.5, 0)`, `(0.5, 1)`.
    fn default() -> Self {
        Self::new(UnitPoint::new(0.5, 0.0), UnitPoint::new(0.5, 1.0))
    }
}

impl From<[UnitPoint; 2]> for LayerCurve {
    fn from([p1, p2]: [UnitPoint; 2]) -> Self {
        Self::new(p1, p2)
    }
}

impl From<LayerCurve> for [UnitPoint; 2] {
    fn from(curve: LayerCurve) -> Self {
        [curve.p1, curve.p2]
    }
}
