//! Clamped coordinate pairs — the values behind the draggable controls.
//!
//! A [`Point`] is an immutable `(x, y)` pair clamped into a fixed range and
//! rounded to two decimals on construction. The range is part of the type:
//!
//! | Alias           | Range     | Used for                      |
//! |-----------------|-----------|-------------------------------|
//! | [`UnitPoint`]   | `[0, 1]`  | layer curve control points    |
//! | [`SignedPoint`] | `[-1, 1]` | shadow offset direction       |
//!
//! Updating one axis returns a new point of the same kind; the other axis
//! keeps its last clamped value.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed interval a point's axes are clamped into.
pub trait Range: Copy {
    const MIN: f64;
    const MAX: f64;
}

/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unit;

impl Range for Unit {
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;
}

/// `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signed;

impl Range for Signed {
    const MIN: f64 = -1.0;
    const MAX: f64 = 1.0;
}

/// Which coordinate to replace in [`Point::with_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A coordinate pair clamped into `R`'s range, rounded to 2 decimals.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<R: Range> {
    value: [f64; 2],
    range: PhantomData<R>,
}

/// Control point in `[0, 1]²`.
pub type UnitPoint = Point<Unit>;

/// Offset in `[-1, 1]²`.
pub type SignedPoint = Point<Signed>;

impl<R: Range> Point<R> {
    /// Clamp and round both coordinates. NaN becomes `0` before clamping.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            value: [normalize::<R>(x), normalize::<R>(y)],
            range: PhantomData,
        }
    }

    /// Lower bound of both axes.
    #[must_use]
    pub const fn min() -> f64 {
        R::MIN
    }

    /// Upper bound of both axes.
    #[must_use]
    pub const fn max() -> f64 {
        R::MAX
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f64 {
        self.value[0]
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f64 {
        self.value[1]
    }

    /// Both coordinates as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> [f64; 2] {
        self.value
    }

    /// A new point with `x` replaced.
    #[must_use]
    pub fn with_x(self, x: f64) -> Self {
        Self::new(x, self.y())
    }

    /// A new point with `y` replaced.
    #[must_use]
    pub fn with_y(self, y: f64) -> Self {
        Self::new(self.x(), y)
    }

    /// A new point with one axis replaced.
    #[must_use]
    pub fn with_axis(self, axis: Axis, v: f64) -> Self {
        match axis {
            Axis::X => self.with_x(v),
            Axis::Y => self.with_y(v),
        }
    }

    /// A new point of the same kind from raw coordinates.
    #[must_use]
    pub fn update(self, [x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

fn normalize<R: Range>(v: f64) -> f64 {
    let v = if v.is_nan() { 0.0 } else { v };
    // `+ 0.0` folds -0.0 into 0.0.
    (v.clamp(R::MIN, R::MAX) * 100.0).round() / 100.0 + 0.0
}

impl<R: Range> From<[f64; 2]> for Point<R> {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<R: Range> fmt::Debug for Point<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x(), self.y())
    }
}

impl<R: Range> Serialize for Point<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, R: Range> Deserialize<'de> for Point<R> {
    /// Goes through [`Point::new`], so out-of-range input is clamped.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_point_clamps_into_range() {
        let p = UnitPoint::new(-0.5, 1.7);
        assert_eq!(p.value(), [0.0, 1.0]);
    }

    #[test]
    fn signed_point_clamps_into_range() {
        let p = SignedPoint::new(-3.0, 3.0);
        assert_eq!(p.value(), [-1.0, 1.0]);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let p = SignedPoint::new(-0.333_33, 0.666_66);
        assert_eq!(p.value(), [-0.33, 0.67]);
    }

    #[test]
    fn nan_becomes_zero() {
        assert_eq!(UnitPoint::new(f64::NAN, 0.5).value(), [0.0, 0.5]);
        assert_eq!(SignedPoint::new(0.5, f64::NAN).value(), [0.5, 0.0]);
    }

    #[test]
    fn negative_zero_is_folded() {
        let p = SignedPoint::new(-0.001, 0.0);
        assert!(p.x().is_sign_positive());
    }

    #[test]
    fn with_x_preserves_clamped_y() {
        let p = UnitPoint::new(0.2, 5.0).with_x(0.9);
        assert_eq!(p.value(), [0.9, 1.0]);
    }

    #[test]
    fn with_y_preserves_x_and_clamps() {
        let p = SignedPoint::new(-0.3, -0.6).with_y(-7.0);
        assert_eq!(p.value(), [-0.3, -1.0]);
    }

    #[test]
    fn with_axis_dispatches() {
        let p = SignedPoint::new(0.0, 0.0);
        assert_eq!(p.with_axis(Axis::X, 0.25).value(), [0.25, 0.0]);
        assert_eq!(p.with_axis(Axis::Y, 0.25).value(), [0.0, 0.25]);
    }

    #[test]
    fn update_keeps_the_range_kind() {
        // Same input, different clamp per kind.
        assert_eq!(UnitPoint::new(0.0, 0.0).update([-0.5, 0.5]).value(), [0.0, 0.5]);
        assert_eq!(SignedPoint::new(0.0, 0.0).update([-0.5, 0.5]).value(), [-0.5, 0.5]);
    }

    #[test]
    fn construction_is_idempotent() {
        let p = SignedPoint::new(0.123_456, -0.987_654);
        assert_eq!(SignedPoint::from(p.value()), p);
    }

    #[test]
    fn bounds() {
        assert!((UnitPoint::min() - 0.0).abs() < f64::EPSILON);
        assert!((SignedPoint::min() + 1.0).abs() < f64::EPSILON);
        assert!((SignedPoint::max() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_as_pair() {
        let p = SignedPoint::new(-0.3, -0.6);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[-0.3,-0.6]");
        let q: UnitPoint = serde_json::from_str("[1.5,0.25]").unwrap();
        assert_eq!(q.value(), [1.0, 0.25]);
    }
}
