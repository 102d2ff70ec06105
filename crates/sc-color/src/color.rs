// SPDX-License-Identifier: MIT
//
// sc-color color model — a tagged RGB/HSL/HSV value with rounded conversions.
//
// Single-character variable names (r, g, b, h, s, l, v) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Channel comparisons against the max/min are exact by construction.
#![allow(clippy::float_cmp)]
// Arithmetic order is kept plain (no fused multiply-add) so rounded
// channels land on the same integers as the reference conversions.
#![allow(clippy::suboptimal_flops)]
//
// Channel ranges:
//
//   rgb  r, g, b    0–255
//   hsl  h          0–360 (degrees)
//        s, l       0–100
//   hsv  h          0–360 (degrees)
//        s, v       0–100
//   alpha           0–1
//
// Every conversion rounds its output channels to whole numbers (half up).
// Chaining conversions therefore quantizes at each hop:
//
//   hsl(0 50% 50%) → rgb           = 191 64 64
//   hsl(0 50% 50%) → hsv → rgb     = 191 63 63

use std::fmt;
use std::str::FromStr;

use crate::parse::{ParseColorError, parse_color};

// ─── Model ───────────────────────────────────────────────────────────────────

/// The color model a [`Color`]'s channels are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Rgb,
    Hsl,
    Hsv,
}

impl Model {
    /// Lowercase model name, as used in CSS function syntax.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Channels ────────────────────────────────────────────────────────────────

/// Three channel values tagged with the model they belong to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channels {
    /// Red, green, blue in 0–255.
    Rgb([f64; 3]),
    /// Hue in degrees, saturation and lightness in 0–100.
    Hsl([f64; 3]),
    /// Hue in degrees, saturation and value in 0–100.
    Hsv([f64; 3]),
}

impl Channels {
    /// The model tag.
    #[must_use]
    pub const fn model(self) -> Model {
        match self {
            Self::Rgb(_) => Model::Rgb,
            Self::Hsl(_) => Model::Hsl,
            Self::Hsv(_) => Model::Hsv,
        }
    }

    /// The raw channel values, regardless of model.
    #[must_use]
    pub const fn values(self) -> [f64; 3] {
        match self {
            Self::Rgb(v) | Self::Hsl(v) | Self::Hsv(v) => v,
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A parsed color: channels in their original model plus an alpha.
///
/// `Color` is a plain `Copy` value. Conversions return new values and keep
/// the alpha untouched.
///
/// # Examples
///
/// ```
/// use sc_color::{Channels, Color};
///
/// let c: Color = "hsl(360deg 50% 50%)".parse().unwrap();
/// let hsv = c.to_hsv();
/// assert_eq!(hsv.channels, Channels::Hsv([0.0, 67.0, 75.0]));
/// assert_eq!(hsv.rgb8(), [191, 63, 63]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub channels: Channels,

    /// Opacity: 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// An opaque RGB color (channels 0–255).
    #[inline]
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// An RGB color with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            channels: Channels::Rgb([r, g, b]),
            alpha,
        }
    }

    /// An opaque HSL color (hue in degrees, saturation/lightness 0–100).
    #[inline]
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::hsla(h, s, l, 1.0)
    }

    /// An HSL color with alpha.
    #[inline]
    #[must_use]
    pub const fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self {
            channels: Channels::Hsl([h, s, l]),
            alpha,
        }
    }

    /// An opaque HSV color (hue in degrees, saturation/value 0–100).
    #[inline]
    #[must_use]
    pub const fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::hsva(h, s, v, 1.0)
    }

    /// An HSV color with alpha.
    #[inline]
    #[must_use]
    pub const fn hsva(h: f64, s: f64, v: f64, alpha: f64) -> Self {
        Self {
            channels: Channels::Hsv([h, s, v]),
            alpha,
        }
    }

    /// Parse a CSS color string. See [`parse_color`] for the grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseColorError`] describing the first problem found.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        parse_color(s)
    }

    /// Transparent black, what the `transparent` keyword resolves to.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The model the channels are expressed in.
    #[inline]
    #[must_use]
    pub const fn model(self) -> Model {
        self.channels.model()
    }

    /// Raw channel values.
    #[inline]
    #[must_use]
    pub const fn values(self) -> [f64; 3] {
        self.channels.values()
    }

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Return a copy with different channels, keeping the alpha.
    #[inline]
    #[must_use]
    pub const fn with_channels(self, channels: Channels) -> Self {
        Self { channels, ..self }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to RGB. RGB input passes through unrounded.
    #[must_use]
    pub fn to_rgb(self) -> Self {
        let rgb = match self.channels {
            Channels::Rgb(rgb) => rgb,
            Channels::Hsl(hsl) => hsl_to_rgb(hsl),
            Channels::Hsv(hsv) => hsv_to_rgb(hsv),
        };
        self.with_channels(Channels::Rgb(rgb))
    }

    /// Convert to HSL. HSL input passes through.
    #[must_use]
    pub fn to_hsl(self) -> Self {
        let hsl = match self.channels {
            Channels::Rgb(rgb) => rgb_to_hsl(rgb),
            Channels::Hsl(hsl) => hsl,
            Channels::Hsv(hsv) => hsv_to_hsl(hsv),
        };
        self.with_channels(Channels::Hsl(hsl))
    }

    /// Convert to HSV. HSV input passes through.
    #[must_use]
    pub fn to_hsv(self) -> Self {
        let hsv = match self.channels {
            Channels::Rgb(rgb) => rgb_to_hsv(rgb),
            Channels::Hsl(hsl) => hsl_to_hsv(hsl),
            Channels::Hsv(hsv) => hsv,
        };
        self.with_channels(Channels::Hsv(hsv))
    }

    /// 8-bit RGB channels, rounded and clamped to 0–255.
    #[must_use]
    pub fn rgb8(self) -> [u8; 3] {
        self.to_rgb().values().map(to_u8)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for Color {
    /// CSS-style space syntax: `rgb(255 0 0 / 1)`, `hsl(0 100% 50% / 1)`.
    ///
    /// HSV has no CSS syntax; it prints in the same shape for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values();
        match self.channels {
            Channels::Rgb(_) => write!(f, "rgb({a} {b} {c} / {})", self.alpha),
            Channels::Hsl(_) | Channels::Hsv(_) => {
                write!(f, "{}({a} {b}% {c}% / {})", self.model(), self.alpha)
            }
        }
    }
}

// ─── Conversion Math ─────────────────────────────────────────────────────────

/// RGB (0–255) → HSV, rounded.
#[must_use]
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    if diff == 0.0 {
        return round3([0.0, 0.0, v * 100.0]);
    }

    let s = diff / v;
    let dc = |c: f64| (v - c) / 6.0 / diff + 0.5;
    let (rd, gd, bd) = (dc(r), dc(g), dc(b));

    let mut h = if r == v {
        bd - gd
    } else if g == v {
        1.0 / 3.0 + rd - bd
    } else {
        2.0 / 3.0 + gd - rd
    };
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    round3([h * 360.0, s * 100.0, v * 100.0])
}

/// RGB (0–255) → HSL, rounded.
#[must_use]
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let h = if max == min {
        0.0
    } else if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = (h * 60.0).min(360.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (min + max) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    round3([h, s * 100.0, l * 100.0])
}

/// HSL → RGB (0–255), rounded.
#[must_use]
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0] / 360.0;
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    if s == 0.0 {
        return round3([l * 255.0; 3]);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let channel = |offset: f64| {
        let mut t3 = h + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }
        let val = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        val * 255.0
    };

    round3([channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0)])
}

/// HSL → HSV, rounded.
#[must_use]
pub fn hsl_to_hsv(hsl: [f64; 3]) -> [f64; 3] {
    let h = hsl[0];
    let mut s = hsl[1] / 100.0;
    let mut l = hsl[2] / 100.0;
    let mut smin = s;
    let lmin = l.max(0.01);

    l *= 2.0;
    s *= if l <= 1.0 { l } else { 2.0 - l };
    smin *= if lmin <= 1.0 { lmin } else { 2.0 - lmin };
    let v = (l + s) / 2.0;
    let sv = if l == 0.0 {
        (2.0 * smin) / (lmin + smin)
    } else {
        (2.0 * s) / (l + s)
    };

    round3([h, finite_or_zero(sv) * 100.0, v * 100.0])
}

/// HSV → RGB (0–255), rounded.
#[must_use]
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0] / 60.0;
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;

    let sector = h.floor().rem_euclid(6.0);
    let f = h - h.floor();
    let p = 255.0 * v * (1.0 - s);
    let q = 255.0 * v * (1.0 - s * f);
    let t = 255.0 * v * (1.0 - s * (1.0 - f));
    let v = v * 255.0;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rgb = match sector as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };
    round3(rgb)
}

/// HSV → HSL, rounded.
#[must_use]
pub fn hsv_to_hsl(hsv: [f64; 3]) -> [f64; 3] {
    let h = hsv[0];
    let s = hsv[1] / 100.0;
    let v = hsv[2] / 100.0;
    let vmin = v.max(0.01);

    let l = (2.0 - s) * v;
    let lmin = (2.0 - s) * vmin;
    let sl = s * vmin / if lmin <= 1.0 { lmin } else { 2.0 - lmin };

    round3([h, finite_or_zero(sl) * 100.0, l / 2.0 * 100.0])
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Round half up (toward +∞), the rounding every conversion applies.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[inline]
fn round3(values: [f64; 3]) -> [f64; 3] {
    values.map(round_half_up)
}

#[inline]
const fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Round and clamp a 0–255 channel into a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation; NaN → 0.
    round_half_up(v).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
