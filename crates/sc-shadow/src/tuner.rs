//! Tuning tool helpers — the pure half of the interactive shadow editor.
//!
//! The editor binds a handful of controls to [`TunerState`] and re-renders
//! on every input event:
//!
//! ```text
//! pointer on grid    ──grid_point──▶       offset (SignedPoint)
//! pointer on curve   ──DragOnRect──▶       drag position ──▶ control point (UnitPoint)
//! sliders            ──────────────▶       blur, spread, z
//!                                             │
//!                     TunerState::shadow_options()
//!                                             ▼
//!                  preview_style · class_snippet · config_snippet · curve_path
//! ```
//!
//! Everything here is a plain function of its inputs.

use std::fmt;

use crate::bezier::LayerCurve;
use crate::format::{fixed2, number};
use crate::layer::box_shadow;
use crate::options::ShadowOptions;
use crate::point::{SignedPoint, UnitPoint};
use crate::utility::PRESET_VALUES;

/// Layer count the editor previews with.
pub const TUNER_LAYER_COUNT: usize = 3;

// ─── State ───────────────────────────────────────────────────────────────────

/// The editor's adjustable parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunerState {
    pub offset: SignedPoint,
    pub blur: f64,
    pub spread: f64,
    pub curve: LayerCurve,
}

impl Default for TunerState {
    fn default() -> Self {
        let defaults = ShadowOptions::default();
        Self {
            offset: SignedPoint::from(defaults.offset),
            blur: defaults.blur,
            spread: defaults.spread,
            curve: LayerCurve::default(),
        }
    }
}

impl TunerState {
    /// The generator options this state describes.
    #[must_use]
    pub fn shadow_options(&self) -> ShadowOptions {
        ShadowOptions {
            offset: self.offset.value(),
            blur: self.blur,
            spread: self.spread,
            layer_count: TUNER_LAYER_COUNT,
            layer_interval_curve: [self.curve.p1.value(), self.curve.p2.value()],
        }
    }

    #[must_use]
    pub const fn with_offset(self, offset: SignedPoint) -> Self {
        Self { offset, ..self }
    }

    #[must_use]
    pub fn with_offset_x(self, x: f64) -> Self {
        self.with_offset(self.offset.with_x(x))
    }

    #[must_use]
    pub fn with_offset_y(self, y: f64) -> Self {
        self.with_offset(self.offset.with_y(y))
    }

    #[must_use]
    pub const fn with_blur(self, blur: f64) -> Self {
        Self { blur, ..self }
    }

    #[must_use]
    pub const fn with_spread(self, spread: f64) -> Self {
        Self { spread, ..self }
    }

    #[must_use]
    pub const fn with_curve(self, curve: LayerCurve) -> Self {
        Self { curve, ..self }
    }
}

// ─── Presets & Snippets ──────────────────────────────────────────────────────

/// `(value, z)` for every preset, `z = value / max(value)`.
#[must_use]
pub fn preset_elevations() -> Vec<(u32, f64)> {
    let max = PRESET_VALUES.iter().copied().max().unwrap_or(1);
    PRESET_VALUES
        .iter()
        .map(|&v| (v, f64::from(v) / f64::from(max)))
        .collect()
}

/// The class value for elevation `z`: the preset number when there is one,
/// an arbitrary `[n]` value otherwise.
#[must_use]
pub fn elevation_class_value(z: f64) -> String {
    let n = (z * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let is_preset = n >= 0.0 && PRESET_VALUES.contains(&(n as u32));
    if is_preset {
        number(n)
    } else {
        format!("[{}]", number(n))
    }
}

/// `className="{color_class} shadow-{prefix}-{value}"`.
#[must_use]
pub fn class_snippet(color_class: &str, prefix: &str, z: f64) -> String {
    format!(
        "className=\"{color_class} shadow-{prefix}-{}\"",
        elevation_class_value(z)
    )
}

/// A `tailwind.config.js` that registers both plugins with `options`.
#[must_use]
pub fn config_snippet(options: &ShadowOptions) -> String {
    let json = |v: serde_json::Value| v.to_string();
    let entries = [
        ("offset", json(serde_json::json!(options.offset))),
        ("blur", json(serde_json::json!(options.blur))),
        ("spread", json(serde_json::json!(options.spread))),
        ("layerCount", json(serde_json::json!(options.layer_count))),
        (
            "layerIntervalCurve",
            json(serde_json::json!(options.layer_interval_curve)),
        ),
    ];
    let body = entries
        .iter()
        .map(|(k, v)| format!("        {k}: {v}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "// tailwind.config.js

import {{ coloredShadow, shadowColor }} from \"@achamaro/tailwindcss-shadow\";

/** @type {{import('tailwindcss').Config}} */
export default {{
  // ...
  plugins: [
    shadowColor(),
    coloredShadow({{
{body}
    }}),
  ],
}};
"
    )
}

// ─── Preview ─────────────────────────────────────────────────────────────────

/// Inline style of the preview tile at elevation `z`.
///
/// Besides the shadow, the tile drifts away from the light and grows
/// slightly as it rises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewStyle {
    pub box_shadow: String,
    pub transform: String,
}

impl fmt::Display for PreviewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "box-shadow: {}; transform: {};",
            self.box_shadow, self.transform
        )
    }
}

/// `translate(offset · 10z px) scale(1 + 0.1z)` plus the shadow itself.
#[must_use]
pub fn preview_style(z: f64, options: &ShadowOptions) -> PreviewStyle {
    let [dx, dy] = options.offset;
    let translate = format!("{}px, {}px", fixed2(dx * 10.0 * z), fixed2(dy * 10.0 * z));
    PreviewStyle {
        box_shadow: box_shadow(z, options),
        transform: format!("translate({translate}) scale({})", number(1.0 + 0.1 * z)),
    }
}

// ─── Pointer Mapping ─────────────────────────────────────────────────────────

/// Offset for a pointer at fraction `(fx, fy)` of the offset grid.
#[must_use]
pub fn grid_point(fx: f64, fy: f64) -> SignedPoint {
    SignedPoint::new(fx * 2.0 - 1.0, fy * 2.0 - 1.0)
}

/// Where an offset's handle sits on the grid, as fractions of its size.
#[must_use]
pub fn grid_position(offset: SignedPoint) -> [f64; 2] {
    [(offset.x() + 1.0) / 2.0, (offset.y() + 1.0) / 2.0]
}

/// Control point → drag position (screen Y grows downward).
#[must_use]
pub fn curve_point_to_drag(point: UnitPoint) -> [f64; 2] {
    [point.x(), 1.0 - point.y()]
}

/// Drag position → control point.
#[must_use]
pub fn drag_to_curve_point([x, y]: [f64; 2]) -> UnitPoint {
    UnitPoint::new(x, 1.0 - y)
}

/// Pointer position inside a rectangle as clamped `[0, 1]` fractions.
///
/// An axis with no positive extent (empty, negative or NaN size) maps to 0.
#[must_use]
pub fn pointer_in_rect(pointer: [f64; 2], origin: [f64; 2], size: [f64; 2]) -> [f64; 2] {
    [0, 1].map(|i| {
        if is_degenerate(size[i]) {
            return 0.0;
        }
        let fraction = (pointer[i] - origin[i]) / size[i];
        if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
    })
}

const fn is_degenerate(extent: f64) -> bool {
    extent.is_nan() || extent <= 0.0
}

/// A drag that started on a handle: the handle moves by the pointer's
/// travel relative to the container, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOnRect {
    start_position: [f64; 2],
    start_pointer: [f64; 2],
}

impl DragOnRect {
    #[must_use]
    pub const fn start(position: [f64; 2], pointer: [f64; 2]) -> Self {
        Self {
            start_position: position,
            start_pointer: pointer,
        }
    }

    /// The dragged position for the current pointer in a container of `size`.
    ///
    /// Along an axis with no positive extent the handle stays put.
    #[must_use]
    pub fn position(&self, pointer: [f64; 2], size: [f64; 2]) -> [f64; 2] {
        [0, 1].map(|i| {
            let delta = if is_degenerate(size[i]) {
                0.0
            } else {
                (pointer[i] - self.start_pointer[i]) / size[i]
            };
            let position = self.start_position[i] + delta;
            if position.is_nan() { 0.0 } else { position.clamp(0.0, 1.0) }
        })
    }
}

/// SVG path of the layer curve in a `0 0 1 0.5` view box.
///
/// The box is half as tall as wide and Y points down, so control point Y
/// values are inverted and halved.
#[must_use]
pub fn curve_path(curve: LayerCurve) -> String {
    let y = |p: UnitPoint| number((1.0 - p.y()) / 2.0);
    format!(
        "M 0 0.5 C {} {}, {} {}, 1 0",
        number(curve.p1.x()),
        y(curve.p1),
        number(curve.p2.x()),
        y(curve.p2),
    )
}
