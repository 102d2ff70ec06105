//! Shadow layer generation — one elevation, many stacked box-shadows.
//!
//! A shadow at elevation `z` is drawn as `layer_count` box-shadow layers.
//! Layer `i` (1-based) sits at `t = i / layer_count` along the layer curve,
//! and its own elevation is the eased fraction of `z`:
//!
//! ```text
//! layer_z = B(t) · z                    (B: anchored cubic Bezier, Y only)
//!
//! x       = -offset.x · 100 · layer_z
//! y       = -offset.y · 100 · layer_z
//! blur    =  layer_z · 100 · blur
//! spread  =  layer_z ·  20 · spread
//! opacity =  0.5 + layer_z · 0.2
//! ```
//!
//! Each layer's color is left to the cascade: it reads the shadow color
//! channels and alpha from custom properties that the shadow color
//! utilities set, so one elevation class works with any color class.

use std::fmt;

use tracing::trace;

use crate::bezier::cubic_bezier_y;
use crate::format::fixed2;
use crate::options::ShadowOptions;

/// Custom property base name the layers read their color from.
///
/// The color utilities define `{SHADOW_COLOR_PROPERTY}-rgb` and
/// `{SHADOW_COLOR_PROPERTY}-alpha` under it.
pub const SHADOW_COLOR_PROPERTY: &str = "--tw-shadow-color";

/// One box-shadow layer, in CSS pixels (opacity unitless).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub x: f64,
    pub y: f64,
    pub blur_radius: f64,
    pub spread_radius: f64,
    pub opacity: f64,
}

impl ShadowLayer {
    /// Layer `index` (1-based) of `options.layer_count` at elevation `z`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn at(index: usize, z: f64, options: &ShadowOptions) -> Self {
        let t = index as f64 / options.layer_count as f64;
        let (p1y, p2y) = options.curve_y();
        let layer_z = cubic_bezier_y(p1y, p2y, t) * z;
        Self::from_layer_z(layer_z, options)
    }

    /// The layer for an already-eased elevation.
    #[must_use]
    pub fn from_layer_z(layer_z: f64, options: &ShadowOptions) -> Self {
        let [dx, dy] = options.offset;
        Self {
            x: -dx * 100.0 * layer_z,
            y: -dy * 100.0 * layer_z,
            blur_radius: layer_z * (100.0 * options.blur),
            spread_radius: layer_z * 20.0 * options.spread,
            opacity: 0.5 + layer_z * 0.2,
        }
    }

    /// Every field rounded to 2 decimals, as it will be printed.
    #[must_use]
    pub fn rounded(self) -> Self {
        let r = |v: f64| fixed2(v).parse().unwrap_or(v);
        Self {
            x: r(self.x),
            y: r(self.y),
            blur_radius: r(self.blur_radius),
            spread_radius: r(self.spread_radius),
            opacity: r(self.opacity),
        }
    }
}

impl fmt::Display for ShadowLayer {
    /// `"{x}px {y}px {blur}px {spread}px rgb(var(--tw-shadow-color-rgb) / calc(var(--tw-shadow-color-alpha, 1) * {opacity}))"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px rgb(var({SHADOW_COLOR_PROPERTY}-rgb) / calc(var({SHADOW_COLOR_PROPERTY}-alpha, 1) * {}))",
            fixed2(self.x),
            fixed2(self.y),
            fixed2(self.blur_radius),
            fixed2(self.spread_radius),
            fixed2(self.opacity),
        )
    }
}

/// All layers for elevation `z`, nearest first (ascending index).
///
/// Total: any `z` (negative, above 1, non-finite) produces layers.
/// A `layer_count` of 0 produces none.
#[must_use]
pub fn generate_shadow_layers(z: f64, options: &ShadowOptions) -> Vec<ShadowLayer> {
    let layers: Vec<ShadowLayer> = (1..=options.layer_count)
        .map(|i| ShadowLayer::at(i, z, options))
        .collect();
    trace!(z, count = layers.len(), "generated shadow layers");
    layers
}

/// The layers for elevation `z` rendered as CSS shadow strings.
#[must_use]
pub fn generate_shadow(z: f64, options: &ShadowOptions) -> Vec<String> {
    generate_shadow_layers(z, options)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// The `box-shadow` property value for elevation `z`.
#[must_use]
pub fn box_shadow(z: f64, options: &ShadowOptions) -> String {
    generate_shadow(z, options).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ShadowOptionsPatch;
    use pretty_assertions::assert_eq;

    fn layer_string(x: &str, y: &str, blur: &str, spread: &str, opacity: &str) -> String {
        format!(
            "{x}px {y}px {blur}px {spread}px rgb(var(--tw-shadow-color-rgb) / calc(var(--tw-shadow-color-alpha, 1) * {opacity}))"
        )
    }

    #[test]
    fn default_options_at_ten_percent() {
        let shadow = generate_shadow(0.1, &ShadowOptions::default());
        assert_eq!(
            shadow,
            vec![
                layer_string("0.78", "1.56", "1.81", "-0.26", "0.51"),
                layer_string("2.22", "4.44", "5.19", "-0.74", "0.51"),
                layer_string("3.00", "6.00", "7.00", "-1.00", "0.52"),
            ]
        );
    }

    #[test]
    fn last_layer_numeric_fields() {
        let layers = generate_shadow_layers(0.1, &ShadowOptions::default());
        assert_eq!(
            layers[2].rounded(),
            ShadowLayer {
                x: 3.0,
                y: 6.0,
                blur_radius: 7.0,
                spread_radius: -1.0,
                opacity: 0.52,
            }
        );
    }

    #[test]
    fn layer_count_is_honored() {
        for count in [1, 2, 3, 7] {
            let options = ShadowOptions {
                layer_count: count,
                ..ShadowOptions::default()
            };
            for z in [0.0, 0.05, 0.5, 1.0] {
                assert_eq!(generate_shadow_layers(z, &options).len(), count);
            }
        }
    }

    #[test]
    fn zero_layers() {
        let options = ShadowOptions {
            layer_count: 0,
            ..ShadowOptions::default()
        };
        assert!(generate_shadow_layers(0.5, &options).is_empty());
        assert_eq!(box_shadow(0.5, &options), "");
    }

    #[test]
    fn deterministic() {
        let options = ShadowOptions::default();
        assert_eq!(generate_shadow(0.37, &options), generate_shadow(0.37, &options));
    }

    #[test]
    fn flat_elevation_has_no_negative_zero() {
        let shadow = generate_shadow(0.0, &ShadowOptions::default());
        for layer in shadow {
            assert_eq!(layer, layer_string("0.00", "0.00", "0.00", "0.00", "0.50"));
        }
    }

    #[test]
    fn negative_elevation_extrapolates() {
        let layers = generate_shadow_layers(-0.1, &ShadowOptions::default());
        let last = layers[2].rounded();
        assert_eq!((last.x, last.y), (-3.0, -6.0));
        assert!((last.opacity - 0.48).abs() < 1e-9);
    }

    #[test]
    fn curve_x_components_are_ignored() {
        let patch = ShadowOptionsPatch {
            layer_interval_curve: Some([[0.0, 0.0], [1.0, 1.0]]),
            ..ShadowOptionsPatch::default()
        };
        assert_eq!(
            generate_shadow(0.4, &ShadowOptions::from(&patch)),
            generate_shadow(0.4, &ShadowOptions::default())
        );
    }

    #[test]
    fn box_shadow_joins_layers() {
        let options = ShadowOptions::default();
        let joined = box_shadow(0.2, &options);
        assert_eq!(joined, generate_shadow(0.2, &options).join(", "));
        assert_eq!(joined.matches("px rgb(").count(), 3);
    }

    #[test]
    fn last_layer_reaches_full_elevation() {
        // B(1) = 1 for every curve, so the outermost layer uses z itself.
        let options = ShadowOptions {
            offset: [1.0, 0.0],
            blur: 1.0,
            spread: 1.0,
            layer_count: 4,
            layer_interval_curve: [[0.2, 0.9], [0.8, 0.1]],
        };
        let last = generate_shadow_layers(1.0, &options)[3].rounded();
        assert_eq!(
            last,
            ShadowLayer {
                x: -100.0,
                y: 0.0,
                blur_radius: 100.0,
                spread_radius: 20.0,
                opacity: 0.7,
            }
        );
    }
}
