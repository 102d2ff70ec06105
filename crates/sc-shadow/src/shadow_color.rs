//! Shadow color derivation — from a base color to the color its shadow
//! should be.
//!
//! The base color is parsed, converted to HSV and handed to a
//! [`ShadowColorGenerator`] together with the color as originally written.
//! Whatever tagged color the generator returns is converted back to 8-bit
//! RGB and published in three forms:
//!
//! ```text
//! "#fff" ──parse──▶ rgb(255 255 255) ──▶ hsv(0 0% 100%)
//!                                           │ Darken(25)
//!                                           ▼
//!        { rgb: "191 191 191", alpha: 1, color: "rgb(191 191 191 / 1)" }
//! ```
//!
//! RGB output keeps the result readable by editor tooling that previews
//! colors in generated CSS.

use sc_color::{Channels, Color};
use serde::Serialize;
use tracing::debug;

use crate::format::number;

/// Derives a shadow color from a base color.
///
/// `hsv` is the base color converted to HSV; `original` is the base color
/// in the model it was written in. The result may use any model.
///
/// Implemented for [`Darken`], [`Identity`] and any
/// `Fn(Color, Color) -> Color` closure.
pub trait ShadowColorGenerator {
    fn generate(&self, hsv: Color, original: Color) -> Color;
}

impl<F> ShadowColorGenerator for F
where
    F: Fn(Color, Color) -> Color,
{
    fn generate(&self, hsv: Color, original: Color) -> Color {
        self(hsv, original)
    }
}

/// Lower the HSV value channel by `amount`, floored at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Darken {
    pub amount: f64,
}

impl Default for Darken {
    fn default() -> Self {
        Self { amount: 25.0 }
    }
}

impl ShadowColorGenerator for Darken {
    fn generate(&self, hsv: Color, _original: Color) -> Color {
        let [h, s, v] = hsv.to_hsv().values();
        hsv.with_channels(Channels::Hsv([h, s, (v - self.amount).max(0.0)]))
    }
}

/// Return the HSV color unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ShadowColorGenerator for Identity {
    fn generate(&self, hsv: Color, _original: Color) -> Color {
        hsv
    }
}

/// A derived shadow color in the forms the utilities publish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedColor {
    /// Space-separated 8-bit channels: `"191 191 191"`.
    pub rgb: String,
    pub alpha: f64,
    /// `"rgb({rgb} / {alpha})"`.
    pub color: String,
}

impl GeneratedColor {
    fn from_color(color: Color) -> Self {
        let channels: Vec<String> = color.rgb8().iter().map(ToString::to_string).collect();
        let rgb = channels.join(" ");
        let alpha = color.alpha;
        Self {
            color: format!("rgb({rgb} / {})", number(alpha)),
            rgb,
            alpha,
        }
    }
}

/// Derive the shadow color for `input` with `generator`.
///
/// Returns `None` when `input` is not a parseable color; callers treat that
/// as "emit nothing".
#[must_use]
pub fn generate_shadow_color<G>(input: &str, generator: &G) -> Option<GeneratedColor>
where
    G: ShadowColorGenerator + ?Sized,
{
    let original = match Color::parse(input) {
        Ok(color) => color,
        Err(e) => {
            debug!(input, error = %e, "ignoring unparseable color");
            return None;
        }
    };

    Some(derive_shadow_color(original, generator))
}

/// Run `generator` on an already parsed color.
#[must_use]
pub fn derive_shadow_color<G>(original: Color, generator: &G) -> GeneratedColor
where
    G: ShadowColorGenerator + ?Sized,
{
    GeneratedColor::from_color(generator.generate(original.to_hsv(), original))
}

/// [`generate_shadow_color`] with the default [`Darken`] generator.
#[must_use]
pub fn generate_default_shadow_color(input: &str) -> Option<GeneratedColor> {
    generate_shadow_color(input, &Darken::default())
}
