//! # sc-shadow — Colored Multi-Layer Shadow Generation
//!
//! Turns a single elevation number into a stack of box-shadow layers that
//! read as depth, and a base color into the darker color its shadow should
//! be cast in.
//!
//! # Architecture
//!
//! ```text
//! z (elevation) + ShadowOptions
//!     │
//!     ▼
//! bezier.rs:  ease i / layerCount along the layer curve (Y only)
//!     │
//!     ▼
//! layer.rs:   offset, blur, spread, opacity per layer → box-shadow string
//!     │
//!     ▼
//! utility.rs: shadow-{prefix}-{n} classes ◀── shadow_color.rs: base color → shadow color
//!     │                                           (sc-color parse + HSV)
//!     ▼
//! css.rs:     rules → stylesheet text
//! ```
//!
//! `tuner.rs` holds the math behind the interactive editor: pointer mapping
//! for the offset grid and curve handles, preview transforms and the config
//! and class snippets it hands back to the user. `point.rs` supplies the
//! clamped coordinates those controls edit.
//!
//! Every layer carries its color through `var(--tw-shadow-color-rgb)`, so
//! one elevation class combines with any color class.

// Single-char math variables (x, y, z, t) follow the formulas.
#![allow(clippy::many_single_char_names)]
// Layer indices and counts are small; usize → f64 is exact for them.
#![allow(clippy::cast_precision_loss)]
// Plain a * b + c keeps results identical to the reference numbers.
#![allow(clippy::suboptimal_flops)]
// Exact float comparison is intended in tests of clamped/rounded values.
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod bezier;
pub mod css;
pub mod format;
pub mod layer;
pub mod options;
pub mod palette;
pub mod point;
pub mod shadow_color;
pub mod tuner;
pub mod utility;

pub use bezier::LayerCurve;
pub use css::{Declaration, Rule, Stylesheet};
pub use layer::{
    SHADOW_COLOR_PROPERTY, ShadowLayer, box_shadow, generate_shadow, generate_shadow_layers,
};
pub use options::{ShadowOptions, ShadowOptionsPatch};
pub use palette::{Palette, flatten_color_palette};
pub use point::{Axis, SignedPoint, UnitPoint};
pub use shadow_color::{
    Darken, GeneratedColor, Identity, ShadowColorGenerator, derive_shadow_color,
    generate_default_shadow_color, generate_shadow_color,
};
pub use utility::{ColoredShadow, ColoredShadowOptions, ShadowColor, ShadowColorOptions};
