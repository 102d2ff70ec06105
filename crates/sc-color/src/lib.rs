// SPDX-License-Identifier: MIT
//
// sc-color — CSS color input for scgen.
//
// Parses the CSS color strings a utility framework hands us (hex, rgb(),
// rgba(), hsl(), hsla(), named keywords) into a tagged color value that remembers which
// model it was written in, and converts between the RGB, HSL and HSV
// models with integer-rounded channels.
//
// Rounding happens at every conversion step. Shadow colors are derived by
// walking RGB/HSL → HSV → (adjust) → RGB, and the published outputs depend
// on each hop landing on whole numbers.

pub mod color;
pub mod named;
pub mod parse;

pub use color::{Channels, Color, Model};
pub use named::named_color;
pub use parse::{ParseColorError, parse_color};
