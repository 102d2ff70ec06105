// SPDX-License-Identifier: MIT
//
// CSS color grammar — the subset utility frameworks feed us.
//
//   #rgb  #rgba  #rrggbb  #rrggbbaa
//   rgb(255 0 0)          rgb(255 0 0 / 0.5)     rgb(100% 0% 0% / 50%)
//   rgb(255, 0, 0)        rgba(255, 0, 0, 0.5)
//   hsl(120deg 50% 50%)   hsl(0.5turn 50% 50% / 0.2)
//   hsl(120, 50%, 50%)    hsla(120, 50%, 50%, 0.2)
//   transparent           red  skyblue  rebeccapurple
//
// Function names and units are case-insensitive. Out-of-range channels are
// clamped rather than rejected; anything structurally wrong is an error.

use thiserror::Error;

use crate::color::Color;
use crate::named::named_color;

/// Why a string is not a color we understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `#{0}`")]
    InvalidHex(String),

    #[error("unsupported color syntax `{0}`")]
    Unsupported(String),

    #[error("`{function}()` expects 3 channels and an optional alpha, got {found} values")]
    ArgumentCount { function: String, found: usize },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

/// Parse a CSS color string into a [`Color`] tagged with its written model.
///
/// Hex and `rgb()` input produce RGB channels, `hsl()` input produces HSL
/// channels with the hue normalized into `[0, 360)`.
///
/// # Errors
///
/// Returns [`ParseColorError`] when the input is not one of the supported
/// forms.
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if s == "transparent" {
        return Ok(Color::TRANSPARENT);
    }

    if let Some([r, g, b]) = named_color(&s) {
        return Ok(Color::rgb(f64::from(r), f64::from(g), f64::from(b)));
    }

    let (function, body) = split_function(&s)?;
    let args = Args::split(function, body)?;

    match function {
        "rgb" | "rgba" => {
            let [r, g, b] = args.channels;
            Ok(Color::rgba(
                parse_rgb_channel(r)?,
                parse_rgb_channel(g)?,
                parse_rgb_channel(b)?,
                args.alpha.map_or(Ok(1.0), parse_alpha)?,
            ))
        }
        "hsl" | "hsla" => {
            let [h, sat, l] = args.channels;
            Ok(Color::hsla(
                parse_hue(h)?,
                parse_percentage(sat)?,
                parse_percentage(l)?,
                args.alpha.map_or(Ok(1.0), parse_alpha)?,
            ))
        }
        _ => Err(ParseColorError::Unsupported(s.clone())),
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let invalid = || ParseColorError::InvalidHex(s.to_string());
    let bytes = s.as_bytes();

    let digits: Vec<u8> = bytes
        .iter()
        .map(|&c| parse_hex_digit(c))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    let rgba = match digits.as_slice() {
        // #RGB / #RGBA — each digit doubled
        [r, g, b] => [r * 17, g * 17, b * 17, 255],
        [r, g, b, a] => [r * 17, g * 17, b * 17, a * 17],
        // #RRGGBB / #RRGGBBAA
        [r1, r0, g1, g0, b1, b0] => [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255],
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, a1 << 4 | a0]
        }
        _ => return Err(invalid()),
    };

    let [r, g, b, a] = rgba.map(f64::from);
    Ok(Color::rgba(r, g, b, a / 255.0))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Functional Notation ─────────────────────────────────────────────────────

/// Split `name(body)` into its name and body.
fn split_function(s: &str) -> Result<(&str, &str), ParseColorError> {
    let unsupported = || ParseColorError::Unsupported(s.to_string());
    let open = s.find('(').ok_or_else(unsupported)?;
    let body = s[open + 1..].strip_suffix(')').ok_or_else(unsupported)?;
    let name = s[..open].trim_end();
    if !matches!(name, "rgb" | "rgba" | "hsl" | "hsla") {
        return Err(unsupported());
    }
    Ok((name, body))
}

/// The three channel tokens and the optional alpha token of a function body.
struct Args<'a> {
    channels: [&'a str; 3],
    alpha: Option<&'a str>,
}

impl<'a> Args<'a> {
    /// Accepts both the legacy comma syntax and the space syntax with an
    /// optional `/ alpha`. Mixing the two is an error.
    fn split(function: &str, body: &'a str) -> Result<Self, ParseColorError> {
        let count_error = |found| ParseColorError::ArgumentCount {
            function: function.to_string(),
            found,
        };

        if body.contains(',') {
            if body.contains('/') {
                return Err(ParseColorError::Unsupported(format!("{function}({body})")));
            }
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            return match parts.as_slice() {
                [a, b, c] => Ok(Self {
                    channels: [*a, *b, *c],
                    alpha: None,
                }),
                [a, b, c, alpha] => Ok(Self {
                    channels: [*a, *b, *c],
                    alpha: Some(*alpha),
                }),
                _ => Err(count_error(parts.len())),
            };
        }

        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };
        let parts: Vec<&str> = channels.split_whitespace().collect();
        let [a, b, c] = parts.as_slice() else {
            return Err(count_error(parts.len() + usize::from(alpha.is_some())));
        };
        if alpha.is_some_and(|a| a.is_empty() || a.contains(char::is_whitespace)) {
            return Err(count_error(parts.len() + 2));
        }
        Ok(Self {
            channels: [*a, *b, *c],
            alpha,
        })
    }
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

fn parse_number(token: &str) -> Result<f64, ParseColorError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::InvalidNumber(token.to_string()))
}

/// `255` or `100%`, clamped to 0–255.
fn parse_rgb_channel(token: &str) -> Result<f64, ParseColorError> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0 * 255.0,
        None => parse_number(token)?,
    };
    Ok(value.clamp(0.0, 255.0))
}

/// `50%` or `50`, clamped to 0–100.
fn parse_percentage(token: &str) -> Result<f64, ParseColorError> {
    let value = parse_number(token.strip_suffix('%').unwrap_or(token))?;
    Ok(value.clamp(0.0, 100.0))
}

/// `0.5` or `50%`, clamped to 0–1.
fn parse_alpha(token: &str) -> Result<f64, ParseColorError> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(token)?,
    };
    Ok(value.clamp(0.0, 1.0))
}

/// A hue angle in degrees, normalized into `[0, 360)`.
///
/// Bare numbers are degrees. `grad` is checked before `rad` since it shares
/// the suffix.
fn parse_hue(token: &str) -> Result<f64, ParseColorError> {
    let degrees = if let Some(v) = token.strip_suffix("deg") {
        parse_number(v)?
    } else if let Some(v) = token.strip_suffix("grad") {
        parse_number(v)? * 0.9
    } else if let Some(v) = token.strip_suffix("rad") {
        parse_number(v)?.to_degrees()
    } else if let Some(v) = token.strip_suffix("turn") {
        parse_number(v)? * 360.0
    } else {
        parse_number(token)?
    };
    Ok(degrees.rem_euclid(360.0))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
