//! Number formatting for generated CSS.

/// Two-decimal fixed notation: ties round away from zero, `-0` prints as
/// `0.00`.
///
/// Rust's `{:.2}` rounds exact ties to even. A value sits on a tie at two
/// decimals only when it is an odd multiple of 1/8, so those are detected
/// and rounded by hand; every other value goes through `{:.2}`.
#[must_use]
pub fn fixed2(v: f64) -> String {
    let eighths = v * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        // |v| * 100 is an exact half-integer here.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hundredths = (v.abs() * 100.0 + 0.5).floor() as u64;
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{:.2}", v + 0.0)
}

/// Shortest round-trip notation (`1`, `0.5`, `0.25`), `-0` as `0`.
#[must_use]
pub fn number(v: f64) -> String {
    format!("{}", v + 0.0)
}
