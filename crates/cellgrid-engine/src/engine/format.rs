use regex::Regex;
use std::sync::OnceLock;

/// Format a number for display and for substitution into expressions.
///
/// Integers print without a fraction, other values use the shortest decimal
/// that round-trips. Never uses exponent notation, so the output is always a
/// valid NUMBER token. Negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?<number>[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("leading number regex compiles")
    })
}

/// Numeric reading of a cell value, if it has one.
///
/// Reads the longest decimal literal at the start of the value after leading
/// whitespace and ignores the rest, so `"12px"` is 12 and `"abc3"` has no
/// number. Non-finite results (`inf`, `NaN`, `1e400`) do not count.
pub fn parse_number(value: &str) -> Option<f64> {
    let caps = leading_number_re().captures(value)?;
    caps["number"].parse::<f64>().ok().filter(|n| n.is_finite())
}
