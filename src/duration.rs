//! Duration expressions for the `-timeout` flag
//!
//! Accepts a sequence of decimal numbers each followed by a unit, such as
//! `30s`, `1m30s`, `1.5s` or `250ms`. Valid units are `ns`, `us` (or `µs`),
//! `ms`, `s`, `m` and `h`. Every number needs a unit; the only unit-less
//! value accepted is `0`.

use std::time::Duration;

/// Nanoseconds per unit
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1e3),
    ("µs", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
    ("m", 60e9),
    ("h", 3600e9),
];

/// Parse a duration expression (e.g., "30s", "1m30s", "500ms")
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s == "0" {
        return Some(Duration::ZERO);
    }

    let mut rest = s;
    let mut total = 0.0f64;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if digits == 0 {
            return None;
        }
        let value: f64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        let (_, scale) = UNITS.iter().find(|(name, _)| *name == unit)?;
        total += value * scale;
        rest = &rest[unit_len..];
    }

    from_nanos(total)
}

fn from_nanos(nanos: f64) -> Option<Duration> {
    if !nanos.is_finite() || nanos < 0.0 || nanos >= u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos.round() as u64))
}

/// clap value parser for the `-timeout` flag: a positive duration
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    match parse_duration(s) {
        Some(d) if !d.is_zero() => Ok(d),
        Some(_) => Err("timeout must be positive".to_string()),
        None => Err(format!("invalid duration {:?}", s)),
    }
}
