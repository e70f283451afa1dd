use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// Numeric comparison used by directory filters.
///
/// Parsed from "<N", "<=N", ">N", ">=N", "N-M" (inclusive) or "N".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    LessThan(f64),
    AtMost(f64),
    GreaterThan(f64),
    AtLeast(f64),
    Equal(f64),
    Between(f64, f64),
}

impl Threshold {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(Threshold::AtLeast(parse_number(val)?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(Threshold::AtMost(parse_number(val)?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(Threshold::GreaterThan(parse_number(val)?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(Threshold::LessThan(parse_number(val)?))
        } else if let Some((low, high)) = split_range(s) {
            let low = parse_number(low)?;
            let high = parse_number(high)?;
            if low > high {
                bail!("Range start exceeds end: {}", s)
            }
            Ok(Threshold::Between(low, high))
        } else {
            Ok(Threshold::Equal(parse_number(s)?))
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::LessThan(n) => value < n,
            Threshold::AtMost(n) => value <= n,
            Threshold::GreaterThan(n) => value > n,
            Threshold::AtLeast(n) => value >= n,
            Threshold::Equal(n) => value == n,
            Threshold::Between(low, high) => value >= low && value <= high,
        }
    }
}

fn parse_number(s: &str) -> Result<f64> {
    let s = s.trim();
    let n: f64 = s.parse()?;
    if !n.is_finite() {
        bail!("Not a finite number: {}", s)
    }
    Ok(n)
}

/// Split "N-M" on the first dash that is neither a leading sign nor an exponent sign
fn split_range(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    s.char_indices()
        .find(|&(i, c)| c == '-' && i > 0 && !matches!(bytes[i - 1], b'e' | b'E'))
        .map(|(i, _)| (&s[..i], &s[i + 1..]))
}

impl FromStr for Threshold {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Threshold::parse(s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::LessThan(n) => write!(f, "<{}", n),
            Threshold::AtMost(n) => write!(f, "<={}", n),
            Threshold::GreaterThan(n) => write!(f, ">{}", n),
            Threshold::AtLeast(n) => write!(f, ">={}", n),
            Threshold::Equal(n) => write!(f, "{}", n),
            Threshold::Between(low, high) => write!(f, "{}-{}", low, high),
        }
    }
}
