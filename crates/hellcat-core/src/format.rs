//! Compact formatting helpers for listing columns.

use std::fmt;

/// SI prefixes for successive powers of 1000.
const SI_PREFIXES: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// A count scaled down to an SI prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude {
    /// Scaled value, below 1000 unless the prefixes ran out.
    pub value: f64,
    /// SI prefix symbol, empty for values below 1000.
    pub prefix: &'static str,
}

impl Magnitude {
    /// Scale `n` by powers of 1000.
    pub fn si(n: u64) -> Self {
        let mut exponent = 0;
        let mut divisor: u64 = 1;
        while exponent + 1 < SI_PREFIXES.len() && n / divisor >= 1000 {
            divisor = divisor.saturating_mul(1000);
            exponent += 1;
        }

        Self {
            value: n as f64 / divisor as f64,
            prefix: SI_PREFIXES[exponent],
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.prefix)
    }
}

/// Format a neighborhood count, e.g. `3` or `1.5k`.
pub fn format_neighbors(n: u64) -> String {
    Magnitude::si(n).to_string()
}

/// Format a byte size with the fraction dropped, e.g. `5B` or `1kB`.
pub fn format_size(bytes: u64) -> String {
    let m = Magnitude::si(bytes);
    format!("{}{}B", m.value.trunc() as u64, m.prefix)
}

/// Shorten `s` to exactly `limit` characters around a `...` marker.
///
/// Strings that already fit are returned unchanged.
pub fn abbreviate(s: &str, limit: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= limit {
        return s.to_string();
    }
    if limit < 3 {
        return ".".repeat(limit);
    }

    let head = (limit - 2) / 2;
    let tail = (limit - 3) / 2;
    let mut out: String = chars[..head].iter().collect();
    out.push_str("...");
    out.extend(&chars[chars.len() - tail..]);
    out
}
