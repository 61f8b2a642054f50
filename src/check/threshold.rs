use std::fmt;
use std::str::FromStr;

/// A parsed warning or critical boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdRule {
    /// Alarm when the value exceeds `max`.
    Bound(f64),
    /// Alarm when the value falls outside `[low, high]`.
    ///
    /// `low <= high` is not enforced.
    Range(f64, f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty threshold")]
    Empty,
    #[error("threshold '{0}' has more than one ':'")]
    TooManyColons(String),
    #[error("threshold '{input}': '{part}' is not a number")]
    NotANumber { input: String, part: String },
}

impl ThresholdRule {
    pub fn is_breached(&self, value: f64) -> bool {
        match *self {
            ThresholdRule::Bound(max) => value > max,
            ThresholdRule::Range(low, high) => value < low || value > high,
        }
    }
}

impl FromStr for ThresholdRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let parts: Vec<&str> = input.split(':').collect();
        match parts.as_slice() {
            [max] => Ok(ThresholdRule::Bound(parse_number(input, max)?)),
            [low, high] => Ok(ThresholdRule::Range(
                parse_number(input, low)?,
                parse_number(input, high)?,
            )),
            _ => Err(ParseError::TooManyColons(input.to_string())),
        }
    }
}

fn parse_number(input: &str, part: &str) -> Result<f64, ParseError> {
    let part = part.trim();
    part.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::NotANumber {
            input: input.to_string(),
            part: part.to_string(),
        })
}

/// Renders the rule in the same `N` / `N:M` form it was parsed from.
impl fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdRule::Bound(max) => write!(f, "{}", max),
            ThresholdRule::Range(low, high) => write!(f, "{}:{}", low, high),
        }
    }
}
