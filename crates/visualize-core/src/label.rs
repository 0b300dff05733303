// File: crates/visualize-core/src/label.rs
// Summary: Axis label values (numeric or text) and their display formatting.

use std::fmt;
use std::sync::Arc;

use crate::stats::{parse_decimal, Numeric};

/// One axis label before formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    Number(f64),
    Text(String),
}

/// Formats a label for display; applied at layout time.
pub type LabelFormat = Arc<dyn Fn(&Label) -> String + Send + Sync>;

impl Label {
    /// True when the label coerces to a number: non-NaN numbers, and texts
    /// that are blank or parse as a float.
    pub fn is_numeric(&self) -> bool {
        match self {
            Label::Number(v) => !v.is_nan(),
            Label::Text(t) => {
                let t = t.trim();
                t.is_empty() || parse_decimal(t).is_some()
            }
        }
    }

    pub fn from_numbers(values: &[f64]) -> Vec<Label> {
        values.iter().copied().map(Label::Number).collect()
    }

    pub fn from_texts<S: AsRef<str>>(values: &[S]) -> Vec<Label> {
        values.iter().map(|s| Label::Text(s.as_ref().to_string())).collect()
    }
}

/// Shortest round-trip rendering of a number, with `0` for negative zero.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        v.to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(v) => f.write_str(&format_number(*v)),
            Label::Text(t) => f.write_str(t),
        }
    }
}

impl Numeric for Label {
    fn to_number(&self) -> Option<f64> {
        match self {
            Label::Number(v) => v.to_number(),
            Label::Text(t) => t.to_number(),
        }
    }
}

impl From<f64> for Label {
    fn from(v: f64) -> Self { Label::Number(v) }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self { Label::Text(v.to_string()) }
}

impl From<String> for Label {
    fn from(v: String) -> Self { Label::Text(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_detection_follows_coercion() {
        assert!(Label::from(3.0).is_numeric());
        assert!(!Label::from(f64::NAN).is_numeric());
        assert!(Label::from("2019").is_numeric());
        assert!(Label::from(" ").is_numeric());
        assert!(!Label::from("Jan").is_numeric());
        assert!(!Label::from("NaN").is_numeric());
        assert!(!Label::from("inf").is_numeric());
        assert!(!Label::from("Infinity").is_numeric());
    }

    #[test]
    fn numbers_display_without_trailing_zeros() {
        assert_eq!(Label::from(25.0).to_string(), "25");
        assert_eq!(Label::from(2.25).to_string(), "2.25");
        assert_eq!(Label::from(-0.0).to_string(), "0");
        assert_eq!(Label::from("Q1").to_string(), "Q1");
    }
}
