//! Sentinel-carrying numeric output

use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived figure that may have no finite value
///
/// Ratios whose denominator can legitimately be zero (P/E with zero earnings,
/// annualized return from a zero base) report `NotFinite` instead of leaking
/// `NaN` or `Infinity`. On the wire this is a plain number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Metric {
    Finite(f64),
    NotFinite,
}

impl Metric {
    /// Wrap a computed value, mapping `NaN`/`Infinity` to `NotFinite`
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Metric::Finite(value)
        } else {
            Metric::NotFinite
        }
    }

    /// `numerator / denominator`, not finite for a zero denominator
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Metric::NotFinite;
        }
        Self::new(numerator / denominator)
    }

    /// Ratio expressed as a percentage
    pub fn percent(numerator: f64, denominator: f64) -> Self {
        Self::ratio(numerator, denominator).map(|r| r * 100.0)
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Finite(v) => Some(v),
            Metric::NotFinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Metric::Finite(_))
    }

    /// Apply `f` to a finite value, re-checking finiteness of the result
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        match self {
            Metric::Finite(v) => Self::new(f(v)),
            Metric::NotFinite => Metric::NotFinite,
        }
    }

    pub fn unwrap_or(self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map(Metric::new).unwrap_or(Metric::NotFinite)
    }
}

impl From<Metric> for Option<f64> {
    fn from(metric: Metric) -> Self {
        metric.value()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Finite(v) => fmt::Display::fmt(v, f),
            Metric::NotFinite => f.pad("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_values_become_sentinel() {
        assert_eq!(Metric::new(f64::NAN), Metric::NotFinite);
        assert_eq!(Metric::new(f64::INFINITY), Metric::NotFinite);
        assert_eq!(Metric::new(2.5), Metric::Finite(2.5));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Metric::ratio(10.0, 0.0), Metric::NotFinite);
        assert_eq!(Metric::percent(1.0, 4.0), Metric::Finite(25.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.2}", Metric::Finite(1.23456)), "1.23");
        assert_eq!(format!("{}", Metric::NotFinite), "N/A");
    }

    #[test]
    fn test_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Metric::Finite(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Metric::NotFinite).unwrap(), "null");

        let back: Metric = serde_json::from_str("null").unwrap();
        assert_eq!(back, Metric::NotFinite);
        let back: Metric = serde_json::from_str("42.0").unwrap();
        assert_eq!(back, Metric::Finite(42.0));
    }
}
