//! Observation data and the algorithm demo inputs.

use serde::Deserialize;

use crate::domain::algorithm::DEFAULT_FIBONACCI_TERMS;

/// Shirt colors observed over one week, Monday through Friday.
const SAMPLE_WEEK: [&[&str]; 5] = [
    &[
        "GREEN", "YELLOW", "GREEN", "BROWN", "BLUE", "PINK", "BLUE", "YELLOW", "ORANGE", "CREAM",
        "ORANGE", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "GREEN",
    ],
    &[
        "BROWN", "GREEN", "BROWN", "BLUE", "BLUE", "BLUE", "PINK", "PINK", "ORANGE", "ORANGE",
        "RED", "WHITE", "BLUE", "WHITE", "WHITE", "BLUE", "BLUE", "BLUE",
    ],
    &[
        "GREEN", "YELLOW", "GREEN", "BROWN", "BLUE", "PINK", "RED", "YELLOW", "ORANGE", "RED",
        "ORANGE", "RED", "BLUE", "BLUE", "WHITE", "BLUE", "BLUE", "WHITE", "WHITE",
    ],
    &[
        "BLUE", "BLUE", "GREEN", "WHITE", "BLUE", "BROWN", "PINK", "YELLOW", "ORANGE", "CREAM",
        "ORANGE", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "GREEN",
    ],
    &[
        "GREEN", "WHITE", "GREEN", "BROWN", "BLUE", "BLUE", "BLACK", "WHITE", "ORANGE", "RED",
        "RED", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "WHITE",
    ],
];

/// The built-in sample week, flattened in day order.
#[must_use]
pub fn sample_week() -> Vec<String> {
    SAMPLE_WEEK
        .iter()
        .flat_map(|day| day.iter().map(|c| (*c).to_string()))
        .collect()
}

/// Observation sequence and the label whose probability is reported.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    #[serde(default = "sample_week")]
    pub observations: Vec<String>,
    #[serde(default = "default_probability_label")]
    pub probability_label: String,
}

fn default_probability_label() -> String {
    "RED".to_string()
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            observations: sample_week(),
            probability_label: default_probability_label(),
        }
    }
}

/// Input for the linear search demo.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<i64>,
    #[serde(default = "default_target")]
    pub target: i64,
    #[serde(default)]
    pub start: usize,
}

fn default_numbers() -> Vec<i64> {
    vec![1, 3, 5, 7, 9, 11, 13, 15]
}

const fn default_target() -> i64 {
    7
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            target: default_target(),
            start: 0,
        }
    }
}

/// Input for the Fibonacci sum demo.
#[derive(Debug, Clone, Deserialize)]
pub struct FibonacciConfig {
    #[serde(default = "default_terms")]
    pub terms: usize,
}

const fn default_terms() -> usize {
    DEFAULT_FIBONACCI_TERMS
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            terms: default_terms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_week_has_ninety_four_observations() {
        assert_eq!(sample_week().len(), 94);
    }

    #[test]
    fn sample_week_starts_on_monday() {
        let week = sample_week();
        assert_eq!(week.first().map(String::as_str), Some("GREEN"));
        assert_eq!(week.last().map(String::as_str), Some("WHITE"));
    }
}
