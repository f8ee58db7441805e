//! Numeric reductions and filters over sequences of numbers.

use serde::Serialize;

/// Sum of all numbers (`0` for an empty sequence).
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |total, &number| total + number)
}

/// Product of all numbers (`1` for an empty sequence).
pub fn product(numbers: &[f64]) -> f64 {
    numbers.iter().fold(1.0, |total, &number| total * number)
}

/// Check whether a number is even.
///
/// The remainder keeps the sign of the dividend, so negative odd numbers
/// give `-1` and are never even. Non-integers, infinities and NaN are odd.
pub fn is_even(number: f64) -> bool {
    number % 2.0 == 0.0
}

/// Even numbers, in their original order.
pub fn evens(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().copied().filter(|&n| is_even(n)).collect()
}

/// Odd numbers, in their original order.
pub fn odds(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().copied().filter(|&n| !is_even(n)).collect()
}

/// All four results for a single sequence.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Summary {
    pub sum: f64,
    pub product: f64,
    pub evens: Vec<f64>,
    pub odds: Vec<f64>,
}

impl Summary {
    pub fn new(numbers: &[f64]) -> Self {
        Self {
            sum: sum(numbers),
            product: product(numbers),
            evens: evens(numbers),
            odds: odds(numbers),
        }
    }
}
