//! Fibonacci sequence and prefix sums.

use crate::error::AlgorithmError;

/// Terms summed when no count is configured.
pub const DEFAULT_FIBONACCI_TERMS: usize = 50;

/// Fibonacci numbers 0, 1, 1, 2, 3, ...
///
/// The iterator ends once the next term no longer fits in a `u128`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u128>,
    next: Option<u128>,
}

impl Fibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let term = self.current?;
        let following = self.next.and_then(|n| term.checked_add(n));
        self.current = self.next;
        self.next = following;
        Some(term)
    }
}

/// Sum of the first `terms` Fibonacci numbers.
///
/// # Errors
///
/// Returns [`AlgorithmError::Overflow`] when the sum or one of its terms does
/// not fit in a `u128`.
pub fn fibonacci_sum(terms: usize) -> Result<u128, AlgorithmError> {
    let mut sum: u128 = 0;
    let mut taken = 0;
    for term in Fibonacci::new().take(terms) {
        sum = sum
            .checked_add(term)
            .ok_or(AlgorithmError::Overflow { terms })?;
        taken += 1;
    }
    if taken < terms {
        return Err(AlgorithmError::Overflow { terms });
    }
    Ok(sum)
}
