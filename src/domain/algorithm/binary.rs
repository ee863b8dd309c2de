//! Random 4-bit binary number generation.

use rand::Rng;
use serde::Serialize;

/// Number of bits drawn per generated number.
pub const BIT_WIDTH: usize = 4;

/// A generated binary string and its base-10 value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryNumber {
    pub binary: String,
    pub decimal: u8,
}

impl BinaryNumber {
    /// Draw [`BIT_WIDTH`] independent fair bits from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let binary: String = (0..BIT_WIDTH)
            .map(|_| if rng.gen::<bool>() { '1' } else { '0' })
            .collect();
        let decimal = binary
            .chars()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit == '1'));
        Self { binary, decimal }
    }
}

/// Generate a number from the thread-local random source.
#[must_use]
pub fn generate_binary_number() -> BinaryNumber {
    BinaryNumber::generate(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn binary_string_matches_decimal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let number = BinaryNumber::generate(&mut rng);
            assert_eq!(number.binary.len(), BIT_WIDTH);
            assert!(number.decimal <= 15);
            assert_eq!(u8::from_str_radix(&number.binary, 2).unwrap(), number.decimal);
        }
    }

    #[test]
    fn thread_rng_generation_is_in_range() {
        for _ in 0..32 {
            let number = generate_binary_number();
            assert_eq!(u8::from_str_radix(&number.binary, 2).unwrap(), number.decimal);
        }
    }

    #[test]
    fn all_zero_bits() {
        // gen::<bool>() tests the sign bit of a u32, which is clear for 0
        let mut rng = StepRng::new(0, 0);
        let number = BinaryNumber::generate(&mut rng);
        assert_eq!(number.binary, "0000");
        assert_eq!(number.decimal, 0);
    }

    #[test]
    fn all_one_bits() {
        let mut rng = StepRng::new(u64::MAX, 0);
        let number = BinaryNumber::generate(&mut rng);
        assert_eq!(number.binary, "1111");
        assert_eq!(number.decimal, 15);
    }

    #[test]
    fn every_value_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 16];
        for _ in 0..1_000 {
            seen[usize::from(BinaryNumber::generate(&mut rng).decimal)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
