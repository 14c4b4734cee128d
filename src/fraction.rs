use serde::{Serialize, Serializer};
use std::fmt;

/// Greatest common divisor, with `gcd(0, d) == d`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduces `numer/denom` to lowest terms.
///
/// A zero numerator reduces to `0/1`. `denom` must be non-zero.
pub fn reduce(numer: u32, denom: u32) -> (u32, u32) {
    let g = gcd(numer, denom);
    (numer / g, denom / g)
}

/// An exact probability, always held in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: u32,
    denom: u32,
}

impl Fraction {
    pub fn new(numer: u32, denom: u32) -> Self {
        let (numer, denom) = reduce(numer, denom);
        Self { numer, denom }
    }

    pub fn numer(&self) -> u32 {
        self.numer
    }

    pub fn denom(&self) -> u32 {
        self.denom
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_of_zero_is_other_operand() {
        assert_eq!(gcd(0, 128), 128);
        assert_eq!(gcd(128, 0), 128);
    }

    #[test]
    fn test_reduce_zero_numerator() {
        assert_eq!(reduce(0, 128), (0, 1));
        assert_eq!(Fraction::new(0, 128).to_string(), "0/1");
    }

    #[test]
    fn test_reduce_to_lowest_terms() {
        assert_eq!(reduce(8, 128), (1, 16));
        assert_eq!(reduce(128, 128), (1, 1));
        assert_eq!(reduce(6, 128), (3, 64));
        assert_eq!(reduce(1, 128), (1, 128));
    }

    #[test]
    fn test_fraction_serializes_as_string() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(serde_json::to_string(&Fraction::new(64, 128))?, "\"1/2\"");
        Ok(())
    }
}
