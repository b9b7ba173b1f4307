use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuorumError {
    #[error("quorum denominator must be non-zero")]
    ZeroDenominator,

    #[error("quorum numerator must be non-zero")]
    ZeroNumerator,

    #[error("quorum {numerator}/{denominator} exceeds 1")]
    AboveOne { numerator: u32, denominator: u32 },
}

/// Fraction of registered validators that must attest to a header.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Quorum {
    numerator: u32,
    denominator: u32,
}

impl Quorum {
    /// Two thirds, the usual BFT supermajority.
    pub const TWO_THIRDS: Quorum = Quorum {
        numerator: 2,
        denominator: 3,
    };

    pub fn try_new(numerator: u32, denominator: u32) -> Result<Self, QuorumError> {
        if denominator == 0 {
            return Err(QuorumError::ZeroDenominator);
        }
        if numerator == 0 {
            return Err(QuorumError::ZeroNumerator);
        }
        if numerator > denominator {
            return Err(QuorumError::AboveOne {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Number of signers required out of `members`, rounding up.
    ///
    /// Any non-empty set requires at least one signer.
    pub fn required_signers(&self, members: usize) -> usize {
        let members = members as u128;
        let needed = (members * self.numerator as u128).div_ceil(self.denominator as u128);
        needed as usize
    }
}

impl Default for Quorum {
    fn default() -> Self {
        Self::TWO_THIRDS
    }
}

impl fmt::Display for Quorum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_try_new_rejects_bad_fractions() {
        assert_eq!(Quorum::try_new(1, 0), Err(QuorumError::ZeroDenominator));
        assert_eq!(Quorum::try_new(0, 3), Err(QuorumError::ZeroNumerator));
        assert!(matches!(
            Quorum::try_new(4, 3),
            Err(QuorumError::AboveOne { .. })
        ));
        assert!(Quorum::try_new(3, 3).is_ok());
    }

    #[test]
    fn test_two_thirds_thresholds() {
        let q = Quorum::TWO_THIRDS;
        assert_eq!(q.required_signers(0), 0);
        assert_eq!(q.required_signers(1), 1);
        assert_eq!(q.required_signers(3), 2);
        assert_eq!(q.required_signers(4), 3);
        assert_eq!(q.required_signers(100), 67);
    }

    proptest! {
        #[test]
        fn required_signers_within_bounds(
            denominator in 1u32..1000,
            numerator_seed in 1u32..1000,
            members in 1usize..10_000,
        ) {
            let numerator = numerator_seed.min(denominator);
            let q = Quorum::try_new(numerator, denominator).unwrap();
            let needed = q.required_signers(members);

            prop_assert!(needed >= 1);
            prop_assert!(needed <= members);
            // `needed` is the smallest count whose share reaches the fraction.
            prop_assert!(needed as u128 * denominator as u128 >= members as u128 * numerator as u128);
            prop_assert!(((needed - 1) as u128) * (denominator as u128) < members as u128 * numerator as u128);
        }
    }
}
