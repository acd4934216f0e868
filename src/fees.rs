use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::Discount;

/// Rates are expressed in parts per 1000.
pub const PER_MILLE: u16 = 1000;

/// 1%
pub const DEFAULT_STANDARD_FEE: u16 = 10;

/// Default fee cap, counted in whole units of the base asset.
pub const DEFAULT_MAXIMUM_FEE_UNITS: u128 = 12;

/// How a business transfer amount is divided between recipient and owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: Uint128,
    pub net: Uint128,
}

pub fn validate_rate(rate: u16) -> Result<u16, ContractError> {
    if rate > PER_MILLE {
        return Err(ContractError::InvalidRate {
            rate,
            max: PER_MILLE,
        });
    }
    Ok(rate)
}

/// `DEFAULT_MAXIMUM_FEE_UNITS` expressed in the smallest denomination of an
/// asset with `decimals` decimal places.
pub fn default_maximum_fee(decimals: u8) -> Result<Uint128, ContractError> {
    10u128
        .checked_pow(u32::from(decimals))
        .and_then(|scale| scale.checked_mul(DEFAULT_MAXIMUM_FEE_UNITS))
        .map(Uint128::new)
        .ok_or(ContractError::InvalidDecimals { decimals })
}

/// A valid discount entry for the recipient replaces the standard rate.
pub fn effective_rate(discount: Option<&Discount>, standard_fee: u16) -> u16 {
    match discount {
        Some(discount) if discount.valid => discount.rate,
        _ => standard_fee,
    }
}

// floor(amount * rate / 1000) capped at maximum_fee; net + fee == amount always
pub fn split_fee(amount: Uint128, rate: u16, maximum_fee: Uint128) -> FeeSplit {
    let raw_fee = amount.multiply_ratio(rate, PER_MILLE);
    let fee = raw_fee.min(maximum_fee);
    FeeSplit {
        fee,
        net: amount - fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_rate_takes_one_percent() {
        let split = split_fee(
            Uint128::new(100_000_000_000_000_000),
            DEFAULT_STANDARD_FEE,
            default_maximum_fee(18).unwrap(),
        );
        assert_eq!(Uint128::new(1_000_000_000_000_000), split.fee);
        assert_eq!(Uint128::new(99_000_000_000_000_000), split.net);
    }

    // 12 whole units of the base asset, whatever its precision
    #[test]
    fn default_cap_follows_decimals() {
        assert_eq!(Uint128::new(12_000_000), default_maximum_fee(6).unwrap());
        assert_eq!(
            Uint128::new(12_000_000_000_000_000_000),
            default_maximum_fee(18).unwrap()
        );
        assert_eq!(Uint128::new(12), default_maximum_fee(0).unwrap());
        assert_eq!(
            ContractError::InvalidDecimals { decimals: 38 },
            default_maximum_fee(38).unwrap_err()
        );
    }

    #[test]
    fn fee_is_capped_by_maximum() {
        let split = split_fee(Uint128::new(10_000), 100, Uint128::new(7));
        assert_eq!(Uint128::new(7), split.fee);
        assert_eq!(Uint128::new(9_993), split.net);
    }

    #[test]
    fn fee_rounds_down() {
        // 199 * 5 / 1000 = 0.995
        let split = split_fee(Uint128::new(199), 5, Uint128::MAX);
        assert_eq!(Uint128::zero(), split.fee);
        assert_eq!(Uint128::new(199), split.net);
    }

    #[test]
    fn zero_rate_charges_nothing() {
        let split = split_fee(Uint128::new(12345), 0, Uint128::MAX);
        assert_eq!(Uint128::zero(), split.fee);
        assert_eq!(Uint128::new(12345), split.net);
    }

    #[test]
    fn no_overflow_on_largest_amount() {
        let split = split_fee(Uint128::MAX, PER_MILLE, Uint128::MAX);
        assert_eq!(Uint128::MAX, split.fee);
        assert_eq!(Uint128::zero(), split.net);
    }

    #[test]
    fn valid_discount_wins_over_standard_rate() {
        let discount = Discount {
            rate: 5,
            valid: true,
        };
        assert_eq!(5, effective_rate(Some(&discount), 10));

        let removed = Discount {
            rate: 5,
            valid: false,
        };
        assert_eq!(10, effective_rate(Some(&removed), 10));
        assert_eq!(10, effective_rate(None, 10));
    }

    #[test]
    fn rate_bounds() {
        assert_eq!(Ok(0), validate_rate(0));
        assert_eq!(Ok(PER_MILLE), validate_rate(PER_MILLE));
        assert_eq!(
            Err(ContractError::InvalidRate {
                rate: 1001,
                max: PER_MILLE
            }),
            validate_rate(1001)
        );
    }

    proptest! {
        /// Property: the split never leaks or creates units and honours both the rate and the cap.
        #[test]
        fn split_is_exact(amount in any::<u128>(), rate in 0u16..=PER_MILLE, maximum in any::<u128>()) {
            let amount = Uint128::new(amount);
            let maximum = Uint128::new(maximum);
            let split = split_fee(amount, rate, maximum);

            prop_assert_eq!(amount, split.fee + split.net);
            prop_assert!(split.fee <= maximum);
            prop_assert_eq!(split.fee, amount.multiply_ratio(rate, PER_MILLE).min(maximum));
        }
    }
}
