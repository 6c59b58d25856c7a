//! Gas fee estimates formatted for display.

use {
    crate::{domain::eth, util::conv},
    bigdecimal::BigDecimal,
    num::BigInt,
};

/// A gas estimate rendered as display text. Derived from the raw fee data of
/// a node and recomputed fresh for every estimate request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GasEstimate {
    /// The gas price in Gwei, e.g. `"1.5 Gwei"`.
    pub gas_price: String,
    /// The gas limit as plain decimal integer text.
    pub gas_limit: String,
    /// The maximum fee in the currency's display unit, with trailing zeros
    /// suppressed, e.g. `"0.000021"`.
    pub estimated_fee: String,
}

impl GasEstimate {
    pub fn new(gas_price: eth::GasPrice, gas_limit: eth::Gas) -> Self {
        // The fee is the exact big-integer product of the raw inputs; a
        // decimal point only appears in the final display conversion.
        let fee = conv::u256_to_biguint(&gas_price.0) * conv::u256_to_biguint(&gas_limit.0);
        Self {
            gas_price: format!("{} Gwei", conv::gas_price_to_gwei(&gas_price).normalized()),
            gas_limit: gas_limit.0.to_string(),
            estimated_fee: BigDecimal::new(BigInt::from(fee), 18).normalized().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, eth::U256};

    fn estimate(gas_price: u128, gas_limit: u128) -> GasEstimate {
        GasEstimate::new(U256::from(gas_price).into(), U256::from(gas_limit).into())
    }

    #[test]
    fn formats_a_typical_transfer() {
        let estimate = estimate(1_000_000_000, 21_000);
        assert_eq!(estimate.gas_price, "1 Gwei");
        assert_eq!(estimate.gas_limit, "21000");
        assert_eq!(estimate.estimated_fee, "0.000021");
    }

    #[test]
    fn preserves_fractional_gas_prices() {
        assert_eq!(estimate(1_534_250_000, 21_000).gas_price, "1.53425 Gwei");
        assert_eq!(estimate(1, 21_000).gas_price, "0.000000001 Gwei");
    }

    #[test]
    fn fee_is_exact_beyond_float_precision() {
        // The product has more significant digits than an f64 mantissa holds.
        let estimate = estimate(1_000_000_000_000_000_003, 3);
        assert_eq!(estimate.estimated_fee, "3.000000000000000009");
    }

    #[test]
    fn integer_fees_render_without_a_decimal_point() {
        // 100000 Gwei * 30M gas = 3000 ETH
        let estimate = estimate(100_000_000_000_000, 30_000_000);
        assert_eq!(estimate.estimated_fee, "3000");
    }

    #[test]
    fn zero_price_formats_as_zero() {
        let estimate = estimate(0, 21_000);
        assert_eq!(estimate.gas_price, "0 Gwei");
        assert_eq!(estimate.estimated_fee, "0");
    }

    #[test]
    fn fee_scales_linearly_with_price() {
        for (price, limit) in [(1_000_000_000_u128, 21_000_u128), (33_547_000_111, 1_204_867)] {
            let single: BigDecimal = estimate(price, limit).estimated_fee.parse().unwrap();
            let double: BigDecimal = estimate(price * 2, limit).estimated_fee.parse().unwrap();
            assert_eq!(double, single * BigDecimal::from(2));
        }
    }
}
