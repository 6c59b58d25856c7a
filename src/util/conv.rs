//! Conversion utilities.

use {
    crate::domain::eth,
    bigdecimal::{BigDecimal, num_bigint::ToBigInt},
    ethereum_types::U256,
    num::{BigInt, BigUint, One},
};

pub fn biguint_to_u256(i: &BigUint) -> Option<U256> {
    let bytes = i.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    Some(U256::from_big_endian(&bytes))
}

pub fn u256_to_biguint(i: &U256) -> BigUint {
    let mut bytes = [0_u8; 32];
    i.to_big_endian(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

pub fn bigint_to_u256(i: &BigInt) -> Option<U256> {
    if i.sign() == num::bigint::Sign::Minus {
        return None;
    }
    biguint_to_u256(i.magnitude())
}

pub fn bigdecimal_to_u256(d: &BigDecimal) -> Option<U256> {
    let d = d.to_bigint()?;
    bigint_to_u256(&d)
}

/// Converts a `BigDecimal` amount in Ether units to wei. Fractional wei are
/// truncated; negative or oversized values return `None`.
pub fn decimal_to_ether(d: &BigDecimal) -> Option<eth::Ether> {
    let scaled = d * BigDecimal::new(BigInt::one(), -18);
    Some(eth::Ether(bigdecimal_to_u256(&scaled)?))
}

/// Converts a gas price in wei into its `BigDecimal` value in Gwei, without
/// losing fractional precision.
pub fn gas_price_to_gwei(p: &eth::GasPrice) -> BigDecimal {
    BigDecimal::new(u256_to_biguint(&p.0).into(), 9)
}
