//! Off-chain mirror of the on-chain liquidity arithmetic.
//!
//! Mirrors the program's `deposit_liquidity` math exactly so estimates match
//! the LP amount the chain will mint.  No RPC calls are made here.

use crate::error::{Error, Result};

// ─── Integer square root ──────────────────────────────────────────────────────

/// Floor of the square root, computed bit-by-bit as the program does.
pub fn integer_sqrt(radicand: u128) -> u128 {
    if radicand == 0 {
        return 0;
    }

    // Largest power of 4 <= radicand.
    let shift = (127 - radicand.leading_zeros()) & !1;
    let mut bit = 1u128 << shift;

    let mut n = radicand;
    let mut result = 0u128;
    while bit != 0 {
        if n >= result + bit {
            n -= result + bit;
            result = (result >> 1) + bit;
        } else {
            result >>= 1;
        }
        bit >>= 2;
    }
    result
}

// ─── LP-share estimate ────────────────────────────────────────────────────────

/// Estimate the LP tokens minted for a deposit of `(amount_a, amount_b)`
/// against current reserves and LP supply.
///
/// First deposit (`total_supply == 0`): `sqrt(amount_a × amount_b)`.
/// Subsequent deposits: `min(amount_a × supply / reserve_a,
/// amount_b × supply / reserve_b)`, i.e. the smaller side fixes the share.
pub fn estimate_lp_tokens(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_supply: u64,
) -> Result<u64> {
    let a = amount_a as u128;
    let b = amount_b as u128;

    if total_supply == 0 {
        let product = a.checked_mul(b).ok_or(Error::MathOverflow)?;
        return Ok(integer_sqrt(product) as u64);
    }

    if reserve_a == 0 || reserve_b == 0 {
        return Err(Error::NoLiquidity);
    }

    let supply = total_supply as u128;
    let lp_for_a = a
        .checked_mul(supply)
        .ok_or(Error::MathOverflow)?
        / reserve_a as u128;
    let lp_for_b = b
        .checked_mul(supply)
        .ok_or(Error::MathOverflow)?
        / reserve_b as u128;

    Ok(lp_for_a.min(lp_for_b) as u64)
}
