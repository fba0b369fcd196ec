//! Pool-state deserialization and LP-share arithmetic.

use ez_swap_sdk::math::{estimate_lp_tokens, integer_sqrt};
use ez_swap_sdk::state::parse_pool_state;
use ez_swap_sdk::Error;
use solana_sdk::{hash::hash, pubkey::Pubkey};

/// Pack a PoolState account image the way the program lays it out.
fn pool_state_image(
    bump_seed: u8,
    pool_authority: Pubkey,
    pool_authority_bump_seed: u8,
    vaults: (Pubkey, Pubkey),
    pool_mint: Pubkey,
    mints: (Pubkey, Pubkey),
    total_supply: u64,
    amount_a: u64,
    amount_b: u64,
) -> Vec<u8> {
    let mut data = hash(b"account:PoolState").to_bytes()[..8].to_vec();
    data.push(1); // is_initialized
    data.push(bump_seed);
    data.extend_from_slice(pool_authority.as_ref());
    data.push(pool_authority_bump_seed);
    data.extend_from_slice(vaults.0.as_ref());
    data.extend_from_slice(vaults.1.as_ref());
    data.extend_from_slice(pool_mint.as_ref());
    data.extend_from_slice(mints.0.as_ref());
    data.extend_from_slice(mints.1.as_ref());
    data.extend_from_slice(&total_supply.to_le_bytes());
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());
    data
}

// ─── PoolState parsing ────────────────────────────────────────────────────────

#[test]
fn pool_state_parses_packed_account() {
    let pool_authority = Pubkey::new_unique();
    let vault_a = Pubkey::new_unique();
    let vault_b = Pubkey::new_unique();
    let pool_mint = Pubkey::new_unique();
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    let data = pool_state_image(
        254,
        pool_authority,
        251,
        (vault_a, vault_b),
        pool_mint,
        (mint_a, mint_b),
        20_000_000_000,
        2_000_000_000,
        200_000_000_000,
    );
    assert_eq!(data.len(), 227);

    let state = parse_pool_state(&data).unwrap();
    assert!(state.is_initialized);
    assert_eq!(state.bump_seed, 254);
    assert_eq!(state.pool_authority, pool_authority);
    assert_eq!(state.pool_authority_bump_seed, 251);
    assert_eq!(state.token_a, vault_a);
    assert_eq!(state.token_b, vault_b);
    assert_eq!(state.pool_mint, pool_mint);
    assert_eq!(state.token_a_mint, mint_a);
    assert_eq!(state.token_b_mint, mint_b);
    assert_eq!(state.total_supply, 20_000_000_000);
    assert_eq!(state.amount_a, 2_000_000_000);
    assert_eq!(state.amount_b, 200_000_000_000);
}

#[test]
fn pool_state_rejects_short_buffer() {
    let data = vec![0u8; 100];
    assert!(matches!(
        parse_pool_state(&data),
        Err(Error::ParseError { .. })
    ));
}

// ─── integer_sqrt ─────────────────────────────────────────────────────────────

#[test]
fn integer_sqrt_exact_on_perfect_squares() {
    assert_eq!(integer_sqrt(0), 0);
    assert_eq!(integer_sqrt(1), 1);
    assert_eq!(integer_sqrt(4), 2);
    assert_eq!(integer_sqrt(1_000_000_000_000_000_000), 1_000_000_000);
    assert_eq!(
        integer_sqrt(400_000_000_000_000_000_000),
        20_000_000_000
    );
}

#[test]
fn integer_sqrt_floors_non_squares() {
    assert_eq!(integer_sqrt(2), 1);
    assert_eq!(integer_sqrt(8), 2);
    assert_eq!(integer_sqrt(99), 9);
    assert_eq!(integer_sqrt(u128::from(u64::MAX)), 4_294_967_295);
}

// ─── estimate_lp_tokens ───────────────────────────────────────────────────────

#[test]
fn first_deposit_mints_geometric_mean() {
    // 2 SOL / 200 tokens at 9 decimals, as in the pool's seeding deposit.
    let lp = estimate_lp_tokens(2_000_000_000, 200_000_000_000, 0, 0, 0).unwrap();
    assert_eq!(lp, 20_000_000_000);
}

#[test]
fn proportional_deposit_preserves_share_price() {
    let lp = estimate_lp_tokens(
        2_000_000_000,
        200_000_000_000,
        2_000_000_000,
        200_000_000_000,
        20_000_000_000,
    )
    .unwrap();
    assert_eq!(lp, 20_000_000_000);
}

#[test]
fn lopsided_deposit_is_priced_by_smaller_side() {
    let lp = estimate_lp_tokens(
        2_000_000_000,
        100_000_000_000, // half the proportional token B
        2_000_000_000,
        200_000_000_000,
        20_000_000_000,
    )
    .unwrap();
    assert_eq!(lp, 10_000_000_000);
}

#[test]
fn drained_pool_reports_no_liquidity() {
    assert!(matches!(
        estimate_lp_tokens(1, 1, 0, 200, 20_000_000_000),
        Err(Error::NoLiquidity)
    ));
}
