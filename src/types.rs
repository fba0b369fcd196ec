//! Public parameter and result types.

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

// ─── Parameters ───────────────────────────────────────────────────────────────

/// Inputs for [`crate::EzSwapClient::initialize_pool`].
///
/// Every address must already be derived (see
/// [`crate::instructions::derive_pool_state`] and friends) and the bumps must
/// be the canonical ones returned alongside.  The owner signer and the system
/// program are filled in by the client.
#[derive(Debug, Clone, Copy)]
pub struct InitializePoolParams {
    pub pool_state:               Pubkey,
    pub pool_authority:           Pubkey,
    pub token_a_ata:              Pubkey,
    pub token_b_ata:              Pubkey,
    pub pool_token_mint:          Pubkey,
    pub token_a_mint:             Pubkey,
    pub token_b_mint:             Pubkey,
    pub bump_seed:                u8,
    pub pool_authority_bump_seed: u8,
}

/// Inputs for [`crate::EzSwapClient::deposit_liquidity`].
///
/// `token_a_ata` / `token_b_ata` / `pool_token_ata` belong to the provider;
/// `pool_token_a_ata` / `pool_token_b_ata` are the pool's vaults.  Amounts
/// are raw base units of each mint.
#[derive(Debug, Clone, Copy)]
pub struct DepositLiquidityParams {
    pub pool_state:       Pubkey,
    pub pool_authority:   Pubkey,
    pub token_a_ata:      Pubkey,
    pub token_b_ata:      Pubkey,
    pub pool_token_ata:   Pubkey,
    pub pool_token_a_ata: Pubkey,
    pub pool_token_b_ata: Pubkey,
    pub pool_token_mint:  Pubkey,
    pub token_a_mint:     Pubkey,
    pub token_b_mint:     Pubkey,
    pub amount_a:         u64,
    pub amount_b:         u64,
}

// ─── Results ──────────────────────────────────────────────────────────────────

/// Confirmed `initialize_pool` submission.
#[derive(Debug, Clone, Serialize)]
pub struct InitializePoolResult {
    pub signature:      String,
    pub pool_state:     Pubkey,
    pub pool_authority: Pubkey,
}

/// Confirmed `deposit_liquidity` submission.
#[derive(Debug, Clone, Serialize)]
pub struct DepositLiquidityResult {
    pub signature:  String,
    pub pool_state: Pubkey,
    pub amount_a:   u64,
    pub amount_b:   u64,
}

/// Pool state plus the addresses a caller needs to build further deposits.
#[derive(Debug, Clone, Serialize)]
pub struct PoolInfo {
    pub pool_state:               Pubkey,
    pub pool_authority:           Pubkey,
    pub token_a_vault:            Pubkey,
    pub token_b_vault:            Pubkey,
    pub pool_token_mint:          Pubkey,
    pub token_a_mint:             Pubkey,
    pub token_b_mint:             Pubkey,
    pub total_supply:             u64,
    pub amount_a:                 u64,
    pub amount_b:                 u64,
    pub bump_seed:                u8,
    pub pool_authority_bump_seed: u8,
}
