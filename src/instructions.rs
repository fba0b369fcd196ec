//! Low-level Anchor instruction builders.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for signing and submission.  Account order mirrors the Anchor
//! `#[derive(Accounts)]` structs in the on-chain program exactly; the
//! per-instruction account structs below make that order a compile-time fact
//! rather than a call-site convention.
//!
//! Anchor instruction discriminators: `sha256("global:{name}")[..8]`.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use std::str::FromStr;

// ─── Well-known program IDs ───────────────────────────────────────────────────

/// SPL Token program (well-known, never changes).
pub fn spl_token_id() -> Pubkey {
    Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap()
}

/// Associated Token Account program.
pub fn ata_program_id() -> Pubkey {
    Pubkey::from_str("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL").unwrap()
}

/// System program (all-zero base58 address).
pub fn system_program_id() -> Pubkey {
    Pubkey::from_str("11111111111111111111111111111111").unwrap()
}

// ─── PDA seeds (must match the on-chain program's constants) ─────────────────

pub const POOL_STATE_SEED:     &[u8] = b"POOL_STATE";
pub const POOL_AUTHORITY_SEED: &[u8] = b"POOL_AUTHORITY";

// ─── PDA derivation helpers ───────────────────────────────────────────────────

/// Derive the pool-state PDA for the given mint pair.
pub fn derive_pool_state(
    token_a_mint: &Pubkey,
    token_b_mint: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_STATE_SEED, token_a_mint.as_ref(), token_b_mint.as_ref()],
        program_id,
    )
}

/// Derive the pool-authority PDA that mints LP tokens and signs for the
/// pool's token accounts.
pub fn derive_pool_authority(pool_state: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_STATE_SEED, pool_state.as_ref(), POOL_AUTHORITY_SEED],
        program_id,
    )
}

/// Derive the Associated Token Account for a wallet + mint.
pub fn derive_ata(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    let token_prog = spl_token_id();
    Pubkey::find_program_address(
        &[wallet.as_ref(), token_prog.as_ref(), mint.as_ref()],
        &ata_program_id(),
    )
    .0
}

// ─── Discriminator ────────────────────────────────────────────────────────────

pub(crate) fn disc(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let h = solana_sdk::hash::hash(preimage.as_bytes());
    h.to_bytes()[..8].try_into().unwrap()
}

// ─── Typed account sets ───────────────────────────────────────────────────────

/// The nine accounts of `initialize_pool`, in program order.
///
/// Field order is the wire order.  The on-chain program reads accounts by
/// position, so a missing or transposed entry fails on-chain, not here.
#[derive(Debug, Clone, Copy)]
pub struct InitializePoolAccounts {
    /// Pays rent for the pool state; mut + signer.
    pub owner:           Pubkey,
    /// Pool-state PDA being initialised; mut.
    pub pool_state:      Pubkey,
    /// Pool-authority PDA; read-only.
    pub pool_authority:  Pubkey,
    pub token_a_ata:     Pubkey,
    pub token_b_ata:     Pubkey,
    /// LP mint; its mint authority must already be `pool_authority`.
    pub pool_token_mint: Pubkey,
    pub token_a_mint:    Pubkey,
    pub token_b_mint:    Pubkey,
    pub system_program:  Pubkey,
}

impl InitializePoolAccounts {
    fn to_account_metas(self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.owner,                     true),
            AccountMeta::new(self.pool_state,                false),
            AccountMeta::new_readonly(self.pool_authority,   false),
            AccountMeta::new(self.token_a_ata,               false),
            AccountMeta::new(self.token_b_ata,               false),
            AccountMeta::new(self.pool_token_mint,           false),
            AccountMeta::new(self.token_a_mint,              false),
            AccountMeta::new(self.token_b_mint,              false),
            AccountMeta::new_readonly(self.system_program,   false),
        ]
    }
}

/// The thirteen accounts of `deposit_liquidity`, in program order.
#[derive(Debug, Clone, Copy)]
pub struct DepositLiquidityAccounts {
    /// Source of both deposits; mut + signer.
    pub liquidity_provider: Pubkey,
    pub pool_state:         Pubkey,
    /// Read-only; signs the LP mint via PDA seeds on-chain.
    pub pool_authority:     Pubkey,
    /// Provider's token A account, debited.
    pub token_a_ata:        Pubkey,
    /// Provider's token B account, debited.
    pub token_b_ata:        Pubkey,
    /// Provider's LP token account, credited with minted shares.
    pub pool_token_ata:     Pubkey,
    /// Pool's token A vault, credited.
    pub pool_token_a_ata:   Pubkey,
    /// Pool's token B vault, credited.
    pub pool_token_b_ata:   Pubkey,
    pub pool_token_mint:    Pubkey,
    pub token_a_mint:       Pubkey,
    pub token_b_mint:       Pubkey,
    pub token_program:      Pubkey,
    pub system_program:     Pubkey,
}

impl DepositLiquidityAccounts {
    fn to_account_metas(self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.liquidity_provider,        true),
            AccountMeta::new(self.pool_state,                false),
            AccountMeta::new_readonly(self.pool_authority,   false),
            AccountMeta::new(self.token_a_ata,               false),
            AccountMeta::new(self.token_b_ata,               false),
            AccountMeta::new(self.pool_token_ata,            false),
            AccountMeta::new(self.pool_token_a_ata,          false),
            AccountMeta::new(self.pool_token_b_ata,          false),
            AccountMeta::new(self.pool_token_mint,           false),
            AccountMeta::new(self.token_a_mint,              false),
            AccountMeta::new(self.token_b_mint,              false),
            AccountMeta::new_readonly(self.token_program,    false),
            AccountMeta::new_readonly(self.system_program,   false),
        ]
    }
}

// ─── initialize_pool ─────────────────────────────────────────────────────────

/// Build the `initialize_pool` instruction.
///
/// `bump_seed` and `pool_authority_bump_seed` must be the canonical bumps
/// returned by [`derive_pool_state`] and [`derive_pool_authority`].  The
/// builder does not re-derive them; a mismatched address or bump produces an
/// instruction the program will reject.
pub fn initialize_pool_ix(
    program_id: &Pubkey,
    accounts: InitializePoolAccounts,
    bump_seed: u8,
    pool_authority_bump_seed: u8,
) -> Instruction {
    let mut data = disc("initialize_pool").to_vec();
    data.push(bump_seed);
    data.push(pool_authority_bump_seed);

    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data,
    }
}

// ─── deposit_liquidity ────────────────────────────────────────────────────────

/// Build the `deposit_liquidity` instruction.
///
/// `amount_a` and `amount_b` are raw token amounts in each mint's base units,
/// encoded little-endian as the program's u64 arguments.
pub fn deposit_liquidity_ix(
    program_id: &Pubkey,
    accounts: DepositLiquidityAccounts,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let mut data = disc("deposit_liquidity").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data,
    }
}
