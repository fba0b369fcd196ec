//! On-chain account deserialization.
//!
//! Parses raw account bytes for `PoolState` (227 bytes including the 8-byte
//! Anchor discriminator).  Byte offsets mirror the Anchor `#[account]` layout
//! exactly.

use crate::error::{Error, Result};
use solana_sdk::pubkey::Pubkey;

// ─── PoolState ────────────────────────────────────────────────────────────────

/// Deserialized `PoolState` account.
///
/// Layout (after the 8-byte Anchor discriminator):
/// ```text
/// is_initialized(1)  bump_seed(1)  pool_authority(32)
/// pool_authority_bump_seed(1)  token_a(32)  token_b(32)  pool_mint(32)
/// token_a_mint(32)  token_b_mint(32)  total_supply(8)  amount_a(8)
/// amount_b(8)  = 219 bytes
/// ```
#[derive(Debug, Clone)]
pub struct PoolState {
    pub is_initialized:           bool,
    /// Canonical bump of the pool-state PDA.
    pub bump_seed:                u8,
    pub pool_authority:           Pubkey,
    /// Canonical bump of the pool-authority PDA; the program signs LP mints
    /// with it.
    pub pool_authority_bump_seed: u8,
    /// Pool's token A vault.
    pub token_a:                  Pubkey,
    /// Pool's token B vault.
    pub token_b:                  Pubkey,
    /// LP mint; issued on deposit, burned on withdrawal.
    pub pool_mint:                Pubkey,
    pub token_a_mint:             Pubkey,
    pub token_b_mint:             Pubkey,
    pub total_supply:             u64,
    pub amount_a:                 u64,
    pub amount_b:                 u64,
}

/// Deserialize a `PoolState` account from raw bytes.
pub fn parse_pool_state(data: &[u8]) -> Result<PoolState> {
    const EXPECTED: usize = 227;
    if data.len() < EXPECTED {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!(
                "PoolState account is {} bytes; expected at least {}",
                data.len(),
                EXPECTED
            ),
        });
    }
    Ok(PoolState {
        is_initialized:           data[8] != 0,
        bump_seed:                data[9],
        pool_authority:           read_pubkey(data, 10)?,
        pool_authority_bump_seed: data[42],
        token_a:                  read_pubkey(data, 43)?,
        token_b:                  read_pubkey(data, 75)?,
        pool_mint:                read_pubkey(data, 107)?,
        token_a_mint:             read_pubkey(data, 139)?,
        token_b_mint:             read_pubkey(data, 171)?,
        total_supply:             read_u64(data, 203)?,
        amount_a:                 read_u64(data, 211)?,
        amount_b:                 read_u64(data, 219)?,
    })
}

// ─── Byte-slice primitives ────────────────────────────────────────────────────

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    let b: [u8; 32] = data[offset..offset + 32]
        .try_into()
        .map_err(|_| Error::ParseError {
            offset,
            reason: "slice too short for Pubkey (32 bytes)".into(),
        })?;
    Ok(Pubkey::from(b))
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    let b: [u8; 8] = data[offset..offset + 8]
        .try_into()
        .map_err(|_| Error::ParseError {
            offset,
            reason: "slice too short for u64".into(),
        })?;
    Ok(u64::from_le_bytes(b))
}
