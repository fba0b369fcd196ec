//! SDK error type.

use solana_sdk::pubkey::Pubkey;

/// All errors returned by the EZ Token Swap SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    // ── Pool discovery ───────────────────────────────────────────────────────
    /// No pool-state account exists at the derived address.
    #[error("Pool not found for mints {0} / {1}")]
    PoolNotFound(Pubkey, Pubkey),

    /// The pool exists but holds no reserves (total_supply == 0).
    #[error("Pool has no liquidity; seed it with deposit_liquidity first")]
    NoLiquidity,

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("Integer overflow in liquidity math")]
    MathOverflow,

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized.
    #[error("Account parse error at offset {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    // ── IDL schema ───────────────────────────────────────────────────────────
    /// The embedded IDL is not valid JSON.
    #[error("IDL parse error: {0}")]
    IdlParse(#[from] serde_json::Error),

    /// A built instruction does not conform to the embedded IDL.
    #[error("schema mismatch for `{instruction}`: {reason}")]
    SchemaMismatch { instruction: String, reason: String },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
