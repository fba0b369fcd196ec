//! Devnet smoke tests.
//!
//! Ignored by default: they need network access.  Run with
//! `cargo test -- --ignored` against a reachable devnet RPC.

use ez_swap_sdk::{Error, EzSwapClient};
use solana_sdk::pubkey::Pubkey;

#[tokio::test]
#[ignore = "requires devnet RPC access"]
async fn pool_lookup_for_unknown_mints_reports_pool_not_found() {
    let client = EzSwapClient::devnet();

    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    match client.pool_info(&mint_a, &mint_b).await {
        Err(Error::PoolNotFound(a, b)) => {
            assert_eq!(a, mint_a);
            assert_eq!(b, mint_b);
        }
        other => panic!("expected PoolNotFound, got {other:?}"),
    }
}
