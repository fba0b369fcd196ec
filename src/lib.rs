//! EZ Token Swap Rust SDK
//!
//! Client for the `ez_token_swap` constant-product AMM program on Solana.
//! Builds the program's instructions, signs them with caller-supplied key
//! material, and submits them over JSON-RPC.  All pricing and liquidity
//! accounting happens on-chain; this crate only marshals parameters and
//! performs the network round trip.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ez_swap_sdk::{instructions, EzSwapClient, InitializePoolParams};
//! use solana_sdk::{pubkey::Pubkey, signature::{Keypair, Signer}};
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EzSwapClient::devnet();
//!     let owner = Keypair::new(); // use your funded keypair
//!
//!     let token_a_mint = Pubkey::from_str("So11111111111111111111111111111111111111112")?;
//!     let token_b_mint = Pubkey::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")?;
//!
//!     let program_id = client.program_id();
//!     let (pool_state, bump_seed) =
//!         instructions::derive_pool_state(&token_a_mint, &token_b_mint, &program_id);
//!     let (pool_authority, pool_authority_bump_seed) =
//!         instructions::derive_pool_authority(&pool_state, &program_id);
//!
//!     let result = client.initialize_pool(&owner, InitializePoolParams {
//!         pool_state,
//!         pool_authority,
//!         token_a_ata: instructions::derive_ata(&owner.pubkey(), &token_a_mint),
//!         token_b_ata: instructions::derive_ata(&owner.pubkey(), &token_b_mint),
//!         pool_token_mint: Pubkey::new_unique(), // your LP mint
//!         token_a_mint,
//!         token_b_mint,
//!         bump_seed,
//!         pool_authority_bump_seed,
//!     }).await?;
//!     println!("Pool initialized, tx: {}", result.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`EzSwapClient::initialize_pool`] | Create the pool state for a mint pair |
//! | [`EzSwapClient::deposit_liquidity`] | Deposit both tokens, receive LP shares |
//! | [`EzSwapClient::pool_info`] | Pool addresses, reserves, LP supply |
//! | [`EzSwapClient::transaction_log`] | Log messages of a confirmed transaction |

pub mod client;
pub mod error;
pub mod instructions;
pub mod math;
pub mod schema;
pub mod state;
pub mod types;

pub use client::EzSwapClient;
pub use error::{Error, Result};
pub use types::*;
