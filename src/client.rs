//! [`EzSwapClient`] — the main entry point for pool operations.

use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcTransactionConfig,
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_transaction_status::UiTransactionEncoding;
use std::str::FromStr;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    instructions::{
        deposit_liquidity_ix, derive_pool_state, initialize_pool_ix, spl_token_id,
        system_program_id, DepositLiquidityAccounts, InitializePoolAccounts,
    },
    state::parse_pool_state,
    types::{
        DepositLiquidityParams, DepositLiquidityResult, InitializePoolParams,
        InitializePoolResult, PoolInfo,
    },
};

// ─── Constants ────────────────────────────────────────────────────────────────

const DEFAULT_PROGRAM_ID: &str = "DxsrhkT7S2EqipZoSyQd9bmx5eLurU49cCZ4yDMHDN52";
const DEVNET_RPC:  &str = "https://api.devnet.solana.com";
const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async EZ Token Swap client for Solana.
///
/// Stateless: each call opens its own RPC round trip, and nothing is cached
/// between calls.  Concurrent calls are independent; the ledger, not this
/// client, decides transaction ordering.
///
/// ```rust,no_run
/// # use ez_swap_sdk::{EzSwapClient, instructions};
/// # use solana_sdk::pubkey::Pubkey;
/// # use std::str::FromStr;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EzSwapClient::devnet();
/// let mint_a = Pubkey::from_str("So11111111111111111111111111111111111111112")?;
/// let mint_b = Pubkey::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")?;
/// let info = client.pool_info(&mint_a, &mint_b).await?;
/// println!("reserves: {} / {}", info.amount_a, info.amount_b);
/// # Ok(())
/// # }
/// ```
pub struct EzSwapClient {
    rpc_url:    String,
    program_id: Pubkey,
}

impl EzSwapClient {
    /// Create a client pointing at any RPC endpoint.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url:    rpc_url.into(),
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap(),
        }
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC)
    }

    /// Override the program ID (useful for locally deployed programs in tests).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    /// The swap program this client targets.
    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Initialize a new pool.
    ///
    /// `owner` pays rent and signs.  The pool-state and pool-authority
    /// addresses (and their bumps) must come from [`derive_pool_state`] and
    /// [`crate::instructions::derive_pool_authority`]; the program rejects
    /// anything else.
    pub async fn initialize_pool(
        &self,
        owner:  &Keypair,
        params: InitializePoolParams,
    ) -> Result<InitializePoolResult> {
        let rpc = self.rpc();

        let ix = initialize_pool_ix(
            &self.program_id,
            InitializePoolAccounts {
                owner:           owner.pubkey(),
                pool_state:      params.pool_state,
                pool_authority:  params.pool_authority,
                token_a_ata:     params.token_a_ata,
                token_b_ata:     params.token_b_ata,
                pool_token_mint: params.pool_token_mint,
                token_a_mint:    params.token_a_mint,
                token_b_mint:    params.token_b_mint,
                system_program:  system_program_id(),
            },
            params.bump_seed,
            params.pool_authority_bump_seed,
        );

        debug!(pool_state = %params.pool_state, owner = %owner.pubkey(), "submitting initialize_pool");
        let sig = self.sign_and_send(&rpc, &[ix], owner).await?;
        info!(signature = %sig, "initialize_pool confirmed");

        Ok(InitializePoolResult {
            signature:      sig.to_string(),
            pool_state:     params.pool_state,
            pool_authority: params.pool_authority,
        })
    }

    /// Deposit tokens into a pool; LP shares are minted to
    /// `params.pool_token_ata`.
    ///
    /// Repeated identical deposits are submitted as-is.  The client keeps no
    /// idempotence guard; accumulating liquidity is the program's business.
    pub async fn deposit_liquidity(
        &self,
        liquidity_provider: &Keypair,
        params: DepositLiquidityParams,
    ) -> Result<DepositLiquidityResult> {
        let rpc = self.rpc();

        let ix = deposit_liquidity_ix(
            &self.program_id,
            DepositLiquidityAccounts {
                liquidity_provider: liquidity_provider.pubkey(),
                pool_state:         params.pool_state,
                pool_authority:     params.pool_authority,
                token_a_ata:        params.token_a_ata,
                token_b_ata:        params.token_b_ata,
                pool_token_ata:     params.pool_token_ata,
                pool_token_a_ata:   params.pool_token_a_ata,
                pool_token_b_ata:   params.pool_token_b_ata,
                pool_token_mint:    params.pool_token_mint,
                token_a_mint:       params.token_a_mint,
                token_b_mint:       params.token_b_mint,
                token_program:      spl_token_id(),
                system_program:     system_program_id(),
            },
            params.amount_a,
            params.amount_b,
        );

        debug!(
            liquidity_provider = %liquidity_provider.pubkey(),
            amount_a = params.amount_a,
            amount_b = params.amount_b,
            "submitting deposit_liquidity"
        );
        let sig = self.sign_and_send(&rpc, &[ix], liquidity_provider).await?;
        info!(signature = %sig, "deposit_liquidity confirmed");

        Ok(DepositLiquidityResult {
            signature:  sig.to_string(),
            pool_state: params.pool_state,
            amount_a:   params.amount_a,
            amount_b:   params.amount_b,
        })
    }

    // ── Read operations ───────────────────────────────────────────────────────

    /// Fetch and parse the pool state for a mint pair.
    pub async fn pool_info(
        &self,
        token_a_mint: &Pubkey,
        token_b_mint: &Pubkey,
    ) -> Result<PoolInfo> {
        let rpc = self.rpc();

        let (pool_state_addr, _) =
            derive_pool_state(token_a_mint, token_b_mint, &self.program_id);
        let data = match rpc.get_account_data(&pool_state_addr).await {
            Ok(data) => data,
            Err(_) => return Err(Error::PoolNotFound(*token_a_mint, *token_b_mint)),
        };
        let state = parse_pool_state(&data)?;

        Ok(PoolInfo {
            pool_state:               pool_state_addr,
            pool_authority:           state.pool_authority,
            token_a_vault:            state.token_a,
            token_b_vault:            state.token_b,
            pool_token_mint:          state.pool_mint,
            token_a_mint:             state.token_a_mint,
            token_b_mint:             state.token_b_mint,
            total_supply:             state.total_supply,
            amount_a:                 state.amount_a,
            amount_b:                 state.amount_b,
            bump_seed:                state.bump_seed,
            pool_authority_bump_seed: state.pool_authority_bump_seed,
        })
    }

    /// Fetch the log messages of a confirmed transaction.
    pub async fn transaction_log(&self, signature: &Signature) -> Result<Vec<String>> {
        let rpc = self.rpc();

        let tx = rpc
            .get_transaction_with_config(
                signature,
                RpcTransactionConfig {
                    encoding:   Some(UiTransactionEncoding::Json),
                    commitment: Some(CommitmentConfig::confirmed()),
                    max_supported_transaction_version: Some(0),
                },
            )
            .await?;

        Ok(tx
            .transaction
            .meta
            .and_then(|meta| Option::<Vec<String>>::from(meta.log_messages))
            .unwrap_or_default())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn rpc(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), CommitmentConfig::confirmed())
    }

    async fn sign_and_send(
        &self,
        rpc:          &RpcClient,
        instructions: &[Instruction],
        payer:        &Keypair,
    ) -> Result<Signature> {
        let blockhash = rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        Ok(rpc.send_and_confirm_transaction(&tx).await?)
    }
}
