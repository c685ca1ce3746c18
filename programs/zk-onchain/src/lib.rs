// zk_onchain - vault configuration, service-signer gated vaults and a small
// user/server marketplace on Solana

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;
use state::{ServiceSignerOperation, VaultParams};

declare_id!("6b51XxnGuCQA3t7sZiHE4LrGdAayb79Vsh2Bkkz6gwqM");

/// Key allowed to create the vault configuration
pub mod config_authority {
    use anchor_lang::prelude::declare_id;

    #[cfg(feature = "devnet")]
    declare_id!("Bn6jUQPC48meSkE5nZ8G8yWyxsuoiGwQwyX127nVmWWZ");
    #[cfg(not(feature = "devnet"))]
    declare_id!("Bn6jUQPC48meSkE5nZ8G8yWyxsuoiGwQwyX127nVmWWZ");
}

#[program]
pub mod zk_onchain {
    use super::*;

    /// Create the vault configuration PDA.
    ///
    /// The authority must be the compiled-in `config_authority` and sign.
    /// The config starts with no service signers.
    pub fn initialize_vault_config(ctx: Context<InitializeVaultConfig>) -> Result<()> {
        instructions::initialize_vault_config::handler(ctx)
    }

    /// Rotate the config update authority. Both old and new keys sign.
    pub fn update_vault_authority(ctx: Context<UpdateVaultAuthority>) -> Result<()> {
        instructions::update_vault_authority::handler(ctx)
    }

    /// Add or remove a service signer (at most `MAX_SERVICE_SIGNERS`)
    pub fn manage_service_signer(
        ctx: Context<ManageServiceSigner>,
        operation: ServiceSignerOperation,
    ) -> Result<()> {
        instructions::manage_service_signer::handler(ctx, operation)
    }

    pub fn initialize_user_vault(ctx: Context<InitializeUserVault>) -> Result<()> {
        instructions::user_vault::initialize_handler(ctx)
    }

    pub fn update_user_vault_authority(ctx: Context<UpdateUserVaultAuthority>) -> Result<()> {
        instructions::user_vault::update_authority_handler(ctx)
    }

    pub fn initialize_server_vault(
        ctx: Context<InitializeServerVault>,
        params: VaultParams,
    ) -> Result<()> {
        instructions::server_vault::initialize_handler(ctx, params)
    }

    pub fn update_server_vault_authority(ctx: Context<UpdateServerVaultAuthority>) -> Result<()> {
        instructions::server_vault::update_authority_handler(ctx)
    }

    pub fn initialize_escrow_vault(
        ctx: Context<InitializeEscrowVault>,
        params: VaultParams,
    ) -> Result<()> {
        instructions::escrow_vault::initialize_handler(ctx, params)
    }

    pub fn update_escrow_vault_authority(ctx: Context<UpdateEscrowVaultAuthority>) -> Result<()> {
        instructions::escrow_vault::update_authority_handler(ctx)
    }

    pub fn initialize_airdrop_vault(
        ctx: Context<InitializeAirdropVault>,
        params: VaultParams,
    ) -> Result<()> {
        instructions::airdrop_vault::initialize_handler(ctx, params)
    }

    pub fn update_airdrop_vault_authority(
        ctx: Context<UpdateAirdropVaultAuthority>,
    ) -> Result<()> {
        instructions::airdrop_vault::update_authority_handler(ctx)
    }

    /// Register `username` for the signer and link it to their user vault address
    pub fn create_user(ctx: Context<CreateUser>, username: String) -> Result<()> {
        instructions::user::create_handler(ctx, username)
    }

    /// Overwrite the profile fields passed as `Some`; `None` leaves a field as is
    pub fn update_user_profile(
        ctx: Context<UpdateUserProfile>,
        new_profile_effect: Option<Pubkey>,
        new_theme: Option<Pubkey>,
    ) -> Result<()> {
        instructions::user::update_profile_handler(ctx, new_profile_effect, new_theme)
    }

    pub fn create_user_handle(ctx: Context<CreateUserHandle>, handle: String) -> Result<()> {
        instructions::user_handle::create_handler(ctx, handle)
    }

    pub fn transfer_user_handle(ctx: Context<TransferUserHandle>) -> Result<()> {
        instructions::user_handle::transfer_handler(ctx)
    }

    pub fn create_server(ctx: Context<CreateServer>, name: String, ticker: String) -> Result<()> {
        instructions::server::create_handler(ctx, name, ticker)
    }

    pub fn transfer_server_ownership(
        ctx: Context<TransferServerOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::server::transfer_handler(ctx, new_owner)
    }

    /// Create a program-controlled mint and its metadata record.
    /// Requires a registered service signer.
    pub fn create_token_mint(
        ctx: Context<CreateTokenMint>,
        name: String,
        symbol: String,
        decimals: u8,
        uri: String,
        nonce: u16,
    ) -> Result<()> {
        instructions::token_mint::create_handler(ctx, name, symbol, decimals, uri, nonce)
    }

    /// Mint `amounts[i]` to the token account in `remaining_accounts[i]`,
    /// which must belong to `recipients[i]`
    pub fn mint_tokens<'info>(
        ctx: Context<'_, '_, '_, 'info, MintTokens<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::token_mint::mint_handler(ctx, recipients, amounts)
    }
}
