use anchor_lang::prelude::*;

use crate::{config_authority, constants::*, errors::*, events::*, state::*};

/// Create the program-wide vault configuration
#[derive(Accounts)]
pub struct InitializeVaultConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Only the compiled-in config authority may create the config
    #[account(
        constraint = authority.key() == config_authority::ID @ ZkOnchainError::InvalidSigner,
    )]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = VaultConfigState::LEN,
        seeds = [VAULT_CONFIG_SEED, authority.key().as_ref()],
        bump
    )]
    pub config: Account<'info, VaultConfigState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeVaultConfig>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let payer = ctx.accounts.payer.key();
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;

    config.service_signers = [Pubkey::default(); MAX_SERVICE_SIGNERS];
    config.service_signers_count = 0;
    config.created_at = now;
    config.created_by = payer;
    config.modified_at = now;
    config.modified_by = payer;
    config.current_update_authority = authority;
    config.bump = ctx.bumps.config;

    emit!(VaultConfigInitialized {
        config: config.key(),
        authority,
        payer,
        timestamp: now,
    });

    msg!("Vault config initialized, update authority: {}", authority);

    Ok(())
}
