use anchor_lang::prelude::*;

use crate::{config_authority, constants::*, errors::*, events::*, state::*};

/// Hand the config update authority to a new key
#[derive(Accounts)]
pub struct UpdateVaultAuthority<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.current_update_authority == current_authority.key() @ ZkOnchainError::InvalidAuthority,
    )]
    pub config: Account<'info, VaultConfigState>,

    pub current_authority: Signer<'info>,

    /// Must sign so a typo cannot lock the config
    pub new_authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateVaultAuthority>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let previous_authority = ctx.accounts.current_authority.key();
    let new_authority = ctx.accounts.new_authority.key();
    let config = &mut ctx.accounts.config;

    config.current_update_authority = new_authority;
    config.touch(now, previous_authority);

    emit!(VaultAuthorityUpdated {
        config: config.key(),
        previous_authority,
        new_authority,
        timestamp: now,
    });

    msg!(
        "Vault config authority updated: {} -> {}",
        previous_authority,
        new_authority
    );

    Ok(())
}
