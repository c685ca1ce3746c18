use anchor_lang::prelude::*;

use super::vault_common::{hand_over_vault, open_vault};
use crate::{config_authority, constants::*, errors::*, state::*};

/// Open the signer's user vault, co-signed by a registered service signer
#[derive(Accounts)]
pub struct InitializeUserVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub service_signer: Signer<'info>,

    pub current_authority: Signer<'info>,

    #[account(
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.is_service_signer(&service_signer.key()) @ ZkOnchainError::InvalidSigner,
    )]
    pub config: Account<'info, VaultConfigState>,

    #[account(
        init,
        payer = payer,
        space = VaultState::SPACE,
        seeds = [USER_VAULT_SEED, current_authority.key().as_ref()],
        bump
    )]
    pub user_vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<InitializeUserVault>) -> Result<()> {
    let authority = ctx.accounts.current_authority.key();
    let service_signer = ctx.accounts.service_signer.key();
    open_vault(
        &mut ctx.accounts.user_vault,
        VaultKind::User,
        authority,
        service_signer,
        None,
        ctx.bumps.user_vault,
    )
}

#[derive(Accounts)]
pub struct UpdateUserVaultAuthority<'info> {
    pub service_signer: Signer<'info>,

    pub current_authority: Signer<'info>,

    pub new_authority: Signer<'info>,

    #[account(
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.is_service_signer(&service_signer.key()) @ ZkOnchainError::InvalidSigner,
    )]
    pub config: Account<'info, VaultConfigState>,

    /// Addressed by its creator so it survives authority changes
    #[account(
        mut,
        seeds = [USER_VAULT_SEED, user_vault.creator.as_ref()],
        bump = user_vault.bump,
    )]
    pub user_vault: Account<'info, VaultState>,
}

pub fn update_authority_handler(ctx: Context<UpdateUserVaultAuthority>) -> Result<()> {
    let signer = ctx.accounts.current_authority.key();
    let new_authority = ctx.accounts.new_authority.key();
    hand_over_vault(&mut ctx.accounts.user_vault, signer, new_authority)
}
