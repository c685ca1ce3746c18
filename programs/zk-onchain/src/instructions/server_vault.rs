use anchor_lang::prelude::*;

use super::vault_common::{hand_over_vault, open_vault};
use crate::{config_authority, constants::*, errors::*, state::*};

/// Open a server vault; `VaultParams` names the server it belongs to
#[derive(Accounts)]
pub struct InitializeServerVault<'info> {
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
        seeds = [SERVER_VAULT_SEED, current_authority.key().as_ref()],
        bump
    )]
    pub server_vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<InitializeServerVault>, params: VaultParams) -> Result<()> {
    let authority = ctx.accounts.current_authority.key();
    let service_signer = ctx.accounts.service_signer.key();
    open_vault(
        &mut ctx.accounts.server_vault,
        VaultKind::Server,
        authority,
        service_signer,
        Some(params),
        ctx.bumps.server_vault,
    )
}

#[derive(Accounts)]
pub struct UpdateServerVaultAuthority<'info> {
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
        seeds = [SERVER_VAULT_SEED, server_vault.creator.as_ref()],
        bump = server_vault.bump,
    )]
    pub server_vault: Account<'info, VaultState>,
}

pub fn update_authority_handler(ctx: Context<UpdateServerVaultAuthority>) -> Result<()> {
    let signer = ctx.accounts.current_authority.key();
    let new_authority = ctx.accounts.new_authority.key();
    hand_over_vault(&mut ctx.accounts.server_vault, signer, new_authority)
}
