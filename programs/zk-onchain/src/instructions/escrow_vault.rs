use anchor_lang::prelude::*;

use super::vault_common::{hand_over_vault, open_vault};
use crate::{config_authority, constants::*, errors::*, state::*};

/// Open an escrow vault for the authority
#[derive(Accounts)]
pub struct InitializeEscrowVault<'info> {
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
        seeds = [ESCROW_VAULT_SEED, current_authority.key().as_ref()],
        bump
    )]
    pub escrow_vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<InitializeEscrowVault>, params: VaultParams) -> Result<()> {
    let authority = ctx.accounts.current_authority.key();
    let service_signer = ctx.accounts.service_signer.key();
    open_vault(
        &mut ctx.accounts.escrow_vault,
        VaultKind::Escrow,
        authority,
        service_signer,
        Some(params),
        ctx.bumps.escrow_vault,
    )
}

#[derive(Accounts)]
pub struct UpdateEscrowVaultAuthority<'info> {
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
        seeds = [ESCROW_VAULT_SEED, escrow_vault.creator.as_ref()],
        bump = escrow_vault.bump,
    )]
    pub escrow_vault: Account<'info, VaultState>,
}

pub fn update_authority_handler(ctx: Context<UpdateEscrowVaultAuthority>) -> Result<()> {
    let signer = ctx.accounts.current_authority.key();
    let new_authority = ctx.accounts.new_authority.key();
    hand_over_vault(&mut ctx.accounts.escrow_vault, signer, new_authority)
}
