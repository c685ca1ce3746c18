use anchor_lang::prelude::*;

use super::vault_common::{hand_over_vault, open_vault};
use crate::{config_authority, constants::*, errors::*, state::*};

/// Open an airdrop vault for the authority
#[derive(Accounts)]
pub struct InitializeAirdropVault<'info> {
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
        seeds = [AIRDROP_VAULT_SEED, current_authority.key().as_ref()],
        bump
    )]
    pub airdrop_vault: Account<'info, VaultState>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<InitializeAirdropVault>, params: VaultParams) -> Result<()> {
    let authority = ctx.accounts.current_authority.key();
    let service_signer = ctx.accounts.service_signer.key();
    open_vault(
        &mut ctx.accounts.airdrop_vault,
        VaultKind::Airdrop,
        authority,
        service_signer,
        Some(params),
        ctx.bumps.airdrop_vault,
    )
}

#[derive(Accounts)]
pub struct UpdateAirdropVaultAuthority<'info> {
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
        seeds = [AIRDROP_VAULT_SEED, airdrop_vault.creator.as_ref()],
        bump = airdrop_vault.bump,
    )]
    pub airdrop_vault: Account<'info, VaultState>,
}

pub fn update_authority_handler(ctx: Context<UpdateAirdropVaultAuthority>) -> Result<()> {
    let signer = ctx.accounts.current_authority.key();
    let new_authority = ctx.accounts.new_authority.key();
    hand_over_vault(&mut ctx.accounts.airdrop_vault, signer, new_authority)
}
