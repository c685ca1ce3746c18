use anchor_lang::prelude::*;

use crate::{config_authority, constants::*, errors::*, events::*, state::*};

/// Add or remove a service signer
#[derive(Accounts)]
pub struct ManageServiceSigner<'info> {
    #[account(
        mut,
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.current_update_authority == authority.key() @ ZkOnchainError::InvalidAuthority,
    )]
    pub config: Account<'info, VaultConfigState>,

    pub authority: Signer<'info>,

    /// The service signer being added or removed
    pub service_signer: Signer<'info>,
}

pub fn handler(ctx: Context<ManageServiceSigner>, operation: ServiceSignerOperation) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let service_signer = ctx.accounts.service_signer.key();
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;

    config.apply(operation, service_signer)?;
    config.touch(now, authority);

    emit!(ServiceSignerChanged {
        config: config.key(),
        service_signer,
        operation,
        service_signers_count: config.service_signers_count,
        timestamp: now,
    });

    msg!(
        "Service signer {:?}: {} ({} registered)",
        operation,
        service_signer,
        config.service_signers_count
    );

    Ok(())
}
