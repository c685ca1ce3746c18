use anchor_lang::prelude::*;

use crate::{events::*, state::*};

/// Shared tail of every `initialize_*_vault` instruction
pub(crate) fn open_vault(
    vault: &mut Account<VaultState>,
    kind: VaultKind,
    authority: Pubkey,
    service_signer: Pubkey,
    params: Option<VaultParams>,
    bump: u8,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    vault.init(kind, authority, params, now, bump)?;

    emit!(VaultInitialized {
        vault: vault.key(),
        kind,
        authority,
        service_signer,
        timestamp: now,
    });

    msg!("{:?} vault initialized for {}", kind, authority);

    Ok(())
}

/// Shared tail of every `update_*_vault_authority` instruction
pub(crate) fn hand_over_vault(
    vault: &mut Account<VaultState>,
    signer: Pubkey,
    new_authority: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    vault.transfer_authority(&signer, new_authority, now)?;

    emit!(VaultOwnershipTransferred {
        vault: vault.key(),
        kind: vault.kind,
        previous_authority: signer,
        new_authority,
        timestamp: now,
    });

    msg!(
        "{:?} vault authority updated: {} -> {}",
        vault.kind,
        signer,
        new_authority
    );

    Ok(())
}
