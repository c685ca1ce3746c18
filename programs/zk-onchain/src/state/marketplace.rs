use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ZkOnchainError;

/// User profile. Seeds: [USER_SEED, username]
#[account]
#[derive(InitSpace, Default)]
pub struct UserAccount {
    pub authority: Pubkey,
    #[max_len(MAX_USERNAME_LEN)]
    pub username: String,
    /// Address of the handle asset this user currently holds
    pub handle: Option<Pubkey>,
    pub profile_effect: Option<Pubkey>,
    pub theme: Option<Pubkey>,
    /// The authority's user vault PDA
    pub vault: Pubkey,
    pub bump: u8,
}

impl UserAccount {
    pub const SPACE: usize = 8 + UserAccount::INIT_SPACE;

    pub fn apply_profile_update(
        &mut self,
        new_profile_effect: Option<Pubkey>,
        new_theme: Option<Pubkey>,
    ) {
        if let Some(effect) = new_profile_effect {
            self.profile_effect = Some(effect);
        }
        if let Some(theme) = new_theme {
            self.theme = Some(theme);
        }
    }
}

#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum AssetType {
    UserHandle,
    ProfileEffect,
    Theme,
    #[default]
    Other,
}

/// Ownable marketplace asset. Handles use seeds [HANDLE_SEED, data].
#[account]
#[derive(InitSpace, Default)]
pub struct AssetAccount {
    pub owner: Pubkey,
    pub asset_type: AssetType,
    #[max_len(MAX_HANDLE_LEN)]
    pub data: String,
    pub bump: u8,
}

impl AssetAccount {
    pub const SPACE: usize = 8 + AssetAccount::INIT_SPACE;
}

/// Server record. Seeds: [SERVER_SEED, name, ticker]
#[account]
#[derive(InitSpace, Default)]
pub struct ServerAccount {
    pub authority: Pubkey,
    #[max_len(MAX_SERVER_LABEL_LEN)]
    pub name: String,
    #[max_len(MAX_TICKER_LEN)]
    pub ticker: String,
    pub theme: Option<Pubkey>,
    pub bump: u8,
}

impl ServerAccount {
    pub const SPACE: usize = 8 + ServerAccount::INIT_SPACE;
}

/// Reject empty strings and strings longer than `max` bytes
pub fn validate_label(value: &str, max: usize) -> Result<()> {
    require!(!value.is_empty(), ZkOnchainError::InvalidParameter);
    require!(value.len() <= max, ZkOnchainError::NameTooLong);
    Ok(())
}

/// Move a handle asset from one user to another.
///
/// `asset_key` must be the handle currently recorded on `from`, and `to`
/// must not already hold one.
pub fn move_handle(
    asset_key: Pubkey,
    asset: &mut AssetAccount,
    from: &mut UserAccount,
    to: &mut UserAccount,
) -> Result<()> {
    require!(
        from.handle == Some(asset_key) && asset.owner == from.authority,
        ZkOnchainError::HandleMismatch
    );
    require!(to.handle.is_none(), ZkOnchainError::HandleAlreadyAssigned);

    asset.owner = to.authority;
    from.handle = None;
    to.handle = Some(asset_key);
    Ok(())
}
