use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ZkOnchainError;

/// Which family a vault belongs to. Each kind has its own PDA seed, so one
/// authority can hold one vault of every kind.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum VaultKind {
    #[default]
    User,
    Server,
    Escrow,
    Airdrop,
}

impl VaultKind {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            VaultKind::User => USER_VAULT_SEED,
            VaultKind::Server => SERVER_VAULT_SEED,
            VaultKind::Escrow => ESCROW_VAULT_SEED,
            VaultKind::Airdrop => AIRDROP_VAULT_SEED,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VaultParams {
    pub server_id: String,
    pub server_name: String,
}

impl VaultParams {
    pub fn validate(&self) -> Result<()> {
        require!(!self.server_id.is_empty(), ZkOnchainError::InvalidServerId);
        require!(
            !self.server_name.is_empty(),
            ZkOnchainError::InvalidServerName
        );
        require!(
            self.server_id.len() <= MAX_SERVER_ID_LEN,
            ZkOnchainError::NameTooLong
        );
        require!(
            self.server_name.len() <= MAX_SERVER_NAME_LEN,
            ZkOnchainError::NameTooLong
        );
        Ok(())
    }
}

/// Per-authority vault account.
///
/// Seeds: [kind.seed(), creator]
///
/// `creator` pins the address; `current_authority` is the key that controls
/// the vault today and can move without relocating the account.
#[account]
#[derive(InitSpace, Default)]
pub struct VaultState {
    pub kind: VaultKind,
    pub creator: Pubkey,
    pub current_authority: Pubkey,
    #[max_len(MAX_SERVER_ID_LEN)]
    pub server_id: String,
    #[max_len(MAX_SERVER_NAME_LEN)]
    pub server_name: String,
    pub created_at: i64,
    pub modified_at: i64,
    pub bump: u8,
}

impl VaultState {
    pub const SPACE: usize = 8 + VaultState::INIT_SPACE;

    /// Populate a freshly allocated vault. User vaults carry no server params.
    pub fn init(
        &mut self,
        kind: VaultKind,
        creator: Pubkey,
        params: Option<VaultParams>,
        timestamp: i64,
        bump: u8,
    ) -> Result<()> {
        let params = match (kind, params) {
            (VaultKind::User, _) => VaultParams::default(),
            (_, Some(params)) => {
                params.validate()?;
                params
            }
            (_, None) => return err!(ZkOnchainError::InvalidParameter),
        };

        self.kind = kind;
        self.creator = creator;
        self.current_authority = creator;
        self.server_id = params.server_id;
        self.server_name = params.server_name;
        self.created_at = timestamp;
        self.modified_at = timestamp;
        self.bump = bump;
        Ok(())
    }

    pub fn transfer_authority(
        &mut self,
        signer: &Pubkey,
        new_authority: Pubkey,
        timestamp: i64,
    ) -> Result<()> {
        require_keys_eq!(
            *signer,
            self.current_authority,
            ZkOnchainError::InvalidAuthority
        );
        self.current_authority = new_authority;
        self.modified_at = timestamp;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: &str, name: &str) -> VaultParams {
        VaultParams {
            server_id: id.to_string(),
            server_name: name.to_string(),
        }
    }

    #[test]
    fn test_seeds_are_distinct_per_kind() {
        let kinds = [
            VaultKind::User,
            VaultKind::Server,
            VaultKind::Escrow,
            VaultKind::Airdrop,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.seed(), b.seed());
            }
        }
    }

    #[test]
    fn test_default_kind_is_user() {
        assert_eq!(VaultKind::default(), VaultKind::User);
        assert_eq!(VaultState::default().kind, VaultKind::User);
    }

    #[test]
    fn test_params_validation() {
        assert!(params("srv-1", "Server One").validate().is_ok());
        assert_eq!(
            params("", "Server One").validate().unwrap_err(),
            error!(ZkOnchainError::InvalidServerId)
        );
        assert_eq!(
            params("srv-1", "").validate().unwrap_err(),
            error!(ZkOnchainError::InvalidServerName)
        );
        assert_eq!(
            params(&"x".repeat(MAX_SERVER_ID_LEN + 1), "Server One")
                .validate()
                .unwrap_err(),
            error!(ZkOnchainError::NameTooLong)
        );
    }

    #[test]
    fn test_user_vault_ignores_params() {
        let creator = Pubkey::new_unique();
        let mut vault = VaultState::default();
        vault
            .init(VaultKind::User, creator, Some(params("a", "b")), 100, 254)
            .unwrap();

        assert_eq!(vault.current_authority, creator);
        assert!(vault.server_id.is_empty());
        assert_eq!(vault.created_at, 100);
        assert_eq!(vault.bump, 254);
    }

    #[test]
    fn test_server_vault_requires_params() {
        let mut vault = VaultState::default();
        let err = vault
            .init(VaultKind::Server, Pubkey::new_unique(), None, 0, 255)
            .unwrap_err();
        assert_eq!(err, error!(ZkOnchainError::InvalidParameter));
    }

    #[test]
    fn test_transfer_authority_keeps_creator() {
        let creator = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut vault = VaultState::default();
        vault
            .init(VaultKind::Escrow, creator, Some(params("e", "Escrow")), 10, 250)
            .unwrap();

        vault.transfer_authority(&creator, next, 20).unwrap();
        assert_eq!(vault.creator, creator);
        assert_eq!(vault.current_authority, next);
        assert_eq!(vault.modified_at, 20);

        // The previous authority has no further say
        let err = vault
            .transfer_authority(&creator, creator, 30)
            .unwrap_err();
        assert_eq!(err, error!(ZkOnchainError::InvalidAuthority));
    }
}
