use anchor_lang::prelude::*;

use crate::constants::MAX_SERVICE_SIGNERS;
use crate::errors::ZkOnchainError;

/// Program-wide configuration, one per config authority.
///
/// Seeds: [VAULT_CONFIG_SEED, config_authority]
///
/// Service signers are packed at the front of `service_signers`; every slot
/// at or past `service_signers_count` holds `Pubkey::default()`.
#[account]
#[derive(Default)]
pub struct VaultConfigState {
    /// Keys allowed to co-sign vault and token instructions
    pub service_signers: [Pubkey; MAX_SERVICE_SIGNERS],

    pub service_signers_count: u8,

    pub created_at: i64,
    pub created_by: Pubkey,

    pub modified_at: i64,
    pub modified_by: Pubkey,

    /// Key that may rotate itself and manage service signers
    pub current_update_authority: Pubkey,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceSignerOperation {
    Add,
    Remove,
}

impl VaultConfigState {
    pub const LEN: usize = 8 + // discriminator
        (32 * MAX_SERVICE_SIGNERS) + // service_signers
        1 +  // service_signers_count
        8 +  // created_at
        32 + // created_by
        8 +  // modified_at
        32 + // modified_by
        32 + // current_update_authority
        1; // bump

    /// Registered service signers, without the empty tail slots
    pub fn active_service_signers(&self) -> &[Pubkey] {
        let count = (self.service_signers_count as usize).min(MAX_SERVICE_SIGNERS);
        &self.service_signers[..count]
    }

    pub fn is_service_signer(&self, key: &Pubkey) -> bool {
        self.active_service_signers().iter().any(|s| s == key)
    }

    pub fn add_service_signer(&mut self, key: Pubkey) -> Result<()> {
        let count = self.service_signers_count as usize;
        require!(
            count < MAX_SERVICE_SIGNERS,
            ZkOnchainError::TooManyServiceSigners
        );
        require!(
            !self.is_service_signer(&key),
            ZkOnchainError::DuplicateServiceSigner
        );

        self.service_signers[count] = key;
        self.service_signers_count += 1;
        Ok(())
    }

    pub fn remove_service_signer(&mut self, key: &Pubkey) -> Result<()> {
        let count = self.service_signers_count as usize;
        let position = self
            .active_service_signers()
            .iter()
            .position(|s| s == key)
            .ok_or(ZkOnchainError::InvalidSignerExist)?;

        // Keep the active signers contiguous
        self.service_signers.copy_within(position + 1..count, position);
        self.service_signers[count - 1] = Pubkey::default();
        self.service_signers_count -= 1;
        Ok(())
    }

    pub fn apply(&mut self, operation: ServiceSignerOperation, key: Pubkey) -> Result<()> {
        match operation {
            ServiceSignerOperation::Add => self.add_service_signer(key),
            ServiceSignerOperation::Remove => self.remove_service_signer(&key),
        }
    }

    /// Record who modified the config and when
    pub fn touch(&mut self, timestamp: i64, by: Pubkey) {
        self.modified_at = timestamp;
        self.modified_by = by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_until_full() {
        let mut config = VaultConfigState::default();
        for _ in 0..MAX_SERVICE_SIGNERS {
            config.add_service_signer(Pubkey::new_unique()).unwrap();
        }
        assert_eq!(config.service_signers_count as usize, MAX_SERVICE_SIGNERS);

        let err = config.add_service_signer(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, error!(ZkOnchainError::TooManyServiceSigners));
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut config = VaultConfigState::default();
        let signer = Pubkey::new_unique();
        config.add_service_signer(signer).unwrap();

        let err = config.add_service_signer(signer).unwrap_err();
        assert_eq!(err, error!(ZkOnchainError::DuplicateServiceSigner));
        assert_eq!(config.service_signers_count, 1);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut config = VaultConfigState::default();
        let (a, b, c) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        config.add_service_signer(a).unwrap();
        config.add_service_signer(b).unwrap();
        config.add_service_signer(c).unwrap();

        config.remove_service_signer(&a).unwrap();

        assert_eq!(config.active_service_signers(), &[b, c]);
        assert_eq!(config.service_signers[2], Pubkey::default());
        assert!(!config.is_service_signer(&a));
    }

    #[test]
    fn test_remove_missing_signer() {
        let mut config = VaultConfigState::default();
        config.add_service_signer(Pubkey::new_unique()).unwrap();

        let err = config
            .remove_service_signer(&Pubkey::new_unique())
            .unwrap_err();
        assert_eq!(err, error!(ZkOnchainError::InvalidSignerExist));
    }

    #[test]
    fn test_default_key_is_not_a_signer() {
        // Empty slots hold the default key, which must never count as registered
        let config = VaultConfigState::default();
        assert!(!config.is_service_signer(&Pubkey::default()));
    }

    #[test]
    fn test_len_matches_serialized_size() {
        let config = VaultConfigState::default();
        let mut data = Vec::new();
        config.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), VaultConfigState::LEN);
    }
}
