use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ZkOnchainError;

/// Metadata for a mint created through `create_token_mint`.
///
/// Seeds: [MINT_RECORD_SEED, mint]
#[account]
#[derive(InitSpace, Default)]
pub struct MintRecord {
    pub mint: Pubkey,
    pub creator: Pubkey,
    #[max_len(MAX_TOKEN_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_TOKEN_SYMBOL_LEN)]
    pub symbol: String,
    #[max_len(MAX_TOKEN_URI_LEN)]
    pub uri: String,
    pub decimals: u8,
    pub nonce: u16,
    pub created_at: i64,
    pub bump: u8,
}

impl MintRecord {
    pub const SPACE: usize = 8 + MintRecord::INIT_SPACE;
}

/// Check a batch mint request and return the total amount to be minted
pub fn validate_mint_batch(recipients: &[Pubkey], amounts: &[u64]) -> Result<u64> {
    require!(
        !recipients.is_empty() && recipients.len() == amounts.len(),
        ZkOnchainError::InvalidParameter
    );
    require!(
        recipients.len() <= MAX_MINT_RECIPIENTS,
        ZkOnchainError::InvalidParameter
    );

    amounts.iter().try_fold(0u64, |total, amount| {
        require!(*amount > 0, ZkOnchainError::InvalidParameter);
        total
            .checked_add(*amount)
            .ok_or_else(|| error!(ZkOnchainError::MathOverflow))
    })
}
