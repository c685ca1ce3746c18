use anchor_lang::prelude::*;

use crate::state::{ServiceSignerOperation, VaultKind};

/// Event emitted when the vault configuration is created
#[event]
pub struct VaultConfigInitialized {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the configuration update authority changes hands
#[event]
pub struct VaultAuthorityUpdated {
    pub config: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ServiceSignerChanged {
    pub config: Pubkey,
    pub service_signer: Pubkey,
    pub operation: ServiceSignerOperation,
    pub service_signers_count: u8,
    pub timestamp: i64,
}

/// Event emitted when a user, server, escrow or airdrop vault is created
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub kind: VaultKind,
    pub authority: Pubkey,
    pub service_signer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultOwnershipTransferred {
    pub vault: Pubkey,
    pub kind: VaultKind,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct UserCreated {
    pub user: Pubkey,
    pub authority: Pubkey,
    pub username: String,
    pub vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct UserProfileUpdated {
    pub user: Pubkey,
    pub profile_effect: Option<Pubkey>,
    pub theme: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct UserHandleCreated {
    pub user: Pubkey,
    pub handle_asset: Pubkey,
    pub handle: String,
    pub timestamp: i64,
}

#[event]
pub struct UserHandleTransferred {
    pub handle_asset: Pubkey,
    pub from_user: Pubkey,
    pub to_user: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ServerCreated {
    pub server: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub ticker: String,
    pub timestamp: i64,
}

#[event]
pub struct ServerOwnershipTransferred {
    pub server: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a program-controlled mint is created
#[event]
pub struct TokenMintCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub timestamp: i64,
}

/// Event emitted once per `mint_tokens` call
#[event]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub recipients: u8,
    pub total_amount: u64,
    pub timestamp: i64,
}
