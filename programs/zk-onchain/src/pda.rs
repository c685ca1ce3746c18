//! Program-derived address helpers.
//!
//! These mirror the `seeds = [...]` constraints on the instruction accounts so
//! off-chain callers and tests derive exactly the addresses the program checks.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::VaultKind;

/// A derived address together with the bump that produced it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl From<(Pubkey, u8)> for DerivedAddress {
    fn from((address, bump): (Pubkey, u8)) -> Self {
        DerivedAddress { address, bump }
    }
}

/// Derive the vault configuration PDA for `authority`.
///
/// Returns `None` when no bump in 255..=0 yields an off-curve address.
pub fn try_find_vault_config_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Option<DerivedAddress> {
    try_find(&[VAULT_CONFIG_SEED, authority.as_ref()], program_id)
}

/// Same as [`try_find_vault_config_address`], panicking on bump exhaustion
/// like `Pubkey::find_program_address`.
pub fn find_vault_config_address(authority: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_CONFIG_SEED, authority.as_ref()], program_id)
}

pub fn find_vault_address(kind: VaultKind, creator: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[kind.seed(), creator.as_ref()], program_id)
}

pub fn find_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

pub fn find_token_mint_address(payer: &Pubkey, nonce: u16, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TOKEN_MINT_SEED, payer.as_ref(), &nonce.to_be_bytes()],
        program_id,
    )
}

pub fn find_mint_record_address(mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_RECORD_SEED, mint.as_ref()], program_id)
}

/// `None` when no bump works or a seed is longer than 32 bytes
fn try_find(seeds: &[&[u8]], program_id: &Pubkey) -> Option<DerivedAddress> {
    Pubkey::try_find_program_address(seeds, program_id).map(DerivedAddress::from)
}

pub fn try_find_user_address(username: &str, program_id: &Pubkey) -> Option<DerivedAddress> {
    try_find(&[USER_SEED, username.as_bytes()], program_id)
}

pub fn find_user_address(username: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, username.as_bytes()], program_id)
}

pub fn try_find_handle_address(handle: &str, program_id: &Pubkey) -> Option<DerivedAddress> {
    try_find(&[HANDLE_SEED, handle.as_bytes()], program_id)
}

pub fn find_handle_address(handle: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HANDLE_SEED, handle.as_bytes()], program_id)
}

pub fn try_find_server_address(
    name: &str,
    ticker: &str,
    program_id: &Pubkey,
) -> Option<DerivedAddress> {
    try_find(&[SERVER_SEED, name.as_bytes(), ticker.as_bytes()], program_id)
}

pub fn find_server_address(name: &str, ticker: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SERVER_SEED, name.as_bytes(), ticker.as_bytes()],
        program_id,
    )
}
