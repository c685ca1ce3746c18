/// PDA derivation tests for zk_onchain
///
/// Every account the program validates by seeds can be derived off-chain
/// through `zk_onchain::pda`. These tests pin the derivation rules that
/// clients depend on.

use anchor_lang::prelude::*;
use zk_onchain::{
    config_authority,
    constants::*,
    pda::{self, DerivedAddress},
    errors::ZkOnchainError,
    state::{validate_label, VaultKind},
};

const CONFIG_AUTHORITY: &str = "Bn6jUQPC48meSkE5nZ8G8yWyxsuoiGwQwyX127nVmWWZ";

// =============================================================================
// Vault config address
// =============================================================================

#[test]
fn test_config_authority_literal() {
    assert_eq!(config_authority::ID.to_string(), CONFIG_AUTHORITY);
}

#[test]
fn test_config_address_is_deterministic() {
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;

    let first = pda::find_vault_config_address(&authority, &program_id);
    let second = pda::find_vault_config_address(&authority, &program_id);

    assert_eq!(first, second, "Same inputs must derive the same address and bump");
}

#[test]
fn test_config_address_matches_raw_seed_layout() {
    // Clients outside Rust derive with the literal seed string
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;

    let expected =
        Pubkey::find_program_address(&[b"vault-config", authority.as_ref()], &program_id);

    assert_eq!(pda::find_vault_config_address(&authority, &program_id), expected);
    assert_eq!(
        pda::try_find_vault_config_address(&authority, &program_id),
        Some(DerivedAddress::from(expected))
    );
}

#[test]
fn test_config_address_unique_per_authority() {
    let program_id = zk_onchain::id();

    let (from_config_authority, _) =
        pda::find_vault_config_address(&config_authority::ID, &program_id);
    let (from_other, _) = pda::find_vault_config_address(&Pubkey::new_unique(), &program_id);

    assert_ne!(from_config_authority, from_other);
}

#[test]
fn test_config_address_unique_per_seed() {
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;

    let (config, _) = pda::find_vault_config_address(&authority, &program_id);
    let (other_seed, _) =
        Pubkey::find_program_address(&[b"vault-configs", authority.as_ref()], &program_id);

    assert_ne!(config, other_seed);
}

#[test]
fn test_config_address_unique_per_program() {
    let authority = config_authority::ID;

    let (ours, _) = pda::find_vault_config_address(&authority, &zk_onchain::id());
    let (theirs, _) = pda::find_vault_config_address(&authority, &Pubkey::new_unique());

    assert_ne!(ours, theirs);
}

#[test]
fn test_config_bump_is_canonical() {
    // find_program_address walks down from 255; every higher bump must be on-curve
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;
    let derived = pda::try_find_vault_config_address(&authority, &program_id).unwrap();

    for bump in (derived.bump as u16 + 1)..=255 {
        let attempt = Pubkey::create_program_address(
            &[VAULT_CONFIG_SEED, authority.as_ref(), &[bump as u8]],
            &program_id,
        );
        assert!(attempt.is_err(), "bump {} should not be a valid PDA", bump);
    }
}

// =============================================================================
// Vault addresses
// =============================================================================

#[test]
fn test_vault_addresses_unique_per_kind() {
    let program_id = zk_onchain::id();
    let authority = Pubkey::new_unique();

    let addresses: Vec<Pubkey> = [
        VaultKind::User,
        VaultKind::Server,
        VaultKind::Escrow,
        VaultKind::Airdrop,
    ]
    .iter()
    .map(|kind| pda::find_vault_address(*kind, &authority, &program_id).0)
    .collect();

    for (i, a) in addresses.iter().enumerate() {
        for b in addresses.iter().skip(i + 1) {
            assert_ne!(a, b, "Each vault kind needs its own address");
        }
    }
}

#[test]
fn test_vault_addresses_unique_per_authority() {
    let program_id = zk_onchain::id();

    let (a, _) = pda::find_vault_address(VaultKind::User, &Pubkey::new_unique(), &program_id);
    let (b, _) = pda::find_vault_address(VaultKind::User, &Pubkey::new_unique(), &program_id);

    assert_ne!(a, b);
}

#[test]
fn test_vault_and_config_never_collide() {
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;

    let (config, _) = pda::find_vault_config_address(&authority, &program_id);
    let (user_vault, _) = pda::find_vault_address(VaultKind::User, &authority, &program_id);

    assert_ne!(config, user_vault);
}

// =============================================================================
// Marketplace and token addresses
// =============================================================================

#[test]
fn test_user_and_handle_namespaces_are_separate() {
    let program_id = zk_onchain::id();

    let (user, _) = pda::find_user_address("alice", &program_id);
    let (handle, _) = pda::find_handle_address("alice", &program_id);

    assert_ne!(user, handle, "A username and a handle with the same text must not collide");
}

#[test]
fn test_server_address_depends_on_ticker() {
    let program_id = zk_onchain::id();

    let (a, _) = pda::find_server_address("guild", "GLD", &program_id);
    let (b, _) = pda::find_server_address("guild", "GLD2", &program_id);

    assert_ne!(a, b);
}

#[test]
fn test_token_mint_and_record_addresses() {
    let program_id = zk_onchain::id();
    let payer = Pubkey::new_unique();

    let (mint, _) = pda::find_token_mint_address(&payer, 7, &program_id);
    let (raw, _) = Pubkey::find_program_address(
        &[TOKEN_MINT_SEED, payer.as_ref(), &7u16.to_be_bytes()],
        &program_id,
    );
    assert_eq!(mint, raw, "Nonce is encoded big-endian");

    let (record, _) = pda::find_mint_record_address(&mint, &program_id);
    let (authority, _) = pda::find_mint_authority_address(&program_id);
    assert_ne!(record, mint);
    assert_ne!(authority, mint);
}

#[test]
fn test_label_over_seed_limit_has_no_address() {
    let program_id = zk_onchain::id();
    let username = "a".repeat(MAX_USERNAME_LEN + 1);

    assert_eq!(
        validate_label(&username, MAX_USERNAME_LEN).unwrap_err(),
        error!(ZkOnchainError::NameTooLong)
    );
    assert!(pda::try_find_user_address(&username, &program_id).is_none());
    assert!(pda::try_find_handle_address(&username, &program_id).is_none());
    assert!(pda::try_find_server_address(&username, "GLD", &program_id).is_none());

    let longest = "a".repeat(MAX_USERNAME_LEN);
    assert!(pda::try_find_user_address(&longest, &program_id).is_some());
}

#[test]
#[should_panic]
fn test_infallible_finder_panics_over_seed_limit() {
    pda::find_handle_address(&"h".repeat(MAX_HANDLE_LEN + 1), &zk_onchain::id());
}

// =============================================================================
// Cross-check against solana-sdk
// =============================================================================

fn to_sdk(key: &Pubkey) -> solana_sdk::pubkey::Pubkey {
    solana_sdk::pubkey::Pubkey::new_from_array(key.to_bytes())
}

#[test]
fn test_config_address_matches_solana_sdk() {
    let program_id = zk_onchain::id();
    let authority = config_authority::ID;

    let (address, bump) = pda::find_vault_config_address(&authority, &program_id);
    let (sdk_address, sdk_bump) = solana_sdk::pubkey::Pubkey::find_program_address(
        &[b"vault-config", to_sdk(&authority).as_ref()],
        &to_sdk(&program_id),
    );

    assert_eq!(address.to_bytes(), sdk_address.to_bytes());
    assert_eq!(bump, sdk_bump);
}

#[test]
fn test_user_address_matches_solana_sdk() {
    let program_id = zk_onchain::id();

    let (address, bump) = pda::find_user_address("alice", &program_id);
    let (sdk_address, sdk_bump) = solana_sdk::pubkey::Pubkey::find_program_address(
        &[b"user", b"alice"],
        &to_sdk(&program_id),
    );

    assert_eq!(address.to_bytes(), sdk_address.to_bytes());
    assert_eq!(bump, sdk_bump);
}
