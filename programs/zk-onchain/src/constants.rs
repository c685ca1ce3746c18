// Constants for the zk_onchain program

/// Seed for the vault configuration PDA
pub const VAULT_CONFIG_SEED: &[u8] = b"vault-config";

/// Seeds for per-authority vault PDAs
pub const USER_VAULT_SEED: &[u8] = b"user-vault";
pub const SERVER_VAULT_SEED: &[u8] = b"server-vault";
pub const ESCROW_VAULT_SEED: &[u8] = b"escrow-vault";
pub const AIRDROP_VAULT_SEED: &[u8] = b"airdrop-vault";

/// Seed for the PDA that holds mint authority over program-created mints
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

/// Seed for program-created token mints (payer + nonce scoped)
pub const TOKEN_MINT_SEED: &[u8] = b"token-mint";

/// Seed for the metadata record of a program-created mint
pub const MINT_RECORD_SEED: &[u8] = b"mint-record";

pub const USER_SEED: &[u8] = b"user";
pub const HANDLE_SEED: &[u8] = b"handle";
pub const SERVER_SEED: &[u8] = b"server";

pub const MAX_SERVICE_SIGNERS: usize = 3;

// String fields used as PDA seeds must fit the 32-byte per-seed limit.
pub const MAX_SERVER_ID_LEN: usize = 32;
pub const MAX_SERVER_NAME_LEN: usize = 64;
pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_HANDLE_LEN: usize = 32;
pub const MAX_SERVER_LABEL_LEN: usize = 32;
pub const MAX_TICKER_LEN: usize = 10;

pub const MAX_TOKEN_NAME_LEN: usize = 32;
pub const MAX_TOKEN_SYMBOL_LEN: usize = 10;
pub const MAX_TOKEN_URI_LEN: usize = 200;

/// Upper bound on recipients in a single `mint_tokens` call
pub const MAX_MINT_RECIPIENTS: usize = 10;
