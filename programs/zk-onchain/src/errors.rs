use anchor_lang::prelude::*;

/// Custom error codes for the zk_onchain program
#[error_code]
pub enum ZkOnchainError {
    #[msg("Incorrect parameter provided")]
    InvalidParameter,

    #[msg("Invalid authority")]
    InvalidAuthority,

    #[msg("Account not authorized")]
    InvalidSigner,

    #[msg("Signer doesn't exist")]
    InvalidSignerExist,

    #[msg("Too many service signers")]
    TooManyServiceSigners,

    #[msg("No authority to perform this action")]
    Unauthorized,

    #[msg("Service signer already exists")]
    DuplicateServiceSigner,

    #[msg("Invalid server id")]
    InvalidServerId,

    #[msg("Invalid server name")]
    InvalidServerName,

    #[msg("Value exceeds its maximum length")]
    NameTooLong,

    #[msg("User already holds a handle")]
    HandleAlreadyAssigned,

    #[msg("Handle is not held by the source user")]
    HandleMismatch,

    #[msg("Token account does not match the mint or recipient")]
    InvalidTokenAccount,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
