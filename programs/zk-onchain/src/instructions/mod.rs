pub mod airdrop_vault;
pub mod escrow_vault;
pub mod initialize_vault_config;
pub mod manage_service_signer;
pub mod server;
pub mod server_vault;
pub mod token_mint;
pub mod update_vault_authority;
pub mod user;
pub mod user_handle;
pub mod user_vault;
mod vault_common;

pub use airdrop_vault::*;
pub use escrow_vault::*;
pub use initialize_vault_config::*;
pub use manage_service_signer::*;
pub use server::*;
pub use server_vault::*;
pub use token_mint::*;
pub use update_vault_authority::*;
pub use user::*;
pub use user_handle::*;
pub use user_vault::*;
