pub mod marketplace;
pub mod token;
pub mod vault;
pub mod vault_config;

pub use marketplace::*;
pub use token::*;
pub use vault::*;
pub use vault_config::*;
