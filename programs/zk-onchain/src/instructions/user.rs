use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, pda, state::*};

/// Register a username for the signer
#[derive(Accounts)]
#[instruction(username: String)]
pub struct CreateUser<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = UserAccount::SPACE,
        seeds = [USER_SEED, username.as_bytes()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

pub fn create_handler(ctx: Context<CreateUser>, username: String) -> Result<()> {
    validate_label(&username, MAX_USERNAME_LEN)?;

    let authority = ctx.accounts.signer.key();
    let (vault, _) = pda::find_vault_address(VaultKind::User, &authority, ctx.program_id);

    let user = &mut ctx.accounts.user_account;
    user.authority = authority;
    user.username = username;
    user.handle = None;
    user.profile_effect = None;
    user.theme = None;
    user.vault = vault;
    user.bump = ctx.bumps.user_account;

    emit!(UserCreated {
        user: user.key(),
        authority,
        username: user.username.clone(),
        vault,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("User {} created for {}", user.username, authority);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateUserProfile<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, user_account.username.as_bytes()],
        bump = user_account.bump,
        constraint = user_account.authority == signer.key() @ ZkOnchainError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,
}

pub fn update_profile_handler(
    ctx: Context<UpdateUserProfile>,
    new_profile_effect: Option<Pubkey>,
    new_theme: Option<Pubkey>,
) -> Result<()> {
    let user = &mut ctx.accounts.user_account;
    user.apply_profile_update(new_profile_effect, new_theme);

    emit!(UserProfileUpdated {
        user: user.key(),
        profile_effect: user.profile_effect,
        theme: user.theme,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
