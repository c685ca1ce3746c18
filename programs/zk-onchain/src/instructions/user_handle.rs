use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Mint a handle asset and attach it to the signer's user profile
#[derive(Accounts)]
#[instruction(handle: String)]
pub struct CreateUserHandle<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, user_account.username.as_bytes()],
        bump = user_account.bump,
        constraint = user_account.authority == signer.key() @ ZkOnchainError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init,
        payer = signer,
        space = AssetAccount::SPACE,
        seeds = [HANDLE_SEED, handle.as_bytes()],
        bump
    )]
    pub handle_asset: Account<'info, AssetAccount>,

    pub system_program: Program<'info, System>,
}

pub fn create_handler(ctx: Context<CreateUserHandle>, handle: String) -> Result<()> {
    validate_label(&handle, MAX_HANDLE_LEN)?;
    require!(
        ctx.accounts.user_account.handle.is_none(),
        ZkOnchainError::HandleAlreadyAssigned
    );

    let owner = ctx.accounts.signer.key();
    let asset_key = ctx.accounts.handle_asset.key();

    let asset = &mut ctx.accounts.handle_asset;
    asset.owner = owner;
    asset.asset_type = AssetType::UserHandle;
    asset.data = handle.clone();
    asset.bump = ctx.bumps.handle_asset;

    let user = &mut ctx.accounts.user_account;
    user.handle = Some(asset_key);

    emit!(UserHandleCreated {
        user: user.key(),
        handle_asset: asset_key,
        handle,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Move a handle from the signer's profile to another user's profile
#[derive(Accounts)]
pub struct TransferUserHandle<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, from_user_account.username.as_bytes()],
        bump = from_user_account.bump,
        constraint = from_user_account.authority == signer.key() @ ZkOnchainError::Unauthorized,
    )]
    pub from_user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [USER_SEED, to_user_account.username.as_bytes()],
        bump = to_user_account.bump,
        constraint = to_user_account.key() != from_user_account.key() @ ZkOnchainError::InvalidParameter,
    )]
    pub to_user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [HANDLE_SEED, handle_asset.data.as_bytes()],
        bump = handle_asset.bump,
        constraint = handle_asset.asset_type == AssetType::UserHandle @ ZkOnchainError::HandleMismatch,
    )]
    pub handle_asset: Account<'info, AssetAccount>,
}

pub fn transfer_handler(ctx: Context<TransferUserHandle>) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let asset_key = accounts.handle_asset.key();

    move_handle(
        asset_key,
        &mut accounts.handle_asset,
        &mut accounts.from_user_account,
        &mut accounts.to_user_account,
    )?;

    emit!(UserHandleTransferred {
        handle_asset: asset_key,
        from_user: accounts.from_user_account.key(),
        to_user: accounts.to_user_account.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Handle {} moved to {}",
        accounts.handle_asset.data,
        accounts.to_user_account.username
    );

    Ok(())
}
