use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(name: String, ticker: String)]
pub struct CreateServer<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = ServerAccount::SPACE,
        seeds = [SERVER_SEED, name.as_bytes(), ticker.as_bytes()],
        bump
    )]
    pub server_account: Account<'info, ServerAccount>,

    pub system_program: Program<'info, System>,
}

pub fn create_handler(ctx: Context<CreateServer>, name: String, ticker: String) -> Result<()> {
    validate_label(&name, MAX_SERVER_LABEL_LEN)?;
    validate_label(&ticker, MAX_TICKER_LEN)?;

    let authority = ctx.accounts.signer.key();
    let server = &mut ctx.accounts.server_account;
    server.authority = authority;
    server.name = name;
    server.ticker = ticker;
    server.theme = None;
    server.bump = ctx.bumps.server_account;

    emit!(ServerCreated {
        server: server.key(),
        authority,
        name: server.name.clone(),
        ticker: server.ticker.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Server {} ({}) created by {}", server.name, server.ticker, authority);

    Ok(())
}

#[derive(Accounts)]
pub struct TransferServerOwnership<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [SERVER_SEED, server_account.name.as_bytes(), server_account.ticker.as_bytes()],
        bump = server_account.bump,
        constraint = server_account.authority == signer.key() @ ZkOnchainError::Unauthorized,
    )]
    pub server_account: Account<'info, ServerAccount>,
}

pub fn transfer_handler(ctx: Context<TransferServerOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx.accounts.signer.key();
    let server = &mut ctx.accounts.server_account;
    server.authority = new_owner;

    emit!(ServerOwnershipTransferred {
        server: server.key(),
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Server {} ownership: {} -> {}", server.name, previous_owner, new_owner);

    Ok(())
}
