use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::{config_authority, constants::*, errors::*, events::*, state::*};

/// Create an SPL mint controlled by the program's mint-authority PDA
#[derive(Accounts)]
#[instruction(name: String, symbol: String, decimals: u8, uri: String, nonce: u16)]
pub struct CreateTokenMint<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub service_signer: Signer<'info>,

    #[account(
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.is_service_signer(&service_signer.key()) @ ZkOnchainError::InvalidSigner,
    )]
    pub config: Account<'info, VaultConfigState>,

    /// CHECK: PDA used as mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        seeds = [TOKEN_MINT_SEED, payer.key().as_ref(), &nonce.to_be_bytes()],
        bump,
        mint::decimals = decimals,
        mint::authority = mint_authority,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        space = MintRecord::SPACE,
        seeds = [MINT_RECORD_SEED, mint.key().as_ref()],
        bump
    )]
    pub mint_record: Account<'info, MintRecord>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_handler(
    ctx: Context<CreateTokenMint>,
    name: String,
    symbol: String,
    decimals: u8,
    uri: String,
    nonce: u16,
) -> Result<()> {
    validate_label(&name, MAX_TOKEN_NAME_LEN)?;
    validate_label(&symbol, MAX_TOKEN_SYMBOL_LEN)?;
    require!(uri.len() <= MAX_TOKEN_URI_LEN, ZkOnchainError::NameTooLong);

    let now = Clock::get()?.unix_timestamp;
    let mint = ctx.accounts.mint.key();
    let creator = ctx.accounts.payer.key();

    let record = &mut ctx.accounts.mint_record;
    record.mint = mint;
    record.creator = creator;
    record.name = name;
    record.symbol = symbol;
    record.uri = uri;
    record.decimals = decimals;
    record.nonce = nonce;
    record.created_at = now;
    record.bump = ctx.bumps.mint_record;

    emit!(TokenMintCreated {
        mint,
        creator,
        name: record.name.clone(),
        symbol: record.symbol.clone(),
        decimals,
        timestamp: now,
    });

    msg!("Token mint {} ({}) created", mint, record.symbol);

    Ok(())
}

/// Mint to many recipients in one call.
///
/// `remaining_accounts[i]` is the token account receiving `amounts[i]`, and
/// must be owned by `recipients[i]`.
#[derive(Accounts)]
pub struct MintTokens<'info> {
    pub service_signer: Signer<'info>,

    #[account(
        seeds = [VAULT_CONFIG_SEED, config_authority::ID.as_ref()],
        bump = config.bump,
        constraint = config.is_service_signer(&service_signer.key()) @ ZkOnchainError::InvalidSigner,
    )]
    pub config: Account<'info, VaultConfigState>,

    /// CHECK: PDA used as mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// Only mints created through `create_token_mint` have a record
    #[account(
        seeds = [MINT_RECORD_SEED, mint.key().as_ref()],
        bump = mint_record.bump,
        has_one = mint @ ZkOnchainError::InvalidParameter,
    )]
    pub mint_record: Account<'info, MintRecord>,

    pub token_program: Program<'info, Token>,
}

pub fn mint_handler<'info>(
    ctx: Context<'_, '_, '_, 'info, MintTokens<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let total_amount = validate_mint_batch(&recipients, &amounts)?;
    require!(
        ctx.remaining_accounts.len() == recipients.len(),
        ZkOnchainError::InvalidParameter
    );

    let mint_key = ctx.accounts.mint.key();
    let token_program = ctx.accounts.token_program.key();
    let authority_bump = [ctx.bumps.mint_authority];
    let authority_seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &authority_bump];
    let signer_seeds = &[authority_seeds];

    for ((destination, recipient), amount) in ctx
        .remaining_accounts
        .iter()
        .zip(recipients.iter())
        .zip(amounts.iter())
    {
        require_keys_eq!(
            *destination.owner,
            token_program,
            ZkOnchainError::InvalidTokenAccount
        );
        {
            let data = destination.try_borrow_data()?;
            let account = TokenAccount::try_deserialize(&mut &data[..])?;
            require!(
                account.mint == mint_key && account.owner == *recipient,
                ZkOnchainError::InvalidTokenAccount
            );
        }

        token_mint_to(
            ctx.accounts.mint_authority.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            destination.clone(),
            *amount,
            signer_seeds,
        )?;
    }

    emit!(TokensMinted {
        mint: mint_key,
        recipients: recipients.len() as u8,
        total_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Minted {} of {} to {} recipients", total_amount, mint_key, recipients.len());

    Ok(())
}

// Issue an spl_token `MintTo` signed by the mint-authority PDA.
fn token_mint_to<'a>(
    authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::mint_to(
        CpiContext::new_with_signer(
            token_program,
            MintTo {
                mint,
                to: destination,
                authority,
            },
            signer_seeds,
        ),
        amount,
    )
}
