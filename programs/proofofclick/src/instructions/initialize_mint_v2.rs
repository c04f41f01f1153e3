use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::state::*;
use crate::{CLICK_TOKEN, CURSOR_TOKEN, MINT_AUTHORITY_SEED};

#[derive(Accounts)]
pub struct InitializeMintV2<'info> {
    /// The user being set up; pays for any accounts that get created.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The CLICK token mint
    #[account(address = CLICK_TOKEN)]
    pub click_token_mint: Account<'info, Mint>,

    /// The CURSOR token mint
    #[account(address = CURSOR_TOKEN)]
    pub cursor_token_mint: Account<'info, Mint>,

    /// The payer's CLICK associated token account
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = click_token_mint,
        associated_token::authority = payer
    )]
    pub click_token_account: Account<'info, TokenAccount>,

    /// The payer's CURSOR associated token account
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = cursor_token_mint,
        associated_token::authority = payer
    )]
    pub cursor_token_account: Account<'info, TokenAccount>,

    /// The mint authority record for both tokens
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PdaAuthority::INIT_SPACE,
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub pda_authority: Account<'info, PdaAuthority>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Idempotent account setup. Every account above is `init_if_needed`, so
/// calling this N times leaves the same state as calling it once. A payer
/// that cannot cover rent for a missing account fails in the system
/// program's create CPI and nothing is committed.
pub fn handler(ctx: Context<InitializeMintV2>) -> Result<()> {
    // The canonical bump is a constant for a deployed program, so
    // rewriting it on repeat calls preserves idempotence.
    let authority = &mut ctx.accounts.pda_authority;
    authority.bump = ctx.bumps.pda_authority;

    msg!("Initialized PDA authority: {}", authority.key());
    msg!("CLICK account: {}", ctx.accounts.click_token_account.key());
    msg!("CURSOR account: {}", ctx.accounts.cursor_token_account.key());

    Ok(())
}
