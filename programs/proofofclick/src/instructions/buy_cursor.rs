use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount};

use crate::errors::*;
use crate::state::*;
use crate::{CLICK_TOKEN, CURSOR_PRICE, CURSOR_TOKEN, MINT_AUTHORITY_SEED, ONE_TOKEN};

#[derive(Accounts)]
pub struct BuyCursor<'info> {
    /// The person buying the cursor
    pub payer: Signer<'info>,

    /// The CLICK token mint
    #[account(mut, address = CLICK_TOKEN)]
    pub click_token_mint: Account<'info, Mint>,

    /// The CURSOR token mint
    #[account(mut, address = CURSOR_TOKEN)]
    pub cursor_token_mint: Account<'info, Mint>,

    /// The payer's CLICK token account, debited by the purchase
    #[account(
        mut,
        associated_token::mint = click_token_mint,
        associated_token::authority = payer
    )]
    pub click_token_account: Account<'info, TokenAccount>,

    /// The payer's CURSOR token account, credited by the purchase
    #[account(
        mut,
        associated_token::mint = cursor_token_mint,
        associated_token::authority = payer
    )]
    pub cursor_token_account: Account<'info, TokenAccount>,

    /// The mint authority for CURSOR tokens
    #[account(seeds = [MINT_AUTHORITY_SEED], bump = pda_authority.bump)]
    pub pda_authority: Account<'info, PdaAuthority>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

/// Whether a CLICK balance covers the fixed cursor price.
pub fn meets_cursor_price(click_balance: u64) -> bool {
    click_balance >= CURSOR_PRICE
}

/// Trade 50 CLICK for 1 CURSOR.
///
/// The price check and the burn read the same snapshot, so there is no
/// partial debit; if either CPI fails the host reverts the whole
/// transaction and both balances stay unchanged.
pub fn handler(ctx: Context<BuyCursor>, _nonce: u64) -> Result<()> {
    require!(
        meets_cursor_price(ctx.accounts.click_token_account.amount),
        ClickError::InsufficientBalance
    );

    ctx.accounts
        .cursor_token_mint
        .supply
        .checked_add(ONE_TOKEN)
        .ok_or(ClickError::MintOverflow)?;

    // Burn leg: the payer signs for their own CLICK.
    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.click_token_mint.to_account_info(),
                from: ctx.accounts.click_token_account.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        CURSOR_PRICE,
    )?;

    // Mint leg: the PDA signs.
    let bump = ctx.accounts.pda_authority.bump;
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.cursor_token_mint.to_account_info(),
                to: ctx.accounts.cursor_token_account.to_account_info(),
                authority: ctx.accounts.pda_authority.to_account_info(),
            },
            &[&[MINT_AUTHORITY_SEED, &[bump]]],
        ),
        ONE_TOKEN,
    )?;

    msg!("Bought 1 CURSOR for 50 CLICK");

    Ok(())
}
