use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::errors::*;
use crate::state::*;
use crate::{CLICK_TOKEN, CURSOR_TOKEN, MINT_AUTHORITY_SEED, ONE_TOKEN};

#[derive(Accounts)]
pub struct MintBasedOnBalances<'info> {
    /// The person who is minting
    pub payer: Signer<'info>,

    /// The CLICK token mint
    #[account(mut, address = CLICK_TOKEN)]
    pub click_token_mint: Account<'info, Mint>,

    /// The CURSOR token mint
    #[account(address = CURSOR_TOKEN)]
    pub cursor_token_mint: Account<'info, Mint>,

    /// The payer's CLICK token account, where tokens will be minted to
    #[account(
        mut,
        associated_token::mint = click_token_mint,
        associated_token::authority = payer
    )]
    pub click_token_account: Account<'info, TokenAccount>,

    /// The payer's CURSOR token account, which determines the amount minted
    #[account(
        associated_token::mint = cursor_token_mint,
        associated_token::authority = payer
    )]
    pub cursor_token_account: Account<'info, TokenAccount>,

    /// The mint authority for CLICK tokens
    #[account(seeds = [MINT_AUTHORITY_SEED], bump = pda_authority.bump)]
    pub pda_authority: Account<'info, PdaAuthority>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

/// Reward in base units for a given CURSOR balance: one whole CLICK plus
/// one base unit per CURSOR base unit held. With 9 decimals on both mints
/// that is `1 + C` whole CLICK for a balance of `C` whole CURSOR.
pub fn click_reward(cursor_balance: u64) -> Option<u64> {
    cursor_balance.checked_add(ONE_TOKEN)
}

pub fn handler(ctx: Context<MintBasedOnBalances>, _nonce: u64) -> Result<()> {
    // One read at the start of the transition; the host serializes
    // conflicting transactions, so this balance holds for the whole call.
    let cursor_balance = ctx.accounts.cursor_token_account.amount;
    let amount = click_reward(cursor_balance).ok_or(ClickError::AmountOverflow)?;

    ctx.accounts
        .click_token_mint
        .supply
        .checked_add(amount)
        .ok_or(ClickError::MintOverflow)?;

    let bump = ctx.accounts.pda_authority.bump;
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.click_token_mint.to_account_info(),
                to: ctx.accounts.click_token_account.to_account_info(),
                authority: ctx.accounts.pda_authority.to_account_info(),
            },
            &[&[MINT_AUTHORITY_SEED, &[bump]]],
        ),
        amount,
    )?;

    msg!(
        "Minted {} CLICK base units (cursor balance {})",
        amount,
        cursor_balance
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor_account_earns_one_click() {
        assert_eq!(click_reward(0), Some(ONE_TOKEN));
    }

    #[test]
    fn reward_scales_with_cursor_balance() {
        // 3 whole CURSOR -> 4 whole CLICK
        assert_eq!(click_reward(3 * ONE_TOKEN), Some(4 * ONE_TOKEN));
    }

    #[test]
    fn two_calls_with_unchanged_balance_double_the_reward() {
        let c = 7 * ONE_TOKEN;
        let first = click_reward(c).unwrap();
        let second = click_reward(c).unwrap();
        assert_eq!(first + second, 2 * c + 2 * ONE_TOKEN);
    }

    #[test]
    fn reward_overflow_is_reported() {
        assert_eq!(click_reward(u64::MAX), None);
        assert_eq!(click_reward(u64::MAX - ONE_TOKEN + 1), None);
        assert_eq!(click_reward(u64::MAX - ONE_TOKEN), Some(u64::MAX));
    }
}
