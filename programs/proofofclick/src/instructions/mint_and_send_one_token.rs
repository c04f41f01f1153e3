use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::authority::verify_authority;
use crate::errors::*;
use crate::{MINT_AUTHORITY_SEED, ONE_TOKEN};

#[derive(Accounts)]
pub struct MintAndSendOneToken<'info> {
    /// The token to mint. The PDA authority must be its mint authority.
    #[account(mut)]
    pub token_to_mint: Account<'info, Mint>,

    /// The user minting; pays for the transaction.
    pub user_minting: Signer<'info>,

    /// Destination for the minted token. Must be the caller's associated
    /// token account for `token_to_mint`; the handler recomputes the
    /// address instead of trusting the supplied one.
    #[account(
        mut,
        constraint = user_receiving.mint == token_to_mint.key() @ ClickError::AccountMismatch,
        constraint = user_receiving.owner == user_minting.key() @ ClickError::AccountMismatch,
    )]
    pub user_receiving: Account<'info, TokenAccount>,

    /// Mint authority PDA, seed "mint"
    /// CHECK: verified against the derivation in the handler; only used as
    /// a signing PDA
    pub pda_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// Mint exactly one whole token to the caller's associated token account.
///
/// The caller-supplied `bump` is checked against an independent derivation
/// from the program id; a match is the only proof the transaction may act
/// as the mint authority.
pub fn handler(ctx: Context<MintAndSendOneToken>, bump: u8, _nonce: u64) -> Result<()> {
    verify_authority(ctx.program_id, bump, &ctx.accounts.pda_authority.key())?;

    let expected_receiving = get_associated_token_address(
        &ctx.accounts.user_minting.key(),
        &ctx.accounts.token_to_mint.key(),
    );
    require_keys_eq!(
        ctx.accounts.user_receiving.key(),
        expected_receiving,
        ClickError::AccountMismatch
    );

    ctx.accounts
        .token_to_mint
        .supply
        .checked_add(ONE_TOKEN)
        .ok_or(ClickError::MintOverflow)?;

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_to_mint.to_account_info(),
                to: ctx.accounts.user_receiving.to_account_info(),
                authority: ctx.accounts.pda_authority.to_account_info(),
            },
            &[&[MINT_AUTHORITY_SEED, &[bump]]],
        ),
        ONE_TOKEN,
    )?;

    msg!("Minted 1 token to {}", ctx.accounts.user_receiving.key());

    Ok(())
}
