use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey;

pub mod authority;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("7khCm9h5cWdU1KBiMztMvzFiXNCum1iwGUcRVFwKhoP9");

/// Seed for the PDA acting as mint authority for both tokens.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint";

/// Both mints use 9 decimals; one whole token in base units.
pub const ONE_TOKEN: u64 = 1_000_000_000;

/// BuyCursor price: 50 whole CLICK, in base units.
pub const CURSOR_PRICE: u64 = 50 * ONE_TOKEN;

/// The CLICK token mint
pub static CLICK_TOKEN: Pubkey = pubkey!("C73wX9ATj7K8K62dFqWEEG14wfupnZqUxZRTXVdEib7S");

/// The CURSOR token mint
pub static CURSOR_TOKEN: Pubkey = pubkey!("9VaYi71F955j88tCc82FAks5iJkRf7YjEyp34MiwU34o");

#[program]
pub mod proofofclick {
    use super::*;

    /// Create the caller's CLICK and CURSOR associated token accounts and
    /// the PDA authority record if they do not exist yet.
    ///
    /// Safe to call repeatedly; repeat calls succeed without effect.
    pub fn initialize_mint_v2(ctx: Context<InitializeMintV2>) -> Result<()> {
        instructions::initialize_mint_v2::handler(ctx)
    }

    /// Mint exactly one token of `token_to_mint` to the caller's associated
    /// token account (V1 surface).
    ///
    /// `bump` must match the canonical mint-authority bump; the handler
    /// recomputes the derivation rather than trusting the argument.
    /// `nonce` only disambiguates otherwise-identical transactions off-chain.
    pub fn mint_and_send_one_token(
        ctx: Context<MintAndSendOneToken>,
        bump: u8,
        nonce: u64,
    ) -> Result<()> {
        instructions::mint_and_send_one_token::handler(ctx, bump, nonce)
    }

    /// Mint CLICK equal to one token plus the caller's CURSOR balance.
    pub fn mint_based_on_balances(ctx: Context<MintBasedOnBalances>, nonce: u64) -> Result<()> {
        instructions::mint_based_on_balances::handler(ctx, nonce)
    }

    /// Trade 50 CLICK for 1 CURSOR. Both legs commit together or not at all.
    pub fn buy_cursor(ctx: Context<BuyCursor>, nonce: u64) -> Result<()> {
        instructions::buy_cursor::handler(ctx, nonce)
    }
}
