//! Advisory fee estimation.
//!
//! Synthesizes unsigned probe messages for the click, create-token-account,
//! and delete-token-account paths and asks the RPC for a quote per message.
//! Nothing here mutates state, and a quote can go stale between estimation
//! and submission; callers re-estimate and retry.

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::instructions;

/// Fee quote in lamports for each client-visible path. Does not include
/// rent exemption for created accounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub click_fee: u64,
    pub create_token_account_fee: u64,
    pub delete_token_account_fee: u64,
}

/// Probe message for one `mint_and_send_one_token` call. The nonce is a
/// fixed placeholder; it does not change the fee.
#[allow(clippy::too_many_arguments)]
pub fn click_fee_message(
    program_id: &Pubkey,
    click_token_mint: &Pubkey,
    pda_authority: &Pubkey,
    bump: u8,
    payer: &Pubkey,
    user_receiving: &Pubkey,
    blockhash: &Hash,
) -> Message {
    let ix = instructions::mint_and_send_one_token(
        program_id,
        click_token_mint,
        payer,
        user_receiving,
        pda_authority,
        bump,
        1,
    );
    Message::new_with_blockhash(&[ix], Some(payer), blockhash)
}

/// Probe message for creating one associated token account.
pub fn create_token_account_fee_message(
    click_token_mint: &Pubkey,
    payer: &Pubkey,
    blockhash: &Hash,
) -> Message {
    let ix = create_associated_token_account(payer, payer, click_token_mint, &spl_token::id());
    Message::new_with_blockhash(&[ix], Some(payer), blockhash)
}

/// Probe messages for draining a token account: transfer the last unit out,
/// then close the account. The destination is a throwaway address; only the
/// message shape matters for the quote.
pub fn delete_token_account_fee_messages(
    payer: &Pubkey,
    token_account: &Pubkey,
    blockhash: &Hash,
) -> anyhow::Result<[Message; 2]> {
    let destination = Pubkey::new_unique();
    let transfer_ix = spl_token::instruction::transfer(
        &spl_token::id(),
        token_account,
        &destination,
        payer,
        &[],
        1,
    )
    .context("Failed to build transfer probe")?;
    let close_ix =
        spl_token::instruction::close_account(&spl_token::id(), token_account, payer, payer, &[])
            .context("Failed to build close-account probe")?;

    Ok([
        Message::new_with_blockhash(&[transfer_ix], Some(payer), blockhash),
        Message::new_with_blockhash(&[close_ix], Some(payer), blockhash),
    ])
}

/// Quote all three paths against one blockhash.
#[allow(clippy::too_many_arguments)]
pub fn estimate_fees(
    rpc: &RpcClient,
    program_id: &Pubkey,
    click_token_mint: &Pubkey,
    pda_authority: &Pubkey,
    bump: u8,
    payer: &Pubkey,
    user_receiving: &Pubkey,
    blockhash: &Hash,
) -> anyhow::Result<FeeBreakdown> {
    let click = click_fee_message(
        program_id,
        click_token_mint,
        pda_authority,
        bump,
        payer,
        user_receiving,
        blockhash,
    );
    let create = create_token_account_fee_message(click_token_mint, payer, blockhash);
    let [transfer, close] = delete_token_account_fee_messages(payer, user_receiving, blockhash)?;

    let click_fee = rpc
        .get_fee_for_message(&click)
        .context("Failed to quote click fee")?;
    let create_token_account_fee = rpc
        .get_fee_for_message(&create)
        .context("Failed to quote create-account fee")?;
    let delete_token_account_fee = rpc
        .get_fee_for_message(&transfer)
        .context("Failed to quote transfer fee")?
        + rpc
            .get_fee_for_message(&close)
            .context("Failed to quote close-account fee")?;

    Ok(FeeBreakdown {
        click_fee,
        create_token_account_fee,
        delete_token_account_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_probe_is_paid_by_the_user() {
        let payer = Pubkey::new_unique();
        let receiving = Pubkey::new_unique();
        let (authority, bump) =
            proofofclick::authority::derive_mint_authority(&proofofclick::ID);
        let msg = click_fee_message(
            &proofofclick::ID,
            &proofofclick::CLICK_TOKEN,
            &authority,
            bump,
            &payer,
            &receiving,
            &Hash::default(),
        );
        assert_eq!(msg.account_keys[0], payer);
        assert!(msg.account_keys.contains(&proofofclick::ID));
        assert_eq!(msg.instructions.len(), 1);
    }

    #[test]
    fn delete_probe_is_two_messages() {
        let payer = Pubkey::new_unique();
        let token_account = Pubkey::new_unique();
        let [transfer, close] =
            delete_token_account_fee_messages(&payer, &token_account, &Hash::default()).unwrap();
        for msg in [&transfer, &close] {
            assert_eq!(msg.account_keys[0], payer);
            assert!(msg.account_keys.contains(&spl_token::id()));
        }
    }

    #[test]
    fn create_probe_targets_the_associated_token_program() {
        let payer = Pubkey::new_unique();
        let msg = create_token_account_fee_message(
            &proofofclick::CLICK_TOKEN,
            &payer,
            &Hash::default(),
        );
        assert!(msg
            .account_keys
            .contains(&spl_associated_token_account::id()));
    }
}
