//! Helpers for deriving proofofclick program addresses.

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

/// Off-chain mirror of the on-chain mint-authority derivation.
pub fn find_mint_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    proofofclick::authority::derive_mint_authority(program_id)
}

/// The owner's CLICK associated token account.
pub fn click_token_account(owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, &proofofclick::CLICK_TOKEN)
}

/// The owner's CURSOR associated token account.
pub fn cursor_token_account(owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, &proofofclick::CURSOR_TOKEN)
}
