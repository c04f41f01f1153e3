//! Builders for the program's instruction wire format.
//!
//! Anchor encoding: an 8-byte global discriminator
//! (`sha256("global:<name>")[..8]`) followed by the little-endian
//! Borsh-serialized arguments. Account metas appear in the exact order the
//! program's account structs declare them.

use solana_sdk::hash;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use solana_sdk::sysvar;

fn discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash::hash(preimage.as_bytes()).to_bytes()[..8]);
    out
}

/// The account set shared by the V2 instructions.
#[derive(Clone, Copy, Debug)]
pub struct MintV2Accounts {
    pub payer: Pubkey,
    pub click_token_mint: Pubkey,
    pub cursor_token_mint: Pubkey,
    pub click_token_account: Pubkey,
    pub cursor_token_account: Pubkey,
    pub pda_authority: Pubkey,
}

pub fn initialize_mint_v2(program_id: &Pubkey, accounts: &MintV2Accounts) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(accounts.click_token_mint, false),
            AccountMeta::new_readonly(accounts.cursor_token_mint, false),
            AccountMeta::new(accounts.click_token_account, false),
            AccountMeta::new(accounts.cursor_token_account, false),
            AccountMeta::new(accounts.pda_authority, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: discriminator("initialize_mint_v2").to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn mint_and_send_one_token(
    program_id: &Pubkey,
    token_to_mint: &Pubkey,
    user_minting: &Pubkey,
    user_receiving: &Pubkey,
    pda_authority: &Pubkey,
    bump: u8,
    nonce: u64,
) -> Instruction {
    let mut data = discriminator("mint_and_send_one_token").to_vec();
    data.push(bump);
    data.extend_from_slice(&nonce.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*token_to_mint, false),
            AccountMeta::new_readonly(*user_minting, true),
            AccountMeta::new(*user_receiving, false),
            AccountMeta::new_readonly(*pda_authority, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

pub fn mint_based_on_balances(
    program_id: &Pubkey,
    accounts: &MintV2Accounts,
    nonce: u64,
) -> Instruction {
    let mut data = discriminator("mint_based_on_balances").to_vec();
    data.extend_from_slice(&nonce.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(accounts.payer, true),
            AccountMeta::new(accounts.click_token_mint, false),
            AccountMeta::new_readonly(accounts.cursor_token_mint, false),
            AccountMeta::new(accounts.click_token_account, false),
            AccountMeta::new_readonly(accounts.cursor_token_account, false),
            AccountMeta::new_readonly(accounts.pda_authority, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    }
}

pub fn buy_cursor(program_id: &Pubkey, accounts: &MintV2Accounts, nonce: u64) -> Instruction {
    let mut data = discriminator("buy_cursor").to_vec();
    data.extend_from_slice(&nonce.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(accounts.payer, true),
            AccountMeta::new(accounts.click_token_mint, false),
            AccountMeta::new(accounts.cursor_token_mint, false),
            AccountMeta::new(accounts.click_token_account, false),
            AccountMeta::new(accounts.cursor_token_account, false),
            AccountMeta::new_readonly(accounts.pda_authority, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(spl_associated_token_account::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_accounts() -> MintV2Accounts {
        MintV2Accounts {
            payer: Pubkey::new_unique(),
            click_token_mint: proofofclick::CLICK_TOKEN,
            cursor_token_mint: proofofclick::CURSOR_TOKEN,
            click_token_account: Pubkey::new_unique(),
            cursor_token_account: Pubkey::new_unique(),
            pda_authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn discriminators_match_anchor_sighash() {
        // sha256("global:<name>")[..8], precomputed.
        assert_eq!(
            discriminator("initialize_mint_v2"),
            [196, 209, 64, 35, 63, 193, 155, 82]
        );
        assert_eq!(
            discriminator("mint_and_send_one_token"),
            [114, 199, 0, 151, 58, 147, 110, 68]
        );
        assert_eq!(
            discriminator("mint_based_on_balances"),
            [10, 52, 127, 249, 201, 38, 193, 70]
        );
        assert_eq!(
            discriminator("buy_cursor"),
            [189, 55, 239, 217, 252, 170, 115, 176]
        );
    }

    #[test]
    fn initialize_carries_no_args() {
        let ix = initialize_mint_v2(&proofofclick::ID, &sample_accounts());
        assert_eq!(ix.data.len(), 8);
        assert_eq!(ix.accounts.len(), 10);
        // Only the payer signs, and it is writable (pays rent).
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert!(ix.accounts[1..].iter().all(|m| !m.is_signer));
    }

    #[test]
    fn mint_one_encodes_bump_then_nonce() {
        let user = Pubkey::new_unique();
        let ata = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let ix = mint_and_send_one_token(
            &proofofclick::ID,
            &proofofclick::CLICK_TOKEN,
            &user,
            &ata,
            &authority,
            254,
            0xDEAD_BEEF,
        );
        assert_eq!(ix.data.len(), 8 + 1 + 8);
        assert_eq!(ix.data[8], 254);
        assert_eq!(ix.data[9..], 0xDEAD_BEEFu64.to_le_bytes());
        // The minting user signs; the mint and destination are writable.
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert!(ix.accounts[2].is_writable);
        assert!(!ix.accounts[3].is_writable);
    }

    #[test]
    fn balance_mint_only_touches_click_side() {
        let ix = mint_based_on_balances(&proofofclick::ID, &sample_accounts(), 7);
        assert_eq!(ix.data.len(), 8 + 8);
        assert_eq!(ix.data[8..], 7u64.to_le_bytes());
        assert!(ix.accounts[0].is_signer);
        // CLICK mint and CLICK account are written; the CURSOR side is
        // read-only input to the reward computation.
        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[3].is_writable);
        assert!(!ix.accounts[2].is_writable);
        assert!(!ix.accounts[4].is_writable);
    }

    #[test]
    fn buy_cursor_touches_both_sides() {
        let ix = buy_cursor(&proofofclick::ID, &sample_accounts(), 7);
        assert_eq!(ix.data.len(), 8 + 8);
        // Burn debits the CLICK side, mint credits the CURSOR side.
        for i in [1, 2, 3, 4] {
            assert!(ix.accounts[i].is_writable);
        }
        assert!(!ix.accounts[5].is_writable);
    }

    #[test]
    fn v2_instructions_share_the_account_set() {
        let accounts = sample_accounts();
        let a = mint_based_on_balances(&proofofclick::ID, &accounts, 1);
        let b = buy_cursor(&proofofclick::ID, &accounts, 1);
        let keys_a: Vec<_> = a.accounts.iter().map(|m| m.pubkey).collect();
        let keys_b: Vec<_> = b.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(keys_a, keys_b);
    }
}
