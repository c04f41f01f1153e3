//! A caching handle over the RPC connection.
//!
//! Derived addresses are constant per user, so the adapter memoizes the V2
//! account set in a keyed map with no eviction; every other derivation reads
//! through it. The signer is an explicit parameter on every call; nothing
//! here holds ambient signing state.

use std::collections::{HashMap, HashSet};

use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::fees::{self, FeeBreakdown};
use crate::instructions::{self, MintV2Accounts};
use crate::pda;

/// Token balances for one owner, in base units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    pub click: u64,
    pub cursor: u64,
}

pub struct ProofOfClick {
    rpc: RpcClient,
    program_id: Pubkey,
    pda_authority: Pubkey,
    bump: u8,

    // Memoized derived addresses, one entry per locally-known account.
    mint_v2_accounts: HashMap<Pubkey, MintV2Accounts>,
    // Accounts we have already initialized during this run.
    has_initialized: HashSet<Pubkey>,
}

impl ProofOfClick {
    /// Build a handle for the program deployed at `program_id`. The mints
    /// are the program's published constants; the authority pair is
    /// re-derived locally rather than taken on trust.
    pub fn new(rpc: RpcClient, program_id: Pubkey) -> Self {
        let (pda_authority, bump) = pda::find_mint_authority(&program_id);
        ProofOfClick {
            rpc,
            program_id,
            pda_authority,
            bump,
            mint_v2_accounts: HashMap::new(),
            has_initialized: HashSet::new(),
        }
    }

    /// Handle for the program at its declared id.
    pub fn with_defaults(rpc: RpcClient) -> Self {
        Self::new(rpc, proofofclick::ID)
    }

    pub fn pda_authority(&self) -> (Pubkey, u8) {
        (self.pda_authority, self.bump)
    }

    /// The user's CLICK associated token account. Reads through the V2
    /// account cache so one map owns every derivation.
    pub fn user_token_account(&mut self, user: &Pubkey) -> Pubkey {
        self.mint_v2_accounts(user).click_token_account
    }

    /// The shared V2 account set for a user (memoized).
    pub fn mint_v2_accounts(&mut self, user: &Pubkey) -> MintV2Accounts {
        if let Some(accounts) = self.mint_v2_accounts.get(user) {
            return *accounts;
        }
        let accounts = MintV2Accounts {
            payer: *user,
            click_token_mint: proofofclick::CLICK_TOKEN,
            cursor_token_mint: proofofclick::CURSOR_TOKEN,
            click_token_account: pda::click_token_account(user),
            cursor_token_account: pda::cursor_token_account(user),
            pda_authority: self.pda_authority,
        };
        self.mint_v2_accounts.insert(*user, accounts);
        accounts
    }

    /// Ensure the user's token accounts exist. Skips the RPC round-trip on
    /// repeat calls within this run; the on-chain instruction is idempotent
    /// either way.
    pub fn initialize_mint_v2(&mut self, user: &Keypair) -> anyhow::Result<Option<Signature>> {
        if self.has_initialized.contains(&user.pubkey()) {
            return Ok(None);
        }

        let accounts = self.mint_v2_accounts(&user.pubkey());
        let ix = instructions::initialize_mint_v2(&self.program_id, &accounts);
        let signature = self
            .send(user, ix)
            .context("Failed to initialize token accounts")?;

        self.has_initialized.insert(user.pubkey());
        Ok(Some(signature))
    }

    /// V1 surface: mint one CLICK to the user's associated token account.
    pub fn mint_and_send_one(&mut self, user: &Keypair, nonce: u64) -> anyhow::Result<Signature> {
        let user_receiving = self.user_token_account(&user.pubkey());
        let ix = instructions::mint_and_send_one_token(
            &self.program_id,
            &proofofclick::CLICK_TOKEN,
            &user.pubkey(),
            &user_receiving,
            &self.pda_authority,
            self.bump,
            nonce,
        );
        self.send(user, ix).context("Failed to mint one CLICK")
    }

    /// Mint CLICK based on the user's CURSOR balance, initializing first if
    /// this run has not done so yet.
    pub fn mint_based_on_balances(
        &mut self,
        user: &Keypair,
        nonce: u64,
    ) -> anyhow::Result<Signature> {
        self.initialize_mint_v2(user)?;
        let accounts = self.mint_v2_accounts(&user.pubkey());
        let ix = instructions::mint_based_on_balances(&self.program_id, &accounts, nonce);
        self.send(user, ix)
            .context("Failed to mint based on balances")
    }

    /// Burn 50 CLICK and mint 1 CURSOR.
    pub fn buy_cursor(&mut self, user: &Keypair, nonce: u64) -> anyhow::Result<Signature> {
        self.initialize_mint_v2(user)?;
        let accounts = self.mint_v2_accounts(&user.pubkey());
        let ix = instructions::buy_cursor(&self.program_id, &accounts, nonce);
        self.send(user, ix).context("Failed to buy cursor")
    }

    /// Current CLICK and CURSOR balances for a user, in base units.
    pub fn balances(&mut self, user: &Pubkey) -> anyhow::Result<Balances> {
        let accounts = self.mint_v2_accounts(user);
        Ok(Balances {
            click: self.token_balance(&accounts.click_token_account)?,
            cursor: self.token_balance(&accounts.cursor_token_account)?,
        })
    }

    /// Advisory fee quote for the click / create-account / delete-account
    /// paths. Quotes go stale; callers re-estimate before submitting.
    pub fn get_fees(&mut self, user: &Pubkey) -> anyhow::Result<FeeBreakdown> {
        let user_receiving = self.user_token_account(user);
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("Failed to fetch blockhash for fee estimation")?;
        fees::estimate_fees(
            &self.rpc,
            &self.program_id,
            &proofofclick::CLICK_TOKEN,
            &self.pda_authority,
            self.bump,
            user,
            &user_receiving,
            &blockhash,
        )
    }

    fn token_balance(&self, token_account: &Pubkey) -> anyhow::Result<u64> {
        let balance = self
            .rpc
            .get_token_account_balance(token_account)
            .with_context(|| format!("Failed to fetch balance of {token_account}"))?;
        balance
            .amount
            .parse()
            .context("Token balance was not a u64")
    }

    fn send(&self, payer: &Keypair, ix: Instruction) -> anyhow::Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("Failed to fetch a recent blockhash")?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        self.rpc
            .send_and_confirm_transaction(&tx)
            .context("Transaction was not confirmed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_adapter() -> ProofOfClick {
        // The RPC client connects lazily; no request is made here.
        ProofOfClick::with_defaults(RpcClient::new("http://localhost:8899".to_string()))
    }

    #[test]
    fn one_cache_owns_the_click_derivation() {
        let mut adapter = test_adapter();
        let user = Pubkey::new_unique();
        let ata = adapter.user_token_account(&user);
        assert_eq!(ata, adapter.mint_v2_accounts(&user).click_token_account);
        assert_eq!(ata, pda::click_token_account(&user));
    }

    #[test]
    fn account_set_uses_the_published_addresses() {
        let mut adapter = test_adapter();
        let user = Pubkey::new_unique();
        let accounts = adapter.mint_v2_accounts(&user);
        assert_eq!(accounts.click_token_mint, proofofclick::CLICK_TOKEN);
        assert_eq!(accounts.cursor_token_mint, proofofclick::CURSOR_TOKEN);
        assert_eq!(accounts.cursor_token_account, pda::cursor_token_account(&user));
        assert_eq!(accounts.pda_authority, adapter.pda_authority().0);
    }

    #[test]
    fn account_sets_are_per_user() {
        let mut adapter = test_adapter();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let set_a = adapter.mint_v2_accounts(&a);
        let set_b = adapter.mint_v2_accounts(&b);
        assert_ne!(set_a.click_token_account, set_b.click_token_account);
        assert_eq!(set_a.pda_authority, set_b.pda_authority);
    }
}
