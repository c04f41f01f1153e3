use anchor_lang::prelude::*;

use crate::errors::ClickError;
use crate::MINT_AUTHORITY_SEED;

/// Derive the mint-authority PDA for this program.
///
/// Pure and deterministic. The bump is canonical: the derivation scans
/// downward from 255 and keeps the first value for which
/// `[b"mint", [bump]]` maps off the ed25519 curve. Handlers recompute this
/// pair instead of trusting a caller-supplied bump; it is the only proof
/// that a transaction may act as the mint authority.
pub fn derive_mint_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

/// Check a caller-supplied bump and authority account against the
/// derivation. Any difference in either value is `AuthorityMismatch`;
/// nothing else authenticates a mint on the authority's behalf.
pub fn verify_authority(
    program_id: &Pubkey,
    bump: u8,
    supplied_authority: &Pubkey,
) -> Result<()> {
    let (expected_authority, expected_bump) = derive_mint_authority(program_id);
    require!(bump == expected_bump, ClickError::AuthorityMismatch);
    require_keys_eq!(
        *supplied_authority,
        expected_authority,
        ClickError::AuthorityMismatch
    );
    Ok(())
}
