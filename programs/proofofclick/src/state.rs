use anchor_lang::prelude::*;

/// Mint authority record.
///
/// The address derived from seeds `[b"mint"]` is the authorized minting
/// authority for both the CLICK and CURSOR mints. No private key exists for
/// it; handlers sign on its behalf with the seed plus the stored bump. The
/// account carries no other state and is never mutated after creation.
#[account]
#[derive(InitSpace)]
pub struct PdaAuthority {
    pub bump: u8,
}
