use anchor_lang::prelude::*;

#[error_code]
pub enum ClickError {
    #[msg("Supplied bump or authority account does not match the derived mint authority")]
    AuthorityMismatch,

    #[msg("Receiving account is not the caller's associated token account")]
    AccountMismatch,

    #[msg("CLICK balance is below the cursor price")]
    InsufficientBalance,

    #[msg("Mint supply would exceed the maximum representable value")]
    MintOverflow,

    #[msg("Arithmetic overflow computing mint amount")]
    AmountOverflow,
}
