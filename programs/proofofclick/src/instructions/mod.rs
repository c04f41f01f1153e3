pub mod buy_cursor;
pub mod initialize_mint_v2;
pub mod mint_and_send_one_token;
pub mod mint_based_on_balances;

pub use buy_cursor::*;
pub use initialize_mint_v2::*;
pub use mint_and_send_one_token::*;
pub use mint_based_on_balances::*;
