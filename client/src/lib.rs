//! Off-chain client for the proofofclick program: address derivation,
//! instruction builders in the program's wire format, a caching adapter
//! over an RPC connection, and advisory fee estimation.

pub mod adapter;
pub mod fees;
pub mod instructions;
pub mod pda;

pub use adapter::ProofOfClick;
pub use fees::FeeBreakdown;
