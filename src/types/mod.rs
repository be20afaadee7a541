mod display;

pub use display::{format_mxnb, short_address};

pub type WalletAddress = String;
pub type TransactionHash = String;
pub type Amount = f64;
