use serde::{Deserialize, Serialize};

use crate::types::{Amount, TransactionHash, WalletAddress};

/// A single MXNB transfer as the wallet tracks it.
///
/// A record is created before the transfer reaches the ledger, so the
/// transaction hash starts out absent and is filled in by whoever learns it.
/// Nothing here is validated: addresses and hashes are opaque strings and the
/// `amount` keeps whatever sign the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Destination wallet address, stored verbatim.
    wallet_address: WalletAddress,
    /// Transfer amount in MXNB.
    amount: Amount,
    /// Ledger hash of the transfer, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transaction_hash: Option<TransactionHash>
}

impl TransactionRecord {
    /// Creates a record for a transfer that has no ledger hash yet.
    pub fn new(wallet_address: WalletAddress, amount: Amount) -> Self {
        Self {
            wallet_address,
            amount,
            transaction_hash: None
        }
    }

    /// Returns the stored wallet address verbatim.
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    /// Returns the stored amount verbatim.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the ledger hash, or `None` if it was never set.
    pub fn transaction_hash(&self) -> Option<&str> {
        self.transaction_hash.as_deref()
    }

    /// Overwrites the ledger hash unconditionally. Last write wins; the value
    /// is not inspected, so an empty string is stored as-is.
    pub fn set_transaction_hash(&mut self, hash: TransactionHash) {
        self.transaction_hash = Some(hash);
    }
}
