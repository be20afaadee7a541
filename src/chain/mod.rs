#[cfg(test)]
mod tests;

/// Reference data for the ledger a token lives on. Holds connection and
/// explorer endpoints only; no network calls are made from this crate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: &'static str,
    pub currency: &'static str,
    pub rpc_url: &'static str,
    pub block_explorer: &'static str
}

/// MXNB is deployed on Arbitrum One.
pub const ARBITRUM: ChainConfig = ChainConfig {
    chain_id: 42161,
    name: "Arbitrum One",
    currency: "ETH",
    rpc_url: "https://arb1.arbitrum.io/rpc",
    block_explorer: "https://arbiscan.io"
};

/// On-chain decimal places of the MXNB token contract.
pub const MXNB_DECIMALS: u32 = 6;

impl ChainConfig {
    /// Block-explorer page for a transaction hash.
    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.block_explorer, hash)
    }

    /// Block-explorer page for a wallet address.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.block_explorer, address)
    }
}
