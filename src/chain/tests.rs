use super::{ARBITRUM, MXNB_DECIMALS};

#[test]
fn test_arbitrum_reference_data_matches_deployment() {
    assert_eq!(ARBITRUM.chain_id, 42161);
    assert_eq!(ARBITRUM.name, "Arbitrum One");
    assert_eq!(ARBITRUM.currency, "ETH");
    assert_eq!(ARBITRUM.block_explorer, "https://arbiscan.io");
    assert_eq!(MXNB_DECIMALS, 6);
}

#[test]
fn test_explorer_urls_point_at_arbiscan() {
    assert_eq!(
        ARBITRUM.transaction_url("0xHASHVALUE"),
        "https://arbiscan.io/tx/0xHASHVALUE"
    );
    assert_eq!(
        ARBITRUM.address_url("0xABC123"),
        "https://arbiscan.io/address/0xABC123"
    );
}
