use crate::types::Amount;

const FALLBACK_FRACTION: &str = "00";
const ADDRESS_PREFIX_LENGTH: usize = 8;

/// Renders an MXNB amount the way the wallet displays it: peso sign,
/// thousands separators, exactly two fraction digits.
///
/// The input is not validated; non-finite values fall back to their plain
/// numeric rendering behind the peso sign.
pub fn format_mxnb(amount: Amount) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = format!("{:.2}", amount.abs());
    let (integer, fraction) = rounded.split_once('.')
        .unwrap_or((rounded.as_str(), FALLBACK_FRACTION));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction}")
}

/// Shortens a wallet address for display: the first eight characters followed
/// by an ellipsis. Addresses at or under that length pass through unchanged.
pub fn short_address(address: &str) -> String {
    if address.chars().count() <= ADDRESS_PREFIX_LENGTH {
        return address.to_string();
    }

    let prefix: String = address.chars().take(ADDRESS_PREFIX_LENGTH).collect();

    format!("{prefix}...")
}
