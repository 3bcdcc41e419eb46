//! Native-chain address policy.
//!
//! A native address is a two-letter chain prefix followed by ASCII
//! alphanumeric characters, with a fixed total length.

/// Chain prefix every native address starts with
pub const NATIVE_ADDRESS_PREFIX: &str = "CH";

/// Total length of a native address, prefix included
pub const NATIVE_ADDRESS_LENGTH: usize = 35;

/// Returns true if `address` satisfies the native address policy.
pub fn is_valid_native_address(address: &str) -> bool {
    address.len() == NATIVE_ADDRESS_LENGTH
        && address.starts_with(NATIVE_ADDRESS_PREFIX)
        && address[NATIVE_ADDRESS_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
}
