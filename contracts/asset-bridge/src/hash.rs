//! Transaction id derivation for outgoing transfers
//!
//! # Byte Layout (76 bytes total)
//! - Bytes 0-31:  keccak256(chain id)
//! - Bytes 32-39: block height (u64, big-endian)
//! - Bytes 40-43: transaction index (u32, big-endian)
//! - Bytes 44-75: outgoing nonce (uint256, big-endian, left-padded)

use cosmwasm_std::Env;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Id of an outgoing transfer, unique per chain, block, transaction and nonce.
pub fn compute_tx_id(chain_id: &str, height: u64, tx_index: u32, nonce: u64) -> [u8; 32] {
    let mut data = [0u8; 76];
    data[0..32].copy_from_slice(&keccak256(chain_id.as_bytes()));
    data[32..40].copy_from_slice(&height.to_be_bytes());
    data[40..44].copy_from_slice(&tx_index.to_be_bytes());
    data[44 + 24..76].copy_from_slice(&nonce.to_be_bytes());
    keccak256(&data)
}

/// Tx id of the outgoing transfer executing in `env`, as 0x-prefixed hex.
pub fn tx_id_for(env: &Env, nonce: u64) -> String {
    let tx_index = env.transaction.as_ref().map(|tx| tx.index).unwrap_or(0);
    bytes32_to_hex(&compute_tx_id(
        &env.block.chain_id,
        env.block.height,
        tx_index,
        nonce,
    ))
}

/// Convert 32-byte hash to hex string (for attributes/storage keys)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_env;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_tx_id_depends_on_every_input() {
        let base = compute_tx_id("localnet", 100, 0, 0);
        assert_ne!(base, compute_tx_id("othernet", 100, 0, 0));
        assert_ne!(base, compute_tx_id("localnet", 101, 0, 0));
        assert_ne!(base, compute_tx_id("localnet", 100, 1, 0));
        assert_ne!(base, compute_tx_id("localnet", 100, 0, 1));
        assert_eq!(base, compute_tx_id("localnet", 100, 0, 0));
    }

    #[test]
    fn test_tx_id_for_env() {
        let env = mock_env();
        let id = tx_id_for(&env, 7);
        assert_eq!(id.len(), 66);
        assert!(id.starts_with("0x"));
        assert_ne!(id, tx_id_for(&env, 8));
    }
}
