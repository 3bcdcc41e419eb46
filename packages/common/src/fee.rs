//! Fee payment extraction.

use cosmwasm_std::{Coin, Uint128};

/// Sum of `denom` coins attached to a call. Other denoms are ignored.
pub fn amount_paid(funds: &[Coin], denom: &str) -> Uint128 {
    funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum()
}
