#![cfg_attr(not(feature = "std"), no_std)]

//! Ledger core shared by the coin contracts: supply, balances, allowances and
//! the redemption of tokens against a reserve asset held in another contract.

mod collaborators;
mod logic;
mod model;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use collaborators::{Registry, RegistryContract, ReserveAsset, ReserveContract};
pub use model::{Balance, Error, Ledger, Result, DEFAULT_SUPPLY};
