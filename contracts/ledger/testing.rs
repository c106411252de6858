//! In-memory collaborators for off-chain tests, where cross-contract calls
//! are unavailable.

use crate::collaborators::{Registry, ReserveAsset};
use crate::model::{Balance, Error, Result};
use ink::prelude::collections::BTreeMap;
use ink::primitives::AccountId;

/// Reserve asset whose payouts come from `payer_acc` (the coin contract).
#[derive(Debug, Clone)]
pub struct MockReserve {
    payer_acc: AccountId,
    holdings: BTreeMap<AccountId, Balance>,
    failing: bool,
    transfers: u32,
}

impl MockReserve {
    pub fn new(payer_acc: AccountId) -> Self {
        Self {
            payer_acc,
            holdings: BTreeMap::new(),
            failing: false,
            transfers: 0,
        }
    }

    pub fn fund(&mut self, account: AccountId, amount: Balance) {
        *self.holdings.entry(account).or_insert(0) += amount;
    }

    pub fn balance(&self, account: AccountId) -> Balance {
        self.holdings.get(&account).copied().unwrap_or(0)
    }

    /// Makes every subsequent `transfer` fail, as a reverted callee would.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn transfer_count(&self) -> u32 {
        self.transfers
    }
}

impl ReserveAsset for MockReserve {
    fn balance_of(&self, account: AccountId) -> Result<Balance> {
        Ok(self.balance(account))
    }

    fn transfer(&mut self, amount: Balance, to: AccountId) -> Result<()> {
        let payer_bal = self.balance(self.payer_acc);
        if self.failing || payer_bal < amount {
            return Err(Error::ReserveCallFailed)
        }
        self.holdings.insert(self.payer_acc, payer_bal - amount);
        self.fund(to, amount);
        self.transfers += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
    developers: BTreeMap<AccountId, AccountId>,
    failing: bool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn developer_of(&self, contract_acc: AccountId) -> Option<AccountId> {
        self.developers.get(&contract_acc).copied()
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl Registry for MockRegistry {
    fn change_developer(&mut self, contract_acc: AccountId, new_developer: AccountId) -> Result<()> {
        if self.failing {
            return Err(Error::RegistryCallFailed)
        }
        self.developers.insert(contract_acc, new_developer);
        Ok(())
    }
}
