use crate::model::{Balance, Error, Result};
use ink::env::call::{build_call, ExecutionInput, Selector};
use ink::env::DefaultEnvironment;
use ink::primitives::AccountId;

/// Fungible asset backing redemptions. Calls are made on behalf of the coin
/// contract, so `transfer` pays out of the coin contract's own holdings.
pub trait ReserveAsset {
    fn balance_of(&self, account: AccountId) -> Result<Balance>;
    fn transfer(&mut self, amount: Balance, to: AccountId) -> Result<()>;
}

/// Registry that tracks the developer (revenue-share beneficiary) of deployed
/// contracts.
pub trait Registry {
    fn change_developer(&mut self, contract_acc: AccountId, new_developer: AccountId) -> Result<()>;
}

/// Reserve asset living in another deployed contract that exposes coin-shaped
/// `balance_of(account)` and `transfer(amount, to)` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveContract {
    contract_acc: AccountId,
}

impl ReserveContract {
    pub fn new(contract_acc: AccountId) -> Self {
        Self { contract_acc }
    }

    pub fn account_id(&self) -> AccountId {
        self.contract_acc
    }
}

impl ReserveAsset for ReserveContract {
    fn balance_of(&self, account: AccountId) -> Result<Balance> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.contract_acc)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("balance_of")))
                    .push_arg(account),
            )
            .returns::<Balance>()
            .try_invoke();

        match result {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(Error::ReserveCallFailed),
        }
    }

    fn transfer(&mut self, amount: Balance, to: AccountId) -> Result<()> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.contract_acc)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("transfer")))
                    .push_arg(amount)
                    .push_arg(to),
            )
            .returns::<Result<()>>()
            .try_invoke();

        match result {
            Ok(Ok(Ok(()))) => Ok(()),
            _ => Err(Error::ReserveCallFailed),
        }
    }
}

/// Registry reached through its `change_developer(contract, new_developer)`
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryContract {
    contract_acc: AccountId,
}

impl RegistryContract {
    pub fn new(contract_acc: AccountId) -> Self {
        Self { contract_acc }
    }

    pub fn account_id(&self) -> AccountId {
        self.contract_acc
    }
}

impl Registry for RegistryContract {
    fn change_developer(&mut self, contract_acc: AccountId, new_developer: AccountId) -> Result<()> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.contract_acc)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("change_developer")))
                    .push_arg(contract_acc)
                    .push_arg(new_developer),
            )
            .returns::<Result<()>>()
            .try_invoke();

        match result {
            Ok(Ok(Ok(()))) => Ok(()),
            _ => Err(Error::RegistryCallFailed),
        }
    }
}
