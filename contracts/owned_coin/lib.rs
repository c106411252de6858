#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// Coin with a single owner who may hand over ownership and reassign the
/// developer of deployed contracts in the developer registry.
#[ink::contract]
mod owned_coin {
    use coin_ledger::{
        Ledger, Registry, RegistryContract, ReserveAsset, ReserveContract, DEFAULT_SUPPLY,
    };

    pub use coin_ledger::{Error, Result};

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: Option<AccountId>,
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Redeemed {
        #[ink(topic)]
        holder_acc: AccountId,
        amount: Balance,
        reward: Balance,
    }

    #[ink(event)]
    pub struct OwnershipChanged {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(event)]
    pub struct DeveloperChanged {
        #[ink(topic)]
        contract_acc: AccountId,
        #[ink(topic)]
        new_developer: AccountId,
    }

    #[ink(storage)]
    pub struct OwnedCoin {
        // governance
        owner_acc: AccountId,
        registry_acc: AccountId,

        // token state
        ledger: Ledger,
        reserve_acc: AccountId,
    }

    impl OwnedCoin {
        // -------- constructors --------

        #[ink(constructor)]
        pub fn new(reserve_acc: AccountId, registry_acc: AccountId) -> Self {
            Self::with_supply(DEFAULT_SUPPLY, reserve_acc, registry_acc)
        }

        #[ink(constructor)]
        pub fn with_supply(
            initial_amount: Balance,
            reserve_acc: AccountId,
            registry_acc: AccountId,
        ) -> Self {
            let caller_acc = Self::env().caller();
            Self::env().emit_event(Transferred {
                from_acc: None,
                to_acc: caller_acc,
                amount: initial_amount,
            });
            Self {
                owner_acc: caller_acc,
                registry_acc,
                ledger: Ledger::new(caller_acc, initial_amount),
                reserve_acc,
            }
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::Unauthorized)
            }
            Ok(())
        }

        // -------- admin --------

        #[ink(message)]
        pub fn change_ownership(&mut self, new_owner: AccountId) -> Result<()> {
            self.only_owner()?;
            let previous_owner = self.owner_acc;
            self.owner_acc = new_owner;
            self.env().emit_event(OwnershipChanged {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        /// Points the registry's developer entry for `contract_acc` at
        /// `new_developer`.
        #[ink(message)]
        pub fn change_developer(
            &mut self,
            contract_acc: AccountId,
            new_developer: AccountId,
        ) -> Result<()> {
            let mut registry = RegistryContract::new(self.registry_acc);
            self.change_developer_via(&mut registry, contract_acc, new_developer)
        }

        // -------- read API --------

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn registry_contract(&self) -> AccountId {
            self.registry_acc
        }

        #[ink(message)]
        pub fn reserve_contract(&self) -> AccountId {
            self.reserve_acc
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.ledger.total_supply()
        }

        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> Balance {
            self.ledger.balance_of(account)
        }

        #[ink(message)]
        pub fn allowance(&self, main_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.ledger.allowance(main_acc, spender_acc)
        }

        #[ink(message)]
        pub fn redemption_value(&self, amount: Balance) -> Result<Balance> {
            let reserve = ReserveContract::new(self.reserve_acc);
            self.ledger
                .redemption_value(&reserve, self.env().account_id(), amount)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, amount: Balance, to_acc: AccountId) -> Result<()> {
            let from_acc = self.env().caller();
            self.ledger.transfer(from_acc, to_acc, amount)?;
            self.env().emit_event(Transferred {
                from_acc: Some(from_acc),
                to_acc,
                amount,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn approve(&mut self, amount: Balance, spender_acc: AccountId) -> Result<Balance> {
            let owner_acc = self.env().caller();
            let new_allow = self.ledger.approve(owner_acc, spender_acc, amount)?;
            self.env().emit_event(Approved {
                owner_acc,
                spender_acc,
                amount: new_allow,
            });
            Ok(new_allow)
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            amount: Balance,
            to_acc: AccountId,
            main_acc: AccountId,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            self.ledger
                .transfer_from(spender_acc, main_acc, to_acc, amount)?;
            self.env().emit_event(Transferred {
                from_acc: Some(main_acc),
                to_acc,
                amount,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn redeem(&mut self, amount: Balance) -> Result<Balance> {
            let mut reserve = ReserveContract::new(self.reserve_acc);
            self.redeem_from(&mut reserve, amount)
        }

        // ---- internals ----

        fn change_developer_via<G: Registry>(
            &mut self,
            registry: &mut G,
            contract_acc: AccountId,
            new_developer: AccountId,
        ) -> Result<()> {
            self.only_owner()?;
            registry.change_developer(contract_acc, new_developer)?;
            self.env().emit_event(DeveloperChanged {
                contract_acc,
                new_developer,
            });
            Ok(())
        }

        fn redeem_from<R: ReserveAsset>(&mut self, reserve: &mut R, amount: Balance) -> Result<Balance> {
            let holder_acc = self.env().caller();
            let this_acc = self.env().account_id();
            let reward = self.ledger.redeem(reserve, this_acc, holder_acc, amount)?;
            self.env().emit_event(Redeemed {
                holder_acc,
                amount,
                reward,
            });
            Ok(reward)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use coin_ledger::testing::{MockRegistry, MockReserve};
        use ink::env::{test, DefaultEnvironment};

        type Env = DefaultEnvironment;

        fn accounts() -> test::DefaultAccounts<Env> {
            test::default_accounts::<Env>()
        }

        fn set_caller(acc: AccountId) {
            test::set_caller::<Env>(acc);
        }

        fn contract_acc() -> AccountId {
            AccountId::from([0x42; 32])
        }

        fn reserve_acc() -> AccountId {
            AccountId::from([0x24; 32])
        }

        fn registry_acc() -> AccountId {
            AccountId::from([0x77; 32])
        }

        fn deploy() -> OwnedCoin {
            test::set_callee::<Env>(contract_acc());
            set_caller(accounts().alice);
            OwnedCoin::new(reserve_acc(), registry_acc())
        }

        // -------- construction --------

        #[ink::test]
        fn constructor_sets_owner_and_supply() {
            let coin = deploy();
            let accs = accounts();
            assert_eq!(coin.owner(), accs.alice);
            assert_eq!(coin.balance_of(accs.alice), 1_000_000);
            assert_eq!(coin.total_supply(), 1_000_000);
            assert_eq!(coin.reserve_contract(), reserve_acc());
            assert_eq!(coin.registry_contract(), registry_acc());
        }

        // -------- ownership --------

        #[ink::test]
        fn owner_can_change_ownership() {
            let mut coin = deploy();
            let accs = accounts();
            assert_eq!(coin.change_ownership(accs.bob), Ok(()));
            assert_eq!(coin.owner(), accs.bob);

            // the previous owner lost its rights
            assert_eq!(coin.change_ownership(accs.alice), Err(Error::Unauthorized));
            set_caller(accs.bob);
            assert_eq!(coin.change_ownership(accs.charlie), Ok(()));
            assert_eq!(coin.owner(), accs.charlie);
        }

        #[ink::test]
        fn stranger_cannot_change_ownership() {
            let mut coin = deploy();
            let accs = accounts();
            set_caller(accs.eve);
            assert_eq!(coin.change_ownership(accs.eve), Err(Error::Unauthorized));
            assert_eq!(coin.owner(), accs.alice);
            assert_eq!(test::recorded_events().count(), 1);
        }

        // -------- developer registry --------

        #[ink::test]
        fn owner_changes_developer_in_registry() {
            let mut coin = deploy();
            let accs = accounts();
            let mut registry = MockRegistry::new();
            let target_acc = AccountId::from([0x99; 32]);

            assert_eq!(
                coin.change_developer_via(&mut registry, target_acc, accs.django),
                Ok(())
            );
            assert_eq!(registry.developer_of(target_acc), Some(accs.django));
        }

        #[ink::test]
        fn stranger_cannot_change_developer() {
            let mut coin = deploy();
            let accs = accounts();
            set_caller(accs.eve);
            assert_eq!(
                coin.change_developer(AccountId::from([0x99; 32]), accs.eve),
                Err(Error::Unauthorized)
            );
        }

        #[ink::test]
        fn developer_change_follows_ownership() {
            let mut coin = deploy();
            let accs = accounts();
            let mut registry = MockRegistry::new();
            let target_acc = AccountId::from([0x99; 32]);
            coin.change_ownership(accs.bob).unwrap();

            assert_eq!(
                coin.change_developer_via(&mut registry, target_acc, accs.alice),
                Err(Error::Unauthorized)
            );
            assert_eq!(registry.developer_of(target_acc), None);

            set_caller(accs.bob);
            assert_eq!(
                coin.change_developer_via(&mut registry, target_acc, accs.charlie),
                Ok(())
            );
            assert_eq!(registry.developer_of(target_acc), Some(accs.charlie));
            // mint, ownership change, developer change
            assert_eq!(test::recorded_events().count(), 3);
        }

        #[ink::test]
        fn registry_failure_is_reported() {
            let mut coin = deploy();
            let mut registry = MockRegistry::new();
            registry.set_failing(true);
            let target_acc = AccountId::from([0x99; 32]);

            assert_eq!(
                coin.change_developer_via(&mut registry, target_acc, accounts().bob),
                Err(Error::RegistryCallFailed)
            );
            assert_eq!(registry.developer_of(target_acc), None);
        }

        // -------- ledger --------

        #[ink::test]
        fn transfer_and_balance_of() {
            let mut coin = deploy();
            let accs = accounts();
            assert_eq!(coin.transfer(123, accs.bob), Ok(()));
            assert_eq!(coin.balance_of(accs.bob), 123);
            assert_eq!(coin.balance_of(accs.alice), 999_877);
        }

        #[ink::test]
        fn non_positive_amounts_are_rejected() {
            let mut coin = deploy();
            let accs = accounts();
            assert_eq!(coin.transfer(0, accs.bob), Err(Error::InvalidAmount));
            assert_eq!(coin.approve(0, accs.bob), Err(Error::InvalidAmount));
            assert_eq!(
                coin.transfer_from(0, accs.charlie, accs.alice),
                Err(Error::InvalidAmount)
            );
        }

        #[ink::test]
        fn delegated_transfer_flow() {
            let mut coin = deploy();
            let accs = accounts();
            assert_eq!(coin.approve(50, accs.bob), Ok(50));
            assert_eq!(coin.approve(50, accs.bob), Ok(100));

            set_caller(accs.bob);
            assert_eq!(coin.transfer_from(60, accs.charlie, accs.alice), Ok(()));
            assert_eq!(
                coin.transfer_from(60, accs.charlie, accs.alice),
                Err(Error::InsufficientAllowance {
                    available: 40,
                    requested: 60
                })
            );
            assert_eq!(coin.allowance(accs.alice, accs.bob), 40);
            assert_eq!(coin.balance_of(accs.charlie), 60);
        }

        #[ink::test]
        fn redeem_pays_share_of_reserve() {
            let mut coin = deploy();
            let accs = accounts();
            let mut reserve = MockReserve::new(contract_acc());
            reserve.fund(contract_acc(), 10_000);

            coin.transfer(10_000, accs.bob).unwrap();
            set_caller(accs.bob);
            assert_eq!(coin.redeem_from(&mut reserve, 10_000), Ok(100));
            assert_eq!(reserve.balance(accs.bob), 100);
            assert_eq!(coin.total_supply(), 990_000);
            assert_eq!(
                coin.balance_of(accs.alice) + coin.balance_of(accs.bob),
                coin.total_supply()
            );
        }
    }

}
