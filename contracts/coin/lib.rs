#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
mod coin {
    use coin_ledger::{Ledger, ReserveAsset, ReserveContract, DEFAULT_SUPPLY};

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
        /// Cumulative allowance after the approval.
        amount: Balance,
    }

    #[ink(event)]
    pub struct Redeemed {
        #[ink(topic)]
        holder_acc: AccountId,
        amount: Balance,
        reward: Balance,
    }

    #[ink(storage)]
    pub struct Coin {
        ledger: Ledger,
        reserve_acc: AccountId,
    }

    impl Coin {
        /// Mints the default supply to the deployer, backed by `reserve_acc`.
        #[ink(constructor)]
        pub fn new(reserve_acc: AccountId) -> Self {
            Self::with_supply(DEFAULT_SUPPLY, reserve_acc)
        }

        #[ink(constructor)]
        pub fn with_supply(initial_amount: Balance, reserve_acc: AccountId) -> Self {
            let caller_acc = Self::env().caller();
            Self::env().emit_event(Transferred {
                from_acc: None,
                to_acc: caller_acc,
                amount: initial_amount,
            });
            Self {
                ledger: Ledger::new(caller_acc, initial_amount),
                reserve_acc,
            }
        }

        // -------- read API --------

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
        pub fn reserve_contract(&self) -> AccountId {
            self.reserve_acc
        }

        /// Reserve units `redeem(amount)` would pay out right now.
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

        /// Raises the caller's allowance for `spender_acc` by `amount` and
        /// returns the new total.
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

        /// Burns `amount` of the caller's coins for a pro-rata share of the
        /// reserve this contract holds. Returns the reserve units paid.
        #[ink(message)]
        pub fn redeem(&mut self, amount: Balance) -> Result<Balance> {
            let mut reserve = ReserveContract::new(self.reserve_acc);
            self.redeem_from(&mut reserve, amount)
        }

        // ---- internals ----

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


}
