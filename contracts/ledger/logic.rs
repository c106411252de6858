use crate::collaborators::ReserveAsset;
use crate::model::{Balance, Error, Ledger, Result};
use ink::primitives::AccountId;
use ink::storage::Mapping;
use primitive_types::U256;

impl Ledger {
    /// Mints `amount` to `holder_acc`; this is the only place supply grows.
    pub fn new(holder_acc: AccountId, amount: Balance) -> Self {
        let mut balances = Mapping::default();
        balances.insert(&holder_acc, &amount);
        Self {
            supply: amount,
            balances,
            allowances: Mapping::default(),
        }
    }

    // -------- read API --------

    pub fn total_supply(&self) -> Balance {
        self.supply
    }

    pub fn balance_of(&self, account: AccountId) -> Balance {
        self.balances.get(&account).unwrap_or(0)
    }

    pub fn allowance(&self, main_acc: AccountId, spender_acc: AccountId) -> Balance {
        self.allowances.get(&(main_acc, spender_acc)).unwrap_or(0)
    }

    /// Reward `amount` tokens would fetch right now: `amount * reserve / supply`.
    ///
    /// The product is taken in 256 bits, so only a reward that itself exceeds
    /// `Balance` reports `Overflow`.
    pub fn redemption_value<R: ReserveAsset>(
        &self,
        reserve: &R,
        this_acc: AccountId,
        amount: Balance,
    ) -> Result<Balance> {
        if self.supply == 0 {
            return Err(Error::InvalidState)
        }
        let reserve_bal = reserve.balance_of(this_acc)?;
        let scaled = U256::from(amount)
            .checked_mul(U256::from(reserve_bal))
            .ok_or(Error::Overflow)?;
        let reward = scaled / U256::from(self.supply);
        Balance::try_from(reward).map_err(|_| Error::Overflow)
    }

    // -------- write API --------

    pub fn transfer(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
        ensure_positive(amount)?;
        self.move_balance(from_acc, to_acc, amount)
    }

    /// Adds `amount` on top of the existing allowance and returns the new total.
    pub fn approve(
        &mut self,
        main_acc: AccountId,
        spender_acc: AccountId,
        amount: Balance,
    ) -> Result<Balance> {
        ensure_positive(amount)?;
        let current_allow = self.allowance(main_acc, spender_acc);
        let new_allow = current_allow.checked_add(amount).ok_or(Error::Overflow)?;
        self.allowances.insert(&(main_acc, spender_acc), &new_allow);
        Ok(new_allow)
    }

    pub fn transfer_from(
        &mut self,
        spender_acc: AccountId,
        main_acc: AccountId,
        to_acc: AccountId,
        amount: Balance,
    ) -> Result<()> {
        ensure_positive(amount)?;

        let current_allow = self.allowance(main_acc, spender_acc);
        if current_allow < amount {
            return Err(Error::InsufficientAllowance {
                available: current_allow,
                requested: amount,
            })
        }

        // Precheck so a failed move never burns allowance
        let main_bal = self.balance_of(main_acc);
        if main_bal < amount {
            return Err(Error::InsufficientBalance {
                available: main_bal,
                requested: amount,
            })
        }

        self.move_balance(main_acc, to_acc, amount)?;
        self.allowances.insert(&(main_acc, spender_acc), &(current_allow - amount));
        Ok(())
    }

    /// Burns `amount` of `holder_acc`'s tokens and pays out the matching share
    /// of the reserve held by `this_acc`. Returns the reward paid.
    ///
    /// The share is taken against the supply before the burn. Nothing is
    /// written to storage until the reserve transfer has succeeded.
    pub fn redeem<R: ReserveAsset>(
        &mut self,
        reserve: &mut R,
        this_acc: AccountId,
        holder_acc: AccountId,
        amount: Balance,
    ) -> Result<Balance> {
        let holder_bal = self.balance_of(holder_acc);
        if holder_bal < amount {
            return Err(Error::InsufficientBalance {
                available: holder_bal,
                requested: amount,
            })
        }
        ensure_positive(amount)?;

        let reward = self.redemption_value(reserve, this_acc, amount)?;
        let new_supply = self.supply.checked_sub(amount).ok_or(Error::Overflow)?;

        if reward > 0 {
            reserve.transfer(reward, holder_acc)?;
        }

        self.balances.insert(&holder_acc, &(holder_bal - amount));
        self.supply = new_supply;
        Ok(reward)
    }

    // ---- internals ----

    fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
        let from_bal = self.balance_of(from_acc);
        if from_bal < amount {
            return Err(Error::InsufficientBalance {
                available: from_bal,
                requested: amount,
            })
        }
        let new_from = from_bal.checked_sub(amount).ok_or(Error::Overflow)?;
        self.balances.insert(&from_acc, &new_from);

        // read after the debit so a self-transfer nets out
        let to_bal = self.balance_of(to_acc);
        let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;
        self.balances.insert(&to_acc, &new_to);
        Ok(())
    }
}

fn ensure_positive(amount: Balance) -> Result<()> {
    if amount == 0 {
        return Err(Error::InvalidAmount)
    }
    Ok(())
}
