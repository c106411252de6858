use core::fmt;
use ink::primitives::AccountId;
use ink::storage::Mapping;

pub type Balance = <ink::env::DefaultEnvironment as ink::env::Environment>::Balance;
pub type Result<T> = core::result::Result<T, Error>;

/// Amount minted to the deployer when no explicit supply is given.
pub const DEFAULT_SUPPLY: Balance = 1_000_000;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Amount must be strictly positive.
    InvalidAmount,
    InsufficientBalance { available: Balance, requested: Balance },
    InsufficientAllowance { available: Balance, requested: Balance },
    Unauthorized,
    /// Supply is exhausted, nothing is left to redeem against.
    InvalidState,
    Overflow,
    ReserveCallFailed,
    RegistryCallFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAmount => write!(f, "invalid amount"),
            Error::InsufficientBalance { available, requested } => write!(
                f,
                "not enough coins: you have {} and are trying to spend {}",
                available, requested
            ),
            Error::InsufficientAllowance { available, requested } => write!(
                f,
                "not enough coins approved to send: you have {} and are trying to spend {}",
                available, requested
            ),
            Error::Unauthorized => write!(f, "caller is not the owner"),
            Error::InvalidState => write!(f, "supply is exhausted"),
            Error::Overflow => write!(f, "arithmetic overflow"),
            Error::ReserveCallFailed => write!(f, "reserve asset call failed"),
            Error::RegistryCallFailed => write!(f, "registry call failed"),
        }
    }
}

#[ink::storage_item]
#[derive(Debug)]
pub struct Ledger {
    pub(crate) supply: Balance,
    pub(crate) balances: Mapping<AccountId, Balance>,
    // (main_acc, spender_acc) -> amount spender may still move
    pub(crate) allowances: Mapping<(AccountId, AccountId), Balance>,
}
