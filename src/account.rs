use std::fmt::Display;
use std::str::FromStr;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::error::BankError;

pub type Amount = Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    /// Menu order. The position of a variant is its menu index.
    pub const ALL: [AccountType; 2] = [AccountType::Checking, AccountType::Savings];

    pub fn name(self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }

    pub fn from_index(index: usize) -> Option<AccountType> {
        Self::ALL.get(index).copied()
    }

    /// Case-insensitive lookup that yields `None` for unknown names.
    pub fn lookup(name: &str) -> Option<AccountType> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AccountType {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::lookup(s).ok_or_else(|| {
            BankError::invalid_argument(format!("{} is not a valid account type", s))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: Amount,
    account_type: AccountType,
}

impl Account {
    pub fn new(account_type: AccountType) -> Account {
        Account {
            balance: Decimal::ZERO,
            account_type,
        }
    }

    pub fn with_balance(account_type: AccountType, initial: Amount) -> Result<Account, BankError> {
        if initial < Decimal::ZERO {
            return Err(BankError::invalid_argument(format!(
                "Initial balance cannot be negative (got {})",
                initial
            )));
        }
        Ok(Account {
            balance: initial,
            account_type,
        })
    }

    pub fn from_type_name(name: &str, initial: Amount) -> Result<Account, BankError> {
        let account_type = name.parse::<AccountType>()?;
        Account::with_balance(account_type, initial)
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn view_balance(&self) -> Amount {
        self.balance
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            warn!("rejected {} deposit of {}", self.account_type, amount);
            return Err(BankError::non_positive_deposit(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        debug!("{} deposit of {}, balance {}", self.account_type, amount, self.balance);
        Ok(())
    }

    /// The amount must be strictly below the balance, so an account can never
    /// be emptied by a withdrawal.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount < Decimal::ZERO {
            warn!("rejected {} withdrawal of {}", self.account_type, amount);
            return Err(BankError::invalid_argument(format!(
                "The amount to be withdrawn cannot be negative (got {})",
                amount
            )));
        }
        if amount >= self.balance {
            warn!(
                "rejected {} withdrawal of {} against balance {}",
                self.account_type, amount, self.balance
            );
            return Err(BankError::overdraft(amount, self.balance));
        }
        self.balance -= amount;
        debug!("{} withdrawal of {}, balance {}", self.account_type, amount, self.balance);
        Ok(())
    }
}
