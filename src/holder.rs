use std::fmt::Display;

use log::debug;

use crate::account::{Account, AccountType};
use crate::error::BankError;
use crate::validate::random_int_in_range;

pub const ACCOUNT_NUMBER_LOW: i64 = 1000;
pub const ACCOUNT_NUMBER_HIGH: i64 = 10000;

/// The customer of a session. Owns exactly one checking and one savings
/// account, both opened with the holder.
#[derive(Debug)]
pub struct AccountHolder {
    account_number: u32,
    first_name: String,
    last_name: String,
    checking: Account,
    savings: Account,
}

impl AccountHolder {
    pub fn new(account_number: u32, first_name: &str, last_name: &str) -> AccountHolder {
        debug!("opening accounts for #{}", account_number);
        AccountHolder {
            account_number,
            first_name: first_name.to_uppercase(),
            last_name: last_name.to_uppercase(),
            checking: Account::new(AccountType::Checking),
            savings: Account::new(AccountType::Savings),
        }
    }

    pub fn with_random_number(
        first_name: &str,
        last_name: &str,
    ) -> Result<AccountHolder, BankError> {
        Self::with_number_in_range(first_name, last_name, ACCOUNT_NUMBER_LOW, ACCOUNT_NUMBER_HIGH)
    }

    /// Draws the account number from `[low, high)`.
    pub fn with_number_in_range(
        first_name: &str,
        last_name: &str,
        low: i64,
        high: i64,
    ) -> Result<AccountHolder, BankError> {
        let number = random_int_in_range(low, high)?;
        let number = u32::try_from(number).map_err(|_| {
            BankError::invalid_argument(format!("Account number {} is out of range", number))
        })?;
        Ok(AccountHolder::new(number, first_name, last_name))
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `LAST, FIRST`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn account(&self, account_type: AccountType) -> &Account {
        match account_type {
            AccountType::Checking => &self.checking,
            AccountType::Savings => &self.savings,
        }
    }

    pub fn account_mut(&mut self, account_type: AccountType) -> &mut Account {
        match account_type {
            AccountType::Checking => &mut self.checking,
            AccountType::Savings => &mut self.savings,
        }
    }

    /// Case-insensitive lookup. Unknown names give `None` so menu code can
    /// report a bad selection instead of failing.
    pub fn account_by_type(&self, name: &str) -> Option<&Account> {
        AccountType::lookup(name).map(|kind| self.account(kind))
    }

    pub fn account_by_type_mut(&mut self, name: &str) -> Option<&mut Account> {
        AccountType::lookup(name).map(move |kind| self.account_mut(kind))
    }
}

impl Display for AccountHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - #{}", self.display_name(), self.account_number)
    }
}
