use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("'{input}' is not a valid number")]
    Format { input: String },
    #[error("'{input}' is too large or too small for a decimal amount")]
    Overflow { input: String },
    #[error("Lower bound {low} must not be greater than upper bound {high}")]
    Range { low: i64, high: i64 },
    #[error("Depositing {amount} would take the balance of {balance} past the largest representable amount")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Config {
        path: Option<PathBuf>,
        message: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BankError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BankError::InvalidArgument(message.into())
    }

    pub(crate) fn non_positive_deposit(amount: Decimal) -> Self {
        BankError::InvalidArgument(format!(
            "Please specify an amount greater than 0 (got {})",
            amount
        ))
    }

    pub(crate) fn overdraft(amount: Decimal, balance: Decimal) -> Self {
        BankError::InvalidArgument(format!(
            "The amount to be withdrawn ({}) must be less than the account balance ({})",
            amount, balance
        ))
    }
}
