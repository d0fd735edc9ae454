use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::trace;

use crate::account::{AccountType, Amount};
use crate::error::BankError;
use crate::holder::AccountHolder;

pub const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit,
    Withdrawal,
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transaction::Deposit => write!(f, "deposit"),
            Transaction::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Append-only record of what the holder did, one line per action.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> ActivityLog {
        ActivityLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_info(&self, holder: &AccountHolder) -> Result<(), BankError> {
        self.append(&format!("{} INFO", holder))
    }

    pub fn record_balance(
        &self,
        holder: &AccountHolder,
        account_type: AccountType,
    ) -> Result<(), BankError> {
        self.append(&format!(
            "{} {} balance",
            holder,
            account_type.name().to_uppercase()
        ))
    }

    pub fn record_transaction(
        &self,
        holder: &AccountHolder,
        account_type: AccountType,
        transaction: Transaction,
        amount: Amount,
        accepted: bool,
    ) -> Result<(), BankError> {
        let mut line = format!(
            "{} {} {} Transaction amount: ${}",
            holder,
            account_type.name().to_uppercase(),
            transaction,
            amount
        );
        if !accepted {
            line.push_str(" (rejected)");
        }
        self.append(&line)
    }

    fn append(&self, line: &str) -> Result<(), BankError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        trace!("{}: {}", self.path.display(), line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn log_in(dir: &TempDir) -> ActivityLog {
        ActivityLog::new(dir.path().join("log.txt"))
    }

    #[test]
    fn test_first_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        assert!(!log.path().exists());

        log.record_info(&AccountHolder::new(1234, "jon", "snow")).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "SNOW, JON - #1234 INFO\n");
    }

    #[test]
    fn test_lines_are_appended() {
        let dir = TempDir::new().unwrap();
        let log = log_in(&dir);
        let holder = AccountHolder::new(1234, "jon", "snow");

        log.record_balance(&holder, AccountType::Savings).unwrap();
        log.record_transaction(
            &holder,
            AccountType::Checking,
            Transaction::Deposit,
            Decimal::new(10050, 2),
            true,
        )
        .unwrap();
        log.record_transaction(
            &holder,
            AccountType::Checking,
            Transaction::Withdrawal,
            Decimal::new(500, 0),
            false,
        )
        .unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "SNOW, JON - #1234 SAVINGS balance",
                "SNOW, JON - #1234 CHECKING deposit Transaction amount: $100.50",
                "SNOW, JON - #1234 CHECKING withdrawal Transaction amount: $500 (rejected)",
            ]
        );
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let log = ActivityLog::new(dir.path().join("missing").join("log.txt"));
        let result = log.record_info(&AccountHolder::new(1, "a", "b"));
        assert!(matches!(result, Err(BankError::Io(_))));
    }
}
