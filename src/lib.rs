pub mod account;
pub mod activity_log;
pub mod config;
pub mod console;
pub mod error;
pub mod holder;
pub mod menu;
pub mod validate;

pub use account::{Account, AccountType, Amount};
pub use activity_log::{ActivityLog, Transaction};
pub use config::{CliArgs, Config};
pub use console::Console;
pub use error::BankError;
pub use holder::AccountHolder;
pub use menu::{create_holder, run_app, Session};
pub use validate::{parse_decimal, random_int_in_range, validate_name};
