use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;
use serde::Deserialize;

use crate::activity_log::DEFAULT_LOG_FILE;
use crate::error::BankError;
use crate::holder::{ACCOUNT_NUMBER_HIGH, ACCOUNT_NUMBER_LOW};

/// Console banking simulator
#[derive(Parser, Debug)]
#[command(name = "banking")]
#[command(about = "Open a checking and a savings account and manage them from a menu", long_about = None)]
pub struct CliArgs {
    /// JSON configuration file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File that receives one line per banking action
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this account number instead of a random one
    #[arg(long = "account-number", value_name = "NUMBER")]
    pub account_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_file: PathBuf,
    pub account_number_low: i64,
    pub account_number_high: i64,
    pub account_number: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            account_number_low: ACCOUNT_NUMBER_LOW,
            account_number_high: ACCOUNT_NUMBER_HIGH,
            account_number: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config, BankError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| BankError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the config file if one was given, then the CLI flags.
    pub fn from_args(args: &CliArgs) -> Result<Config, BankError> {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(log_file) = &args.log_file {
            config.log_file = log_file.clone();
        }
        if args.account_number.is_some() {
            config.account_number = args.account_number;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BankError> {
        if self.account_number_low > self.account_number_high {
            return Err(BankError::Range {
                low: self.account_number_low,
                high: self.account_number_high,
            });
        }
        if self.account_number_low < 0 || self.account_number_high > i64::from(u32::MAX) {
            return Err(BankError::Config {
                path: None,
                message: format!(
                    "account number range [{}, {}) does not fit an account number",
                    self.account_number_low, self.account_number_high
                ),
            });
        }
        Ok(())
    }
}
