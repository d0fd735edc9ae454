//! The interactive session: onboarding, the main menu and the banking
//! operations sub-menus.
//!
//! Every menu is a fixed list of typed choices. The number the user types is
//! looked up in a table built from that list and the resulting choice is
//! dispatched with a `match`.

use std::io::{BufRead, Write};

use hashbrown::HashMap;
use log::{info, warn};
use rust_decimal::Decimal;

use crate::account::{AccountType, Amount};
use crate::activity_log::{ActivityLog, Transaction};
use crate::config::Config;
use crate::console::Console;
use crate::error::BankError;
use crate::holder::AccountHolder;
use crate::validate::{parse_decimal, validate_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Information,
    BankingOperations,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewBalance,
    Deposit,
    Withdraw,
}

const MAIN_MENU: &[(MainMenuChoice, &str)] = &[
    (MainMenuChoice::Information, "Account holder information"),
    (MainMenuChoice::BankingOperations, "Banking operations"),
    (MainMenuChoice::Exit, "Exit"),
];

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::ViewBalance, Operation::Deposit, Operation::Withdraw];

    pub fn label(self) -> &'static str {
        match self {
            Operation::ViewBalance => "View balance",
            Operation::Deposit => "Deposit funds",
            Operation::Withdraw => "Withdraw funds",
        }
    }
}

/// Numbered options plus the lookup from typed number to choice.
struct Menu<T> {
    options: Vec<(T, &'static str)>,
    lookup: HashMap<String, T>,
}

impl<T: Copy> Menu<T> {
    fn new(options: Vec<(T, &'static str)>) -> Menu<T> {
        let lookup = options
            .iter()
            .enumerate()
            .map(|(index, (choice, _))| (index.to_string(), *choice))
            .collect();
        Menu { options, lookup }
    }

    fn render<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), BankError> {
        console.say("Please select from the below options:")?;
        for (index, (_, label)) in self.options.iter().enumerate() {
            console.say(&format!("{}: {}", index, label))?;
        }
        Ok(())
    }

    fn choose(&self, input: &str) -> Option<T> {
        self.lookup.get(input.trim()).copied()
    }
}

fn account_type_menu() -> Menu<AccountType> {
    Menu::new(
        AccountType::ALL
            .into_iter()
            .map(|kind| (kind, kind.label()))
            .collect(),
    )
}

fn operation_menu() -> Menu<Operation> {
    Menu::new(Operation::ALL.into_iter().map(|op| (op, op.label())).collect())
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

pub fn currency(amount: Amount) -> String {
    if amount < Decimal::ZERO {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Prompts for first and last name until both are valid and opens the
/// holder's accounts. `None` when input ends first.
pub fn create_holder<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<Option<AccountHolder>, BankError> {
    console.say("Please create a user to proceed")?;
    loop {
        let first_name = match read_name(console, "Enter your first name: ")? {
            Some(Ok(name)) => name,
            Some(Err(e)) => {
                console.say(&format!("ERROR: {}", e))?;
                continue;
            }
            None => return Ok(None),
        };
        let last_name = match read_name(console, "Enter your last name: ")? {
            Some(Ok(name)) => name,
            Some(Err(e)) => {
                console.say(&format!("ERROR: {}", e))?;
                continue;
            }
            None => return Ok(None),
        };

        let holder = match config.account_number {
            Some(number) => AccountHolder::new(number, &first_name, &last_name),
            None => AccountHolder::with_number_in_range(
                &first_name,
                &last_name,
                config.account_number_low,
                config.account_number_high,
            )?,
        };
        info!("created holder #{}", holder.account_number());
        console.say("Great! Welcome to our banking service.")?;
        return Ok(Some(holder));
    }
}

fn read_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<Result<String, BankError>>, BankError> {
    Ok(console.prompt(prompt)?.map(|input| validate_name(&input)))
}

/// Everything one interactive run works on.
pub struct Session {
    holder: AccountHolder,
    log: ActivityLog,
    main_menu: Menu<MainMenuChoice>,
    account_menu: Menu<AccountType>,
    operation_menu: Menu<Operation>,
}

impl Session {
    pub fn new(holder: AccountHolder, log: ActivityLog) -> Session {
        Session {
            holder,
            log,
            main_menu: Menu::new(MAIN_MENU.to_vec()),
            account_menu: account_type_menu(),
            operation_menu: operation_menu(),
        }
    }

    pub fn holder(&self) -> &AccountHolder {
        &self.holder
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), BankError> {
        info!("session started for #{}", self.holder.account_number());
        loop {
            console.blank_line()?;
            self.main_menu.render(console)?;
            let Some(input) = console.prompt("#: ")? else {
                break;
            };
            match self.main_menu.choose(&input) {
                Some(MainMenuChoice::Information) => self.print_information(console)?,
                Some(MainMenuChoice::BankingOperations) => {
                    if self.banking_operations(console)? == Flow::EndOfInput {
                        break;
                    }
                }
                Some(MainMenuChoice::Exit) => {
                    console.say("Exiting banking menu.")?;
                    break;
                }
                None => console.say("Invalid option.")?,
            }
        }
        info!("session ended for #{}", self.holder.account_number());
        Ok(())
    }

    fn print_information<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), BankError> {
        console.say(&format!(
            "Viewing the account of {} with account #{}",
            self.holder.display_name(),
            self.holder.account_number()
        ))?;
        self.log.record_info(&self.holder)
    }

    fn banking_operations<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Flow, BankError> {
        let account_type = loop {
            console.blank_line()?;
            self.account_menu.render(console)?;
            let Some(input) = console.prompt("#: ")? else {
                return Ok(Flow::EndOfInput);
            };
            match self.account_menu.choose(&input) {
                Some(kind) => break kind,
                None => console.say("Invalid account type specified. Please try again.")?,
            }
        };
        console.say(&format!("{} is selected.", account_type))?;

        let operation = loop {
            console.blank_line()?;
            self.operation_menu.render(console)?;
            let Some(input) = console.prompt("#: ")? else {
                return Ok(Flow::EndOfInput);
            };
            match self.operation_menu.choose(&input) {
                Some(operation) => break operation,
                None => console.say("Invalid operation specified. Please try again.")?,
            }
        };
        console.say(&format!("{} is selected.", operation.label()))?;

        match operation {
            Operation::ViewBalance => {
                self.print_balance(console, account_type)?;
                Ok(Flow::Continue)
            }
            Operation::Deposit => self.transact(console, account_type, Transaction::Deposit),
            Operation::Withdraw => self.transact(console, account_type, Transaction::Withdrawal),
        }
    }

    fn print_balance<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        account_type: AccountType,
    ) -> Result<(), BankError> {
        let account = self.holder.account(account_type);
        console.say(&format!(
            "{}'s {} account has a balance of {}",
            self.holder.display_name(),
            account_type,
            currency(account.view_balance())
        ))?;
        self.log.record_balance(&self.holder, account_type)
    }

    fn transact<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        account_type: AccountType,
        transaction: Transaction,
    ) -> Result<Flow, BankError> {
        let direction = match transaction {
            Transaction::Deposit => "Depositing to",
            Transaction::Withdrawal => "Withdrawing from",
        };
        console.say(&format!(
            "{} {}'s {} account. Please specify an amount:",
            direction,
            self.holder.display_name(),
            account_type
        ))?;
        let Some(input) = console.prompt("$")? else {
            return Ok(Flow::EndOfInput);
        };
        let amount = match parse_decimal(&input) {
            Ok(amount) => amount,
            Err(e) => {
                console.say(&format!("ERROR: {}", e))?;
                return Ok(Flow::Continue);
            }
        };

        let account = self.holder.account_mut(account_type);
        let result = match transaction {
            Transaction::Deposit => account.deposit(amount),
            Transaction::Withdrawal => account.withdraw(amount),
        };
        match &result {
            Ok(()) => {
                let verb = match transaction {
                    Transaction::Deposit => "deposited to",
                    Transaction::Withdrawal => "withdrawn from",
                };
                console.say(&format!(
                    "{} were successfully {} the account.",
                    currency(amount),
                    verb
                ))?;
            }
            Err(e) => {
                warn!("{} {} failed: {}", account_type, transaction, e);
                console.say(&format!("ERROR: {}", e))?;
            }
        }
        self.log
            .record_transaction(&self.holder, account_type, transaction, amount, result.is_ok())?;
        Ok(Flow::Continue)
    }
}

/// Onboards a holder and runs the session on `console`.
pub fn run_app<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    let Some(holder) = create_holder(console, config)? else {
        info!("input ended before a holder was created");
        return Ok(());
    };
    let mut session = Session::new(holder, ActivityLog::new(config.log_file.clone()));
    session.run(console)
}
