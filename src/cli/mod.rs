//! Command-line front end over the expense core.

pub mod output;

use std::{env, io::Write};

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    account::{Account, AccountBook},
    clock::{Clock, FixedClock, SystemClock},
    config::{Config, ConfigManager},
    dashboard::Dashboard,
    errors::{AccountError, ConfigError, ExpenseError, StorageError},
    expense::{parse_amount, ExpenseBook, ExpenseDraft, ExpenseFilter, MonthKey, DATE_FORMAT},
    storage::{JsonStore, Storage},
    utils::{build_info, paths},
};

use output::MessageKind;

/// Pins "today" for every command, formatted `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "JANGORITHM_TODAY";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

const USAGE: &str = "Usage: jangorithm <command>\n\
Commands:\n  \
dashboard [YYYY-MM]\n  \
add <YYYY-MM-DD> <category> <amount> [memo...]\n  \
list [--month YYYY-MM] [--category NAME]\n  \
delete <id>\n  \
accounts\n  \
account-add <owner> <bank> <nickname> <type> <purpose> <previous> <current>\n  \
account-edit <index> <owner> <bank> <nickname> <type> <purpose> <previous> <current>\n  \
account-delete <index>\n  \
version";

/// Loaded state shared by every command.
pub struct App<S: Storage> {
    storage: S,
    config: Config,
    today: NaiveDate,
    expenses: ExpenseBook,
    expenses_dirty: bool,
}

impl<S: Storage> App<S> {
    /// Loads the expense list and registers any fixed expenses due today.
    pub fn load(storage: S, config: Config, clock: &dyn Clock) -> CliResult<Self> {
        let today = clock.today();
        let mut expenses = ExpenseBook::new(storage.load_expenses()?);
        let added = expenses.apply_recurring(today, &config.recurring);
        Ok(Self {
            storage,
            config,
            today,
            expenses,
            expenses_dirty: added > 0,
        })
    }

    pub fn expenses(&self) -> &ExpenseBook {
        &self.expenses
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Persists the expense list if anything changed since loading.
    pub fn flush(&mut self) -> CliResult<()> {
        if self.expenses_dirty {
            self.storage.save_expenses(self.expenses.records())?;
            self.expenses_dirty = false;
        }
        Ok(())
    }

    pub fn run<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        let (command, rest) = args
            .split_first()
            .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        match command.as_str() {
            "dashboard" => self.dashboard(rest, out)?,
            "add" => self.add(rest, out)?,
            "list" => self.list(rest, out)?,
            "delete" => self.delete(rest, out)?,
            "accounts" => self.accounts(out)?,
            "account-add" => self.account_add(rest, out)?,
            "account-edit" => self.account_edit(rest, out)?,
            "account-delete" => self.account_delete(rest, out)?,
            "version" => writeln!(out, "{}", build_info::current().describe())?,
            other => {
                return Err(CliError::Usage(format!(
                    "Unknown command `{other}`\n{USAGE}"
                )))
            }
        }
        self.flush()
    }

    fn dashboard<W: Write>(&self, args: &[String], out: &mut W) -> CliResult<()> {
        let month = match args.first() {
            Some(raw) => raw.parse::<MonthKey>()?,
            None => MonthKey::of(self.today),
        };
        let accounts = self.storage.load_accounts()?;
        let dashboard =
            Dashboard::build(self.expenses.records(), &accounts, &self.config, month);
        writeln!(out, "{}", output::render_dashboard(&dashboard))?;
        Ok(())
    }

    fn add<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        let [date, category, amount, memo @ ..] = args else {
            return Err(CliError::Usage(
                "add <YYYY-MM-DD> <category> <amount> [memo...]".into(),
            ));
        };
        let draft = ExpenseDraft::new(
            date.as_str(),
            category.as_str(),
            parse_amount(amount)?,
            memo.join(" "),
        );
        let id = self.expenses.add(draft)?;
        self.expenses_dirty = true;
        let text = output::message(MessageKind::Success, format!("Expense added: {id}"));
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn list<W: Write>(&self, args: &[String], out: &mut W) -> CliResult<()> {
        let mut filter = ExpenseFilter::all();
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            let value = iter
                .next()
                .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))?;
            filter = match flag.as_str() {
                "--month" => filter.with_month(value.parse()?),
                "--category" => filter.with_category(value.as_str()),
                other => return Err(CliError::Usage(format!("Unknown option `{other}`"))),
            };
        }
        let records = self.expenses.records();
        let matched = filter.apply(records);
        let text = output::render_expenses(
            &matched,
            filter.total(records),
            &self.config.currency_symbol,
        );
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn delete<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        let raw = args
            .first()
            .ok_or_else(|| CliError::Usage("delete <id>".into()))?;
        let id = Uuid::parse_str(raw)
            .map_err(|_| CliError::Usage(format!("`{raw}` is not an expense id")))?;
        let removed = self.expenses.remove(id)?;
        self.expenses_dirty = true;
        writeln!(
            out,
            "{}",
            output::message(
                MessageKind::Success,
                format!(
                    "Expense removed: {} {} {}",
                    removed.date, removed.category, removed.amount
                )
            )
        )?;
        Ok(())
    }

    fn accounts<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let accounts = self.storage.load_accounts()?;
        let text = output::render_accounts(&accounts, &self.config.currency_symbol);
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn account_add<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        let account = parse_account(
            args,
            "account-add <owner> <bank> <nickname> <type> <purpose> <previous> <current>",
        )?;
        warn_unknown_bank(&account, out)?;
        let mut book = AccountBook::new(self.storage.load_accounts()?);
        let index = book.add(account)?;
        self.storage.save_accounts(book.accounts())?;
        let text = output::message(MessageKind::Success, format!("Account added at index {index}"));
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn account_edit<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        const USAGE_EDIT: &str =
            "account-edit <index> <owner> <bank> <nickname> <type> <purpose> <previous> <current>";
        let (index, fields) = args
            .split_first()
            .and_then(|(raw, fields)| Some((raw.parse::<usize>().ok()?, fields)))
            .ok_or_else(|| CliError::Usage(USAGE_EDIT.into()))?;
        let account = parse_account(fields, USAGE_EDIT)?;
        warn_unknown_bank(&account, out)?;
        let mut book = AccountBook::new(self.storage.load_accounts()?);
        book.update(index, account)?;
        self.storage.save_accounts(book.accounts())?;
        let text = output::message(MessageKind::Success, format!("Account {index} updated"));
        writeln!(out, "{text}")?;
        Ok(())
    }

    fn account_delete<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        let index: usize = args
            .first()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| CliError::Usage("account-delete <index>".into()))?;
        let mut book = AccountBook::new(self.storage.load_accounts()?);
        let removed = book.remove(index)?;
        self.storage.save_accounts(book.accounts())?;
        writeln!(
            out,
            "{}",
            output::message(
                MessageKind::Info,
                format!("Account removed: {} {}", removed.bank_name, removed.nickname)
            )
        )?;
        Ok(())
    }
}

/// Builds an account from the seven positional fields shared by add and edit.
fn parse_account(args: &[String], usage: &str) -> CliResult<Account> {
    let [owner, bank, nickname, account_type, purpose, previous, current] = args else {
        return Err(CliError::Usage(usage.to_string()));
    };
    Ok(Account::new(owner.as_str(), bank.as_str())
        .with_nickname(nickname.as_str())
        .with_kind(account_type.as_str(), purpose.as_str())
        .with_balances(parse_balance(previous)?, parse_balance(current)?))
}

fn warn_unknown_bank<W: Write>(account: &Account, out: &mut W) -> CliResult<()> {
    if !account.is_known_bank() {
        let text = output::message(
            MessageKind::Warning,
            format!("`{}` is not in the bank list", account.bank_name),
        );
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn parse_balance(raw: &str) -> CliResult<i64> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    cleaned
        .parse()
        .map_err(|_| CliError::Usage(format!("`{raw}` is not a whole amount")))
}

/// Resolves the clock from `JANGORITHM_TODAY`, falling back to the system date.
fn resolve_clock() -> CliResult<Box<dyn Clock>> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_err(|_| ExpenseError::InvalidDate(raw.clone()))?;
            Ok(Box::new(FixedClock(date)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}

/// Entry point used by the binary: resolves paths, loads state, runs one command.
pub fn run_cli<W: Write>(args: &[String], out: &mut W) -> CliResult<()> {
    if args.is_empty() {
        return Err(CliError::Usage(USAGE.to_string()));
    }
    let base = paths::app_data_dir();
    let config = ConfigManager::with_base_dir(&base).load()?;
    let storage = JsonStore::new(base)?;
    let clock = resolve_clock()?;
    tracing::debug!(today = %clock.today(), "starting command");

    let mut app = App::load(storage, config, &*clock)?;
    app.run(args, out)
}
