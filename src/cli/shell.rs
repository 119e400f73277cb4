//! Menu-driven loop that owns the ledger and dispatches user choices.

use std::env;

use tracing::debug;

use crate::cli::io::{PromptSource, Prompted};
use crate::cli::output;
use crate::errors::{CliError, LedgerError};
use crate::ledger::Ledger;

/// Operating mode for the shell, chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Either a prompt answer or the loop control to bail out with.
enum Fetch<T> {
    Got(T),
    Abort(LoopControl),
}

const MENU: &[&str] = &[
    "1. Add Income",
    "2. Add Expense",
    "3. View Transactions",
    "4. Check Balance",
    "5. Delete Transaction",
    "6. Filter Transactions by Category",
    "7. Exit",
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os("FINTRACK_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut source = match mode {
        CliMode::Interactive => PromptSource::interactive(),
        CliMode::Script => PromptSource::script(),
    };

    let initial_balance = loop {
        match source.read_number::<f64>("Enter initial balance")? {
            Prompted::Value(value) => break value,
            Prompted::Invalid(line) => {
                output::error(format!("`{}` is not a number.", line.trim()));
            }
            Prompted::Eof => return Ok(()),
        }
    };

    let mut ledger = Ledger::new(initial_balance);
    debug!(initial_balance, "ledger created");

    loop {
        print_menu();
        let choice = match source.read_number::<u32>("Choose an option")? {
            Prompted::Value(value) => value,
            Prompted::Invalid(_) => {
                output::warning("Invalid choice, please try again.");
                continue;
            }
            Prompted::Eof => break,
        };
        match dispatch(&mut ledger, &mut source, choice)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }

    Ok(())
}

fn print_menu() {
    output::blank_line();
    for line in MENU {
        output::info(line);
    }
}

fn dispatch(
    ledger: &mut Ledger,
    source: &mut PromptSource,
    choice: u32,
) -> Result<LoopControl, CliError> {
    match choice {
        1 => add_income(ledger, source),
        2 => add_expense(ledger, source),
        3 => {
            view_transactions(ledger);
            Ok(LoopControl::Continue)
        }
        4 => {
            show_balance(ledger);
            Ok(LoopControl::Continue)
        }
        5 => delete_transaction(ledger, source),
        6 => filter_by_category(ledger, source),
        7 => {
            output::info("Exiting application. Goodbye!");
            Ok(LoopControl::Exit)
        }
        _ => {
            output::warning("Invalid choice, please try again.");
            Ok(LoopControl::Continue)
        }
    }
}

fn fetch_number<T>(source: &mut PromptSource, prompt: &str) -> Result<Fetch<T>, CliError>
where
    T: Clone + std::str::FromStr + std::fmt::Display,
    <T as std::str::FromStr>::Err: std::fmt::Display + std::fmt::Debug,
{
    Ok(match source.read_number::<T>(prompt)? {
        Prompted::Value(value) => Fetch::Got(value),
        Prompted::Invalid(line) => {
            output::error(format!("`{}` is not a number.", line.trim()));
            Fetch::Abort(LoopControl::Continue)
        }
        Prompted::Eof => Fetch::Abort(LoopControl::Exit),
    })
}

fn fetch_text(source: &mut PromptSource, prompt: &str) -> Result<Fetch<String>, CliError> {
    Ok(match source.read_text(prompt)? {
        Some(value) => Fetch::Got(value),
        None => Fetch::Abort(LoopControl::Exit),
    })
}

fn add_income(ledger: &mut Ledger, source: &mut PromptSource) -> Result<LoopControl, CliError> {
    let amount = match fetch_number::<f64>(source, "Enter income amount")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };
    ledger.add_income(amount);
    output::success("Income added successfully!");
    Ok(LoopControl::Continue)
}

fn add_expense(ledger: &mut Ledger, source: &mut PromptSource) -> Result<LoopControl, CliError> {
    let description = match fetch_text(source, "Enter expense description")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };
    let amount = match fetch_number::<f64>(source, "Enter amount")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };
    let category = match fetch_text(source, "Enter category")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };

    match ledger.add_expense(description, amount, category) {
        Ok(()) => output::success("Expense added successfully!"),
        Err(LedgerError::InsufficientBalance { .. }) => output::error("Insufficient balance!"),
        Err(other) => output::error(other.to_string()),
    }
    Ok(LoopControl::Continue)
}

fn view_transactions(ledger: &Ledger) {
    output::info("Transaction History:");
    if ledger.is_empty() {
        output::info("  (no transactions recorded yet)");
        return;
    }
    for (index, txn) in ledger.transactions().iter().enumerate() {
        output::info(format!("  [{index}] {txn}"));
    }
}

fn show_balance(ledger: &Ledger) {
    output::info(format!("Current Balance: {:.2}", ledger.balance()));
}

fn delete_transaction(
    ledger: &mut Ledger,
    source: &mut PromptSource,
) -> Result<LoopControl, CliError> {
    let index = match fetch_number::<usize>(source, "Enter transaction index to delete")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };

    match ledger.delete_transaction(index) {
        Ok(_) => output::success("Transaction deleted successfully!"),
        Err(LedgerError::InvalidIndex { .. }) => output::error("Invalid transaction index!"),
        Err(other) => output::error(other.to_string()),
    }
    Ok(LoopControl::Continue)
}

fn filter_by_category(
    ledger: &Ledger,
    source: &mut PromptSource,
) -> Result<LoopControl, CliError> {
    let category = match fetch_text(source, "Enter category to filter")? {
        Fetch::Got(value) => value,
        Fetch::Abort(control) => return Ok(control),
    };

    output::info(format!("Transactions under category: {category}"));
    let matches = ledger.filter_by_category(&category);
    if matches.is_empty() {
        output::info("  (none)");
        return Ok(LoopControl::Continue);
    }
    for txn in matches {
        output::info(format!("  {txn}"));
    }
    Ok(LoopControl::Continue)
}
