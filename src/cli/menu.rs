use std::io::{BufRead, Write};

use tracing::debug;

use super::console::{Console, OnReject};
use super::present::{format_summary, format_table};
use crate::application::AppError;
use crate::domain::{
    is_valid_amount, is_valid_date, is_valid_kind, parse_amount, parse_date, Kind, Ledger,
};
use crate::io::Exporter;

pub const MENU: &str = "\nPersonal Finance Tracker\n\
1. Add Transaction\n\
2. Display Summary\n\
3. Display Transactions\n\
4. Save to File\n\
5. Exit\n";

const CHOICE_PROMPT: &str = "Enter your choice: ";
const DATE_PROMPT: &str = "Enter date (YYYY-MM-DD): ";
const CATEGORY_PROMPT: &str = "Enter category (e.g., Food, Rent, Salary): ";
const AMOUNT_PROMPT: &str = "Enter amount: ";
const KIND_PROMPT: &str = "Enter type (Income/Expense): ";
const FILENAME_PROMPT: &str = "Enter filename to save: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";
pub const INVALID_DATE: &str =
    "Invalid date. Please ensure the format is YYYY-MM-DD and the date is valid.";
pub const INVALID_AMOUNT: &str = "Invalid amount. Please enter a positive number.";
pub const INVALID_KIND: &str = "Invalid type. Please enter 'Income' or 'Expense'.";
pub const FAREWELL: &str = "Exiting program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AddFlow,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    DisplaySummary,
    DisplayTransactions,
    SaveToFile,
    Exit,
}

impl MenuChoice {
    /// Map a raw selection to a menu entry. Anything that is not an integer in
    /// 1..=5 yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.parse::<i64>().ok()? {
            1 => Some(MenuChoice::AddTransaction),
            2 => Some(MenuChoice::DisplaySummary),
            3 => Some(MenuChoice::DisplayTransactions),
            4 => Some(MenuChoice::SaveToFile),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The interactive loop. Owns the ledger for the whole session.
pub struct MenuController<R, W, E> {
    console: Console<R, W, E>,
    ledger: Ledger,
    state: MenuState,
}

impl<R: BufRead, W: Write, E: Write> MenuController<R, W, E> {
    pub fn new(ledger: Ledger, console: Console<R, W, E>) -> Self {
        Self {
            console,
            ledger,
            state: MenuState::MainMenu,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Ledger, Console<R, W, E>) {
        (self.ledger, self.console)
    }

    /// Run until the user picks "Exit" or the input stream closes.
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.state != MenuState::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> Result<(), AppError> {
        self.state = match self.state {
            MenuState::MainMenu => self.main_menu()?,
            MenuState::AddFlow => self.add_flow()?,
            MenuState::Exit => MenuState::Exit,
        };
        Ok(())
    }

    fn main_menu(&mut self) -> Result<MenuState, AppError> {
        self.console.print(MENU)?;
        let Some(input) = self.console.prompt(CHOICE_PROMPT)? else {
            return Ok(end_of_input());
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            debug!(input = %input, "rejected menu selection");
            self.console.discard_line();
            self.console.say(INVALID_CHOICE)?;
            return Ok(MenuState::MainMenu);
        };

        match choice {
            MenuChoice::AddTransaction => Ok(MenuState::AddFlow),
            MenuChoice::DisplaySummary => {
                let summary = format_summary(&self.ledger.totals());
                self.console.print(&format!("\n{}", summary))?;
                Ok(MenuState::MainMenu)
            }
            MenuChoice::DisplayTransactions => {
                let table = format_table(self.ledger.all());
                self.console.print(&format!("\nAll Transactions:\n{}", table))?;
                Ok(MenuState::MainMenu)
            }
            MenuChoice::SaveToFile => self.save_to_file(),
            MenuChoice::Exit => {
                self.console.say(FAREWELL)?;
                Ok(MenuState::Exit)
            }
        }
    }

    fn add_flow(&mut self) -> Result<MenuState, AppError> {
        let Some(raw_date) = self
            .console
            .prompt_until(DATE_PROMPT, INVALID_DATE, OnReject::KeepLine, is_valid_date)?
        else {
            return Ok(end_of_input());
        };
        let Some(category) = self.console.prompt(CATEGORY_PROMPT)? else {
            return Ok(end_of_input());
        };
        let Some(raw_amount) = self
            .console
            .prompt_until(AMOUNT_PROMPT, INVALID_AMOUNT, OnReject::DiscardLine, is_valid_amount)?
        else {
            return Ok(end_of_input());
        };
        let Some(raw_kind) = self
            .console
            .prompt_until(KIND_PROMPT, INVALID_KIND, OnReject::KeepLine, is_valid_kind)?
        else {
            return Ok(end_of_input());
        };

        let date = parse_date(&raw_date)?;
        let amount = parse_amount(&raw_amount)?;
        let kind: Kind = raw_kind.parse()?;
        self.ledger.add_transaction(date, category, amount, kind);

        Ok(MenuState::MainMenu)
    }

    fn save_to_file(&mut self) -> Result<MenuState, AppError> {
        let Some(filename) = self.console.prompt(FILENAME_PROMPT)? else {
            return Ok(end_of_input());
        };

        match Exporter::new(&self.ledger).save_to_file(&filename) {
            Ok(_) => {
                self.console
                    .say(&format!("Transactions saved to {}", filename))?;
            }
            Err(AppError::FileOpen { source, .. }) => {
                self.console.report_error(&format!(
                    "Error: Unable to open file for writing. ({})",
                    source
                ))?;
            }
            Err(e) => {
                self.console.report_error(&format!("Error: {}", e))?;
            }
        }

        Ok(MenuState::MainMenu)
    }
}

fn end_of_input() -> MenuState {
    debug!("input closed, leaving menu");
    MenuState::Exit
}
