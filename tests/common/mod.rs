// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::NaiveDate;
use fintrack::cli::{Console, MenuController};
use fintrack::domain::Ledger;

/// Everything a scripted session left behind.
pub struct Session {
    pub ledger: Ledger,
    pub stdout: String,
    pub stderr: String,
}

/// Drive the menu with `script` as stdin until it exits or input runs out.
pub fn run_session(script: &str) -> Result<Session> {
    run_session_bytes(script.as_bytes())
}

/// Same as `run_session`, for input that is not necessarily UTF-8.
pub fn run_session_bytes(script: &[u8]) -> Result<Session> {
    let console = Console::new(Cursor::new(script.to_vec()), Vec::new(), Vec::new());
    let mut controller = MenuController::new(Ledger::new(), console);
    controller.run()?;

    let (ledger, console) = controller.into_parts();
    let (_, stdout, stderr) = console.into_parts();
    Ok(Session {
        ledger,
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Menu input that records one transaction and returns to the main menu.
pub fn add_script(date: &str, category: &str, amount: &str, kind: &str) -> String {
    format!("1\n{}\n{}\n{}\n{}\n", date, category, amount, kind)
}
