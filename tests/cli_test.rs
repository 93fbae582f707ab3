use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack() -> Command {
    Command::cargo_bin(BIN_NAME).expect("binary exists")
}

#[test]
fn cli_exit_prints_farewell() {
    fintrack()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(contains("Personal Finance Tracker").and(contains("Exiting program. Goodbye!")));
}

#[test]
fn cli_invalid_choice_recovers() {
    fintrack()
        .write_stdin("7\nhello\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please enter a number between 1 and 5."));
}

#[test]
fn cli_closed_stdin_exits_cleanly() {
    fintrack().write_stdin("").assert().success();
}

#[test]
fn cli_add_and_summarize() {
    fintrack()
        .write_stdin(
            "1\n2024-05-01\nSalary\n100\nIncome\n\
             1\n2024-05-02\nFood\n40\nExpense\n\
             2\n5\n",
        )
        .assert()
        .success()
        .stdout(
            contains("Total Income: $100.00")
                .and(contains("Total Expense: $40.00"))
                .and(contains("Net Savings: $60.00")),
        );
}

#[test]
fn cli_save_writes_csv() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("out.csv");
    let path_str = path.to_str().expect("utf-8 path");

    fintrack()
        .write_stdin(format!(
            "1\n2024-05-01\nRent\n1200\nExpense\n4\n{}\n5\n",
            path_str
        ))
        .assert()
        .success()
        .stdout(contains(format!("Transactions saved to {}", path_str)));

    let contents = std::fs::read_to_string(&path).expect("export written");
    assert_eq!(
        contents.lines().collect::<Vec<_>>(),
        vec!["Date,Category,Amount,Type", "2024-05-01,Rent,1200,Expense"]
    );
}

#[test]
fn cli_save_failure_goes_to_stderr() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("missing").join("out.csv");

    fintrack()
        .write_stdin(format!("4\n{}\n5\n", path.to_str().expect("utf-8 path")))
        .assert()
        .success()
        .stderr(contains("Error: Unable to open file for writing."))
        .stdout(contains("Exiting program. Goodbye!"));
}

#[test]
fn cli_version_flag() {
    fintrack()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("fintrack"));
}

#[test]
fn cli_non_utf8_input_is_not_fatal() {
    fintrack()
        .write_stdin(b"\xff\n5\n".to_vec())
        .assert()
        .success()
        .stdout(contains("Invalid choice.").and(contains("Exiting program. Goodbye!")));
}
