use crate::domain::{format_amount, Totals, Transaction, DATE_FORMAT};

pub const TABLE_HEADER: &str = "Date       Category       Amount       Type";

/// Render the income/expense/net block shown by "Display Summary".
pub fn format_summary(totals: &Totals) -> String {
    format!(
        "Financial Summary:\nTotal Income: ${}\nTotal Expense: ${}\nNet Savings: ${}\n",
        format_amount(totals.income),
        format_amount(totals.expense),
        format_amount(totals.net)
    )
}

/// Render the fixed-width transaction table. Columns do not adapt to their
/// content; a long category pushes the rest of its row to the right.
pub fn format_table(transactions: &[Transaction]) -> String {
    let mut table = format!("{}\n{}\n", TABLE_HEADER, "-".repeat(45));
    for transaction in transactions {
        table.push_str(&format!(
            "{:>10}  {:>12}  {:>8}  {:>8}\n",
            transaction.date.format(DATE_FORMAT).to_string(),
            transaction.category,
            format_amount(transaction.amount),
            transaction.kind
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Kind;

    fn transaction(category: &str, amount: f64, kind: Kind) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        Transaction::new(date, category, amount, kind)
    }

    #[test]
    fn test_format_summary() {
        let totals = Totals {
            income: 100.0,
            expense: 40.0,
            net: 60.0,
        };

        assert_eq!(
            format_summary(&totals),
            "Financial Summary:\nTotal Income: $100.00\nTotal Expense: $40.00\nNet Savings: $60.00\n"
        );
    }

    #[test]
    fn test_format_summary_negative_net() {
        let totals = Totals {
            income: 0.0,
            expense: 12.5,
            net: -12.5,
        };

        assert!(format_summary(&totals).contains("Net Savings: $-12.50"));
    }

    #[test]
    fn test_format_table_empty() {
        let table = format_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines, vec![TABLE_HEADER, &"-".repeat(45)]);
    }

    #[test]
    fn test_format_table_rows_are_fixed_width() {
        let table = format_table(&[
            transaction("Rent", 1200.0, Kind::Expense),
            transaction("Salary", 3000.5, Kind::Income),
        ]);
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert_eq!(
            rows,
            vec![
                "2024-05-01          Rent   1200.00   Expense",
                "2024-05-01        Salary   3000.50    Income",
            ]
        );
    }

    #[test]
    fn test_format_table_long_category_is_not_truncated() {
        let table = format_table(&[transaction("Entertainment", 9.99, Kind::Expense)]);
        let row = table.lines().nth(2).unwrap();

        assert_eq!(row, "2024-05-01  Entertainment      9.99   Expense");
    }
}
