use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{info, warn};

use crate::application::AppError;
use crate::domain::{format_export_amount, Ledger, DATE_FORMAT};

pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Type"];

/// Exporter for writing ledger contents as CSV
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export transactions to CSV format. Returns the number of rows written,
    /// not counting the header.
    ///
    /// Fields are written verbatim and never quoted: a category containing a
    /// comma yields a row with an extra column.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(line_terminator())
            .from_writer(writer);

        csv_writer.write_record(CSV_HEADER)?;

        let mut count = 0;
        for transaction in self.ledger.all() {
            csv_writer.write_record([
                transaction.date.format(DATE_FORMAT).to_string(),
                transaction.category.clone(),
                format_export_amount(transaction.amount),
                transaction.kind.as_str().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Write the CSV export to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "cannot open export destination");
            AppError::FileOpen {
                path: path.display().to_string(),
                source,
            }
        })?;

        let count = self.export_csv(BufWriter::new(file))?;
        info!(path = %path.display(), rows = count, "exported transactions");
        Ok(count)
    }
}

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
