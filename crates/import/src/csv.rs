use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

use tally_core::{Money, Transaction};

use crate::rules::Classifier;

/// Ordered fallback formats when no explicit format is configured.
/// ISO first; slash and dash forms are read month-first. Day-first exports
/// must pin `ImportOptions::date_format` instead of relying on guessing.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Exact chrono format string for the Date column. When unset, the
    /// formats in `DATE_FORMATS` are tried in order.
    pub date_format: Option<String>,
}

/// Result of one ledger import: validated transactions in input order plus
/// the number of rows dropped for unparseable dates or amounts.
#[derive(Debug, Clone)]
pub struct LedgerImport {
    pub transactions: Vec<Transaction>,
    pub dropped_rows: usize,
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Parse a delimited ledger export into transactions, categorizing each row
/// with the default keyword table.
///
/// The header row must contain columns named `Date`, `Description` and
/// `Amount` (at any position); a missing column is fatal. Rows whose date or
/// amount fail to parse are dropped individually and counted, never
/// defaulted. Zero surviving rows is a valid outcome, not an error.
pub fn load_ledger<R: Read>(data: R, options: &ImportOptions) -> Result<LedgerImport, ImportError> {
    load_ledger_with(data, options, &Classifier::default())
}

/// As [`load_ledger`], with a caller-supplied classifier.
pub fn load_ledger_with<R: Read>(
    data: R,
    options: &ImportOptions,
    classifier: &Classifier,
) -> Result<LedgerImport, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let date_col = find_column(&headers, "Date")?;
    let description_col = find_column(&headers, "Description")?;
    let amount_col = find_column(&headers, "Amount")?;

    let mut transactions = Vec::new();
    let mut dropped_rows = 0usize;

    for result in reader.records() {
        let record = result?;
        if record.is_empty() {
            continue;
        }

        let date = record
            .get(date_col)
            .and_then(|s| parse_date(s, options.date_format.as_deref()));
        let amount = record.get(amount_col).and_then(parse_amount);

        let (date, amount) = match (date, amount) {
            (Some(d), Some(a)) => (d, a),
            _ => {
                dropped_rows += 1;
                continue;
            }
        };

        let description = record.get(description_col).unwrap_or_default().to_string();
        let category = classifier.classify(&description);
        transactions.push(Transaction::new(date, description, amount, category));
    }

    if dropped_rows > 0 {
        tracing::warn!(dropped_rows, "dropped rows with unparseable date or amount");
    }
    tracing::debug!(count = transactions.len(), "ledger import complete");

    Ok(LedgerImport {
        transactions,
        dropped_rows,
    })
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, ImportError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
}

fn parse_date(s: &str, explicit_format: Option<&str>) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(fmt) = explicit_format {
        return NaiveDate::parse_from_str(s, fmt).ok();
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_amount(s: &str) -> Option<Money> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let (negative, s) = if s.starts_with('(') && s.ends_with(')') {
        (true, &s[1..s.len() - 1])
    } else {
        (false, s)
    };
    let s = s.replace([',', '$', ' '], "");
    let mut dec = Decimal::from_str(&s).ok()?;
    if negative {
        dec = -dec;
    }
    Some(Money::from_decimal(dec))
}
