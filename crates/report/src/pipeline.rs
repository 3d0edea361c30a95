//! One-shot pipeline: raw CSV bytes in, finished spending report out.
//!
//! Every invocation owns its data exclusively; nothing is shared or cached
//! across runs, so concurrent callers need no coordination.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{Category, Money};
use tally_import::{load_ledger, ImportError, ImportOptions};

use crate::aggregate::{self, MonthlyMatrix};
use crate::alerts::{detect_overspending, OverspendReport};

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Month-over-month increase above which a category alerts. Strict
    /// comparison: a change of exactly the threshold does not alert.
    pub threshold: Decimal,
    /// How many vendors the vendor table keeps.
    pub top_vendors: usize,
    pub import: ImportOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            threshold: Decimal::new(20, 2),
            top_vendors: 10,
            import: ImportOptions::default(),
        }
    }
}

/// Everything the core hands to a rendering surface, as plain data.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub by_category: Vec<(Category, Money)>,
    pub top_vendors: Vec<(String, Money)>,
    pub monthly: MonthlyMatrix,
    pub overspending: OverspendReport,
    pub dropped_rows: usize,
}

/// Run the full load → aggregate → alert pipeline over one CSV stream.
///
/// The only fatal failures are transport-level: missing required columns or
/// an unreadable stream. A file whose every row fails validation still
/// yields a report (with empty views and a nonzero `dropped_rows`).
pub fn run<R: Read>(data: R, config: &ReportConfig) -> Result<SpendingReport, ImportError> {
    let import = load_ledger(data, &config.import)?;
    tracing::debug!(
        transactions = import.transactions.len(),
        dropped = import.dropped_rows,
        "ledger loaded"
    );

    let monthly = MonthlyMatrix::from_transactions(&import.transactions);
    let overspending = detect_overspending(&monthly, config.threshold);

    Ok(SpendingReport {
        by_category: aggregate::sum_by_category(&import.transactions),
        top_vendors: aggregate::top_vendors(&import.transactions, config.top_vendors),
        monthly,
        overspending,
        dropped_rows: import.dropped_rows,
    })
}
