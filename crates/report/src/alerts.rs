//! Month-over-month overspending detection on the dense monthly matrix.

use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{Category, Month};

use crate::aggregate::MonthlyMatrix;

/// One threshold breach: `category` spending changed by `pct_change`
/// relative to the prior month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub month: Month,
    pub category: Category,
    pub pct_change: Decimal,
}

/// Outcome of a detection run. Zero alerts is a distinct, valid end state,
/// not an error and not an absent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OverspendReport {
    NoAlerts,
    Alerts(Vec<Alert>),
}

impl OverspendReport {
    pub fn alerts(&self) -> &[Alert] {
        match self {
            OverspendReport::NoAlerts => &[],
            OverspendReport::Alerts(alerts) => alerts,
        }
    }

    /// One human-readable line per alerting month, categories grouped:
    /// `In 2024-02: spending increased >20% in Groceries, Transport`.
    pub fn messages(&self, threshold: Decimal) -> Vec<String> {
        let pct = (threshold * Decimal::from(100)).normalize();
        let mut lines: Vec<String> = Vec::new();
        let mut current: Option<(Month, Vec<&str>)> = None;

        for alert in self.alerts() {
            match &mut current {
                Some((month, cats)) if *month == alert.month => cats.push(alert.category.name()),
                _ => {
                    if let Some((month, cats)) = current.take() {
                        lines.push(format_line(month, &cats, pct));
                    }
                    current = Some((alert.month, vec![alert.category.name()]));
                }
            }
        }
        if let Some((month, cats)) = current {
            lines.push(format_line(month, &cats, pct));
        }
        lines
    }
}

fn format_line(month: Month, categories: &[&str], pct: Decimal) -> String {
    format!(
        "In {month}: spending increased >{pct}% in {}",
        categories.join(", ")
    )
}

/// Flag every (month, category) cell whose spending grew more than
/// `threshold` (strict) relative to the prior month.
///
/// The first month of the range has no baseline and never alerts. A zero
/// prior-month sum defines the change as zero, so a category's first active
/// month is never flagged.
pub fn detect_overspending(matrix: &MonthlyMatrix, threshold: Decimal) -> OverspendReport {
    let months: Vec<Month> = matrix.months().collect();
    let mut alerts = Vec::new();

    for window in months.windows(2) {
        let (prev, month) = (window[0], window[1]);
        for category in Category::ALL {
            let pct_change = matrix.get(month, category).pct_change_from(matrix.get(prev, category));
            if pct_change > threshold {
                alerts.push(Alert {
                    month,
                    category,
                    pct_change,
                });
            }
        }
    }

    if alerts.is_empty() {
        OverspendReport::NoAlerts
    } else {
        tracing::debug!(count = alerts.len(), "overspending alerts raised");
        OverspendReport::Alerts(alerts)
    }
}
