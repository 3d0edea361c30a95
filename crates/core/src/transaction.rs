use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use super::period::Month;

/// One validated ledger row. Built by the importer, immutable afterwards;
/// the category is assigned exactly once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: Category,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money, category: Category) -> Self {
        Transaction {
            date,
            description: description.into(),
            amount,
            category,
        }
    }

    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}
