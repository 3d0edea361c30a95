//! Pure reductions over a transaction sequence: category totals, vendor
//! totals, and the dense month-by-category matrix the trend engine reads.

use std::collections::{BTreeMap, HashMap};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tally_core::{Category, Money, Month, Transaction};

/// Totals per category, sorted by signed total descending. Ties keep
/// first-encountered order (the sort is stable).
pub fn sum_by_category(transactions: &[Transaction]) -> Vec<(Category, Money)> {
    let mut order: Vec<Category> = Vec::new();
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for tx in transactions {
        if !totals.contains_key(&tx.category) {
            order.push(tx.category);
        }
        *totals.entry(tx.category).or_insert_with(Money::zero) += tx.amount;
    }
    let mut out: Vec<(Category, Money)> = order.into_iter().map(|c| (c, totals[&c])).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Top `k` vendors by signed total, grouped on the exact description string.
/// Two descriptions differing only in case or whitespace are distinct
/// vendors. Returns all vendors when fewer than `k` exist.
pub fn top_vendors(transactions: &[Transaction], k: usize) -> Vec<(String, Money)> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for tx in transactions {
        if !totals.contains_key(tx.description.as_str()) {
            order.push(&tx.description);
        }
        *totals.entry(&tx.description).or_insert_with(Money::zero) += tx.amount;
    }
    let mut out: Vec<(String, Money)> = order
        .into_iter()
        .map(|d| (d.to_string(), totals[d]))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out.truncate(k);
    out
}

/// Dense month-by-category grid. Every month between the earliest and
/// latest transaction month is present, and every month row holds a cell
/// for every category, zero-filled. The density is what makes the
/// month-over-month percent change in `alerts` well-defined.
#[derive(Debug, Clone, Default)]
pub struct MonthlyMatrix {
    grid: BTreeMap<Month, BTreeMap<Category, Money>>,
}

impl MonthlyMatrix {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let months: Vec<Month> = match (
            transactions.iter().map(Transaction::month).min(),
            transactions.iter().map(Transaction::month).max(),
        ) {
            (Some(first), Some(last)) => Month::range_inclusive(first, last),
            _ => return MonthlyMatrix::default(),
        };

        let mut grid: BTreeMap<Month, BTreeMap<Category, Money>> = months
            .into_iter()
            .map(|m| {
                let row = Category::ALL.iter().map(|&c| (c, Money::zero())).collect();
                (m, row)
            })
            .collect();

        for tx in transactions {
            if let Some(cell) = grid
                .get_mut(&tx.month())
                .and_then(|row| row.get_mut(&tx.category))
            {
                *cell += tx.amount;
            }
        }

        MonthlyMatrix { grid }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Months in chronological order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.grid.keys().copied()
    }

    /// Cell lookup; zero for anything outside the grid.
    pub fn get(&self, month: Month, category: Category) -> Money {
        self.grid
            .get(&month)
            .and_then(|row| row.get(&category))
            .copied()
            .unwrap_or_else(Money::zero)
    }

    pub fn rows(&self) -> impl Iterator<Item = (Month, &BTreeMap<Category, Money>)> {
        self.grid.iter().map(|(m, row)| (*m, row))
    }
}

// Months render as "YYYY-MM" map keys so the matrix is directly usable as
// JSON, where map keys must be strings.
impl Serialize for MonthlyMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.grid.len()))?;
        for (month, row) in &self.grid {
            map.serialize_entry(&month.to_string(), row)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(date: (i32, u32, u32), desc: &str, cents: i64, category: Category) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            desc,
            Money::from_cents(cents),
            category,
        )
    }

    #[test]
    fn sum_by_category_totals_and_order() {
        let txns = vec![
            tx((2024, 1, 5), "Netflix Inc", -1500, Category::Subscriptions),
            tx((2024, 2, 1), "Local Market", -5000, Category::Groceries),
            tx((2024, 2, 10), "Netflix Inc", -1500, Category::Subscriptions),
        ];
        let sums = sum_by_category(&txns);
        assert_eq!(sums.len(), 2);
        // Signed descending: -30.00 ranks above -50.00.
        assert_eq!(sums[0], (Category::Subscriptions, Money::from_cents(-3000)));
        assert_eq!(sums[1], (Category::Groceries, Money::from_cents(-5000)));
    }

    #[test]
    fn sum_by_category_conserves_total() {
        let txns = vec![
            tx((2024, 1, 1), "A", -1234, Category::Groceries),
            tx((2024, 1, 2), "B", 700, Category::Others),
            tx((2024, 1, 3), "C", -88, Category::Transport),
            tx((2024, 2, 4), "D", -12, Category::Groceries),
        ];
        let input_total: Money = txns.iter().map(|t| t.amount).sum();
        let output_total: Money = sum_by_category(&txns).into_iter().map(|(_, m)| m).sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn sum_by_category_ties_keep_first_encountered_order() {
        let txns = vec![
            tx((2024, 1, 1), "A", -500, Category::Transport),
            tx((2024, 1, 2), "B", -500, Category::Groceries),
        ];
        let sums = sum_by_category(&txns);
        assert_eq!(sums[0].0, Category::Transport);
        assert_eq!(sums[1].0, Category::Groceries);
    }

    #[test]
    fn top_vendors_groups_exact_strings() {
        let txns = vec![
            tx((2024, 1, 5), "Netflix Inc", -1500, Category::Subscriptions),
            tx((2024, 2, 10), "Netflix Inc", -1500, Category::Subscriptions),
            // Case differs: a distinct vendor by design.
            tx((2024, 2, 11), "NETFLIX INC", -1500, Category::Subscriptions),
        ];
        let vendors = top_vendors(&txns, 10);
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[0], ("NETFLIX INC".to_string(), Money::from_cents(-1500)));
        assert_eq!(vendors[1], ("Netflix Inc".to_string(), Money::from_cents(-3000)));
    }

    #[test]
    fn top_vendors_truncates_to_k() {
        let txns: Vec<Transaction> = (0..15)
            .map(|i| tx((2024, 1, 1 + i), &format!("Vendor {i}"), -(i as i64 + 1) * 100, Category::Others))
            .collect();
        let vendors = top_vendors(&txns, 10);
        assert_eq!(vendors.len(), 10);
        // Signed descending: smallest magnitudes first.
        assert_eq!(vendors[0].0, "Vendor 0");
    }

    #[test]
    fn top_vendors_returns_all_when_fewer_than_k() {
        let txns = vec![tx((2024, 1, 1), "Only One", -100, Category::Others)];
        assert_eq!(top_vendors(&txns, 10).len(), 1);
    }

    #[test]
    fn matrix_is_dense_over_gap_months() {
        // Transactions in January and March; February must still be present,
        // zero-filled, for every category.
        let txns = vec![
            tx((2024, 1, 10), "Local Market", -5000, Category::Groceries),
            tx((2024, 3, 10), "Local Market", -6000, Category::Groceries),
        ];
        let matrix = MonthlyMatrix::from_transactions(&txns);
        let months: Vec<String> = matrix.months().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        for (_, row) in matrix.rows() {
            assert_eq!(row.len(), Category::ALL.len());
        }
        let feb = Month { year: 2024, month: 2 };
        for c in Category::ALL {
            assert!(matrix.get(feb, c).is_zero());
        }
    }

    #[test]
    fn matrix_sums_per_cell() {
        let txns = vec![
            tx((2024, 1, 5), "Netflix Inc", -1500, Category::Subscriptions),
            tx((2024, 1, 20), "Hulu", -800, Category::Subscriptions),
        ];
        let matrix = MonthlyMatrix::from_transactions(&txns);
        let jan = Month { year: 2024, month: 1 };
        assert_eq!(matrix.get(jan, Category::Subscriptions), Money::from_cents(-2300));
        assert!(matrix.get(jan, Category::Groceries).is_zero());
    }

    #[test]
    fn matrix_empty_input() {
        let matrix = MonthlyMatrix::from_transactions(&[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.months().count(), 0);
    }
}
