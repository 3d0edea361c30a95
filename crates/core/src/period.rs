use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date truncated to year + month granularity. Used as the
/// grouping key for trend analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Month { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month immediately after this one.
    pub fn succ(self) -> Self {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month from `start` through `end`, inclusive. Empty when
    /// `start > end`.
    pub fn range_inclusive(start: Month, end: Month) -> Vec<Month> {
        let mut months = Vec::new();
        let mut current = start;
        while current <= end {
            months.push(current);
            current = current.succ();
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Month::new(2024, 0).is_none());
        assert!(Month::new(2024, 13).is_none());
        assert!(Month::new(2024, 12).is_some());
    }

    #[test]
    fn from_date_truncates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(Month::from_date(d), Month { year: 2024, month: 3 });
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(Month { year: 2024, month: 5 }.to_string(), "2024-05");
        assert_eq!(Month { year: 2024, month: 11 }.to_string(), "2024-11");
    }

    #[test]
    fn succ_wraps_year() {
        assert_eq!(
            Month { year: 2023, month: 12 }.succ(),
            Month { year: 2024, month: 1 }
        );
        assert_eq!(
            Month { year: 2024, month: 6 }.succ(),
            Month { year: 2024, month: 7 }
        );
    }

    #[test]
    fn ordering_is_chronological_not_lexical() {
        // 2024-02 < 2024-12 < 2025-01
        let feb = Month { year: 2024, month: 2 };
        let dec = Month { year: 2024, month: 12 };
        let jan = Month { year: 2025, month: 1 };
        assert!(feb < dec);
        assert!(dec < jan);
    }

    #[test]
    fn range_inclusive_spans_year_boundary() {
        let months = Month::range_inclusive(
            Month { year: 2023, month: 11 },
            Month { year: 2024, month: 2 },
        );
        assert_eq!(months.len(), 4);
        assert_eq!(months[0].to_string(), "2023-11");
        assert_eq!(months[3].to_string(), "2024-02");
    }

    #[test]
    fn range_inclusive_single_month() {
        let m = Month { year: 2024, month: 6 };
        assert_eq!(Month::range_inclusive(m, m), vec![m]);
    }

    #[test]
    fn range_inclusive_inverted_is_empty() {
        let a = Month { year: 2024, month: 6 };
        let b = Month { year: 2024, month: 5 };
        assert!(Month::range_inclusive(a, b).is_empty());
    }
}
