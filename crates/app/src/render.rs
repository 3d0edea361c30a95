//! Plain-text rendering of a finished report. The core hands over plain
//! data; everything presentational lives here.

use tally_core::{Category, Money};
use tally_report::{OverspendReport, ReportConfig, SpendingReport};

pub fn print_report(report: &SpendingReport, config: &ReportConfig) {
    if report.dropped_rows > 0 {
        println!(
            "note: {} row(s) dropped (unparseable date or amount)\n",
            report.dropped_rows
        );
    }

    println!("Spending by Category");
    if report.by_category.is_empty() {
        println!("  (no valid transactions)");
    }
    for (category, total) in &report.by_category {
        println!("  {:<15} {:>12}", category.name(), total.to_string());
    }

    println!("\nTop {} Vendors by Spending", config.top_vendors);
    for (vendor, total) in &report.top_vendors {
        println!("  {:<30} {:>12}", vendor, total.to_string());
    }

    if !report.monthly.is_empty() {
        println!("\nMonthly Totals by Category");
        print!("  {:<8}", "Month");
        for category in Category::ALL {
            print!(" {:>13}", category.name());
        }
        println!();
        for (month, row) in report.monthly.rows() {
            print!("  {:<8}", month.to_string());
            for category in Category::ALL {
                let cell = row.get(&category).copied().unwrap_or_else(Money::zero);
                print!(" {:>13}", cell.to_string());
            }
            println!();
        }
    }

    println!();
    match &report.overspending {
        OverspendReport::NoAlerts => println!("No overspending detected."),
        alerts => {
            println!("Overspending Alerts:");
            for line in alerts.messages(config.threshold) {
                println!("  {line}");
            }
        }
    }
}
