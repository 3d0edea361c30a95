pub mod aggregate;
pub mod alerts;
pub mod pipeline;

pub use aggregate::{sum_by_category, top_vendors, MonthlyMatrix};
pub use alerts::{detect_overspending, Alert, OverspendReport};
pub use pipeline::{run, ReportConfig, SpendingReport};
