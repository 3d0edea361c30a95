pub mod csv;
pub mod rules;

pub use csv::{load_ledger, load_ledger_with, ImportError, ImportOptions, LedgerImport};
pub use rules::{Classifier, DEFAULT_KEYWORDS};
