pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use period::Month;
pub use transaction::Transaction;
