use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of spending categories. Declaration order is the classifier's
/// priority order: when a description matches keywords from more than one
/// category, the earlier category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Utilities,
    Subscriptions,
    Restaurants,
    Transport,
    Entertainment,
    Healthcare,
    /// Fallback when no keyword matches.
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Utilities,
        Category::Subscriptions,
        Category::Restaurants,
        Category::Transport,
        Category::Entertainment,
        Category::Healthcare,
        Category::Others,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Subscriptions => "Subscriptions",
            Category::Restaurants => "Restaurants",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
