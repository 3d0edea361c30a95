//! Deterministic keyword rules mapping transaction descriptions to
//! spending categories.
//!
//! The rule table is an ordered list evaluated first-match-wins, so the
//! category priority is explicit in the table itself rather than hidden in
//! map iteration order. The fallback lives in the table too, as a terminal
//! entry with no keywords.

use regex::Regex;
use tally_core::Category;

/// Default keyword table. Order matters: when a description contains
/// keywords from two categories, the earlier entry wins (e.g. "gas station"
/// classifies as Utilities because "gas" is tested before Transport's
/// keywords).
pub const DEFAULT_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Groceries, &["supermarket", "grocery", "market", "food"]),
    (
        Category::Utilities,
        &["electricity", "water", "gas", "utility", "internet", "phone"],
    ),
    (
        Category::Subscriptions,
        &["netflix", "spotify", "subscription", "hulu", "amazon prime"],
    ),
    (
        Category::Restaurants,
        &["restaurant", "cafe", "bar", "diner", "food delivery"],
    ),
    (
        Category::Transport,
        &["uber", "lyft", "bus", "metro", "train", "taxi", "fuel", "gas station"],
    ),
    (
        Category::Entertainment,
        &["cinema", "movie", "concert", "theater", "ticket"],
    ),
    (
        Category::Healthcare,
        &["pharmacy", "doctor", "hospital", "clinic", "dental"],
    ),
    (Category::Others, &[]),
];

/// One rule with its keywords precompiled into a single alternation regex.
/// `matcher` is `None` for the terminal fallback entry.
struct CompiledRule {
    category: Category,
    matcher: Option<Regex>,
}

pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Compile an ordered keyword table. Keywords are matched whole-word
    /// and case-insensitively; they are regex-escaped, so the table holds
    /// plain strings, not patterns.
    pub fn new(table: &[(Category, &[&str])]) -> Self {
        let rules = table
            .iter()
            .map(|(category, keywords)| {
                let matcher = if keywords.is_empty() {
                    None
                } else {
                    let alternation = keywords
                        .iter()
                        .map(|kw| regex::escape(kw))
                        .collect::<Vec<_>>()
                        .join("|");
                    // Only a compiled matcher may be stored: a `None` entry is
                    // the always-match terminal fallback, so degrading a failed
                    // compile to `None` would swallow every description.
                    // Escaped keywords always compile.
                    Some(
                        Regex::new(&format!(r"\b(?:{alternation})\b"))
                            .expect("escaped keyword alternation must compile"),
                    )
                };
                CompiledRule {
                    category: *category,
                    matcher,
                }
            })
            .collect();
        Self { rules }
    }

    /// First category whose keyword set matches the description on a word
    /// boundary; the terminal fallback when none does.
    pub fn classify(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            match &rule.matcher {
                Some(re) if re.is_match(&desc) => return rule.category,
                None => return rule.category,
                _ => {}
            }
        }
        Category::Others
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(DEFAULT_KEYWORDS)
    }
}
