//! Report sort strategies
//!
//! Interchangeable orderings for category report rows, looked up by name.

use super::ReportRow;

/// An ordering over report rows
pub trait ReportSortStrategy: Send + Sync {
    /// Stable name used to select the strategy
    fn name(&self) -> &'static str;

    /// One-line description for help output
    fn description(&self) -> &'static str;

    /// Return a sorted copy of `rows`; the input is left untouched
    fn sort(&self, rows: &[ReportRow]) -> Vec<ReportRow>;
}

/// Largest amount first, ties broken by name
#[derive(Debug, Default, Clone, Copy)]
pub struct AmountDescSort;

impl ReportSortStrategy for AmountDescSort {
    fn name(&self) -> &'static str {
        "amount-desc"
    }

    fn description(&self) -> &'static str {
        "By amount, largest first"
    }

    fn sort(&self, rows: &[ReportRow]) -> Vec<ReportRow> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        sorted
    }
}

/// Alphabetical by category name
#[derive(Debug, Default, Clone, Copy)]
pub struct NameAscSort;

impl ReportSortStrategy for NameAscSort {
    fn name(&self) -> &'static str {
        "name-asc"
    }

    fn description(&self) -> &'static str {
        "By category name, A to Z"
    }

    fn sort(&self, rows: &[ReportRow]) -> Vec<ReportRow> {
        let mut sorted = rows.to_vec();
        sorted.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        sorted
    }
}

/// Strategies in registration order
pub struct SortRegistry {
    strategies: Vec<Box<dyn ReportSortStrategy>>,
}

impl SortRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy
    pub fn register(&mut self, strategy: Box<dyn ReportSortStrategy>) {
        self.strategies.push(strategy);
    }

    /// Find a strategy by name, falling back to the first registered one
    ///
    /// Returns `None` only when the registry is empty.
    pub fn select(&self, name: &str) -> Option<&dyn ReportSortStrategy> {
        let wanted = name.trim();
        self.strategies
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(wanted))
            .or_else(|| self.strategies.first())
            .map(|s| s.as_ref())
    }

    /// Whether a strategy with this exact name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.strategies
            .iter()
            .any(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Names of every registered strategy
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AmountDescSort));
        registry.register(Box::new(NameAscSort));
        registry
    }
}
