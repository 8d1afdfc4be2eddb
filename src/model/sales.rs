use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SALES_DATE_FORMAT: &str = "%Y-%m-%d";

/// Tickets sold per calendar day, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesLog(BTreeMap<String, i64>);

impl SalesLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn today() -> String {
        Local::now().format(SALES_DATE_FORMAT).to_string()
    }

    /// Adds `quantity` to the counter for `date`. The quantity is not checked.
    pub fn record(&mut self, date: &str, quantity: i64) {
        *self.0.entry(date.to_string()).or_insert(0) += quantity;
    }

    pub fn get(&self, date: &str) -> i64 {
        self.0.get(date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(date, count)| (date.as_str(), *count))
    }

    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }
}

impl FromIterator<(String, i64)> for SalesLog {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        SalesLog(iter.into_iter().collect())
    }
}
