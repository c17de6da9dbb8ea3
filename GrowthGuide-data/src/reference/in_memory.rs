use std::collections::HashMap;

use crate::models::{AgeTable, Gender, Metric};
use super::ReferenceTableStore;

/// In-memory reference store keyed by (metric, gender)
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    tables: HashMap<(Metric, Gender), AgeTable>,
}

impl InMemoryReferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the table for a (metric, gender) pair
    pub fn with_table(mut self, metric: Metric, gender: Gender, table: AgeTable) -> Self {
        self.insert_table(metric, gender, table);
        self
    }

    /// Add or replace the table for a (metric, gender) pair
    pub fn insert_table(&mut self, metric: Metric, gender: Gender, table: AgeTable) {
        self.tables.insert((metric, gender), table);
    }

    /// Total number of age rows across every table
    pub fn row_count(&self) -> usize {
        self.tables.values().map(AgeTable::len).sum()
    }
}

impl ReferenceTableStore for InMemoryReferenceStore {
    fn table(&self, metric: Metric, gender: Gender) -> Option<&AgeTable> {
        self.tables.get(&(metric, gender))
    }

    fn available_tables(&self) -> Vec<(Metric, Gender)> {
        let mut pairs: Vec<(Metric, Gender)> = self.tables.keys().copied().collect();
        pairs.sort_by_key(|(metric, gender)| (metric.as_str(), gender.as_str()));
        pairs
    }
}
