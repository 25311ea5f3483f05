//! Local symptom resolution against the fallback table.
//!
//! Two passes:
//! 1. Exact: every normalized key found in the table contributes its list.
//! 2. Substring (only when pass 1 found nothing): a table entry contributes
//!    its whole list when any of its conditions, or its key read with spaces,
//!    contains a raw input term or is contained in one.
//!
//! Pass 2 has no minimum term length, so a one-letter term matches broadly,
//! and an empty condition name is contained in every term.

use crate::fallback_table::{FallbackTable, TableEntry};
use crate::normalizer::SymptomQuery;
use crate::types::QueryResult;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<FallbackTable>,
}

impl Resolver {
    pub fn new(table: Arc<FallbackTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FallbackTable {
        &self.table
    }

    /// Resolve a normalized query. Empty result means no match.
    pub fn resolve(&self, query: &SymptomQuery) -> QueryResult {
        let exact: Vec<String> = query
            .keys
            .iter()
            .filter_map(|key| self.table.get(key))
            .flat_map(|conditions| conditions.iter().cloned())
            .collect();

        if !exact.is_empty() {
            return QueryResult::from_ordered(exact);
        }

        debug!("No exact key match for {:?}, widening to substring match", query.keys);

        let widened: Vec<String> = self
            .table
            .entries()
            .filter(|entry| entry_matches(entry, &query.terms))
            .flat_map(|entry| entry.conditions.iter().cloned())
            .collect();

        QueryResult::from_ordered(widened)
    }

    /// Normalize and resolve raw user input
    pub fn resolve_raw(&self, raw: &str) -> QueryResult {
        self.resolve(&crate::normalizer::normalize(raw))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Arc::new(FallbackTable::builtin()))
    }
}

fn entry_matches(entry: &TableEntry, terms: &[String]) -> bool {
    let key = entry.key.replace('_', " ");
    std::iter::once(key)
        .chain(entry.conditions.iter().map(|c| c.to_lowercase()))
        .any(|candidate| terms.iter().any(|term| contains_either_way(&candidate, term)))
}

fn contains_either_way(candidate: &str, term: &str) -> bool {
    candidate.contains(term) || term.contains(candidate)
}
