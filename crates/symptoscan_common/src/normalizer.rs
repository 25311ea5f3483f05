//! Free-text symptom input → symptom keys.

use crate::error::SymptomError;
use crate::types::SymptomKey;

/// A normalized query.
///
/// `keys` are the lookup keys (`"sore throat"` → `"sore_throat"`), `terms`
/// keep the spaces and feed the substring pass of the resolver. Both are in
/// input order and have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomQuery {
    pub keys: Vec<SymptomKey>,
    pub terms: Vec<String>,
}

impl SymptomQuery {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Reject queries with nothing left after normalization
    pub fn require_non_empty(self) -> Result<Self, SymptomError> {
        if self.is_empty() {
            Err(SymptomError::NoSymptoms)
        } else {
            Ok(self)
        }
    }
}

/// Split on commas, trim, lowercase, drop empties, spaces become underscores.
pub fn normalize(raw: &str) -> SymptomQuery {
    let terms: Vec<String> = raw
        .split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|segment| !segment.is_empty())
        .collect();

    let keys = terms.iter().map(|term| term.replace(' ', "_")).collect();

    SymptomQuery { keys, terms }
}
