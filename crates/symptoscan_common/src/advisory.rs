//! Duration advisory.

use serde::{Deserialize, Serialize};

pub const PROLONGED_ADVISORY: &str = "Notice: Symptoms lasting 1-2 weeks or longer may need professional evaluation. Consider consulting a healthcare provider.";

/// How long the symptoms have lasted, as picked on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationClass {
    OneToTwoWeeks,
    TwoPlusWeeks,
    Other(String),
}

impl DurationClass {
    pub fn parse(value: &str) -> Self {
        match value {
            "1-2" => DurationClass::OneToTwoWeeks,
            "2+" => DurationClass::TwoPlusWeeks,
            other => DurationClass::Other(other.to_string()),
        }
    }

    pub fn is_prolonged(&self) -> bool {
        matches!(self, DurationClass::OneToTwoWeeks | DurationClass::TwoPlusWeeks)
    }
}

/// Advisory text for prolonged symptoms, `None` otherwise
pub fn duration_advisory(value: &str) -> Option<&'static str> {
    DurationClass::parse(value)
        .is_prolonged()
        .then_some(PROLONGED_ADVISORY)
}
