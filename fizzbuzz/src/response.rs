use serde::Serialize;
use std::collections::BTreeMap;

/// Structured result of a FizzBuzz run
///
/// Carries the same information as [`crate::FizzBuzz::output`] in a form that
/// serializes cleanly. `statistics` is only present when the generator was
/// built with statistics enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub from: i64,
    pub to: i64,
    pub tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<BTreeMap<String, u64>>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
