use crate::evaluator::Token;
use std::collections::BTreeMap;
use std::fmt;

/// Frequency of each token category in a generated sequence.
///
/// Categories are rule labels plus `number` for values no rule matched, kept
/// in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    frequencies: BTreeMap<String, u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> Self {
        let mut statistics = Self::new();
        for token in tokens {
            statistics.record(&token);
        }
        statistics
    }

    pub fn record(&mut self, token: &Token<'_>) {
        *self
            .frequencies
            .entry(token.category().to_string())
            .or_insert(0) += 1;
    }

    /// Count for a category, zero when it never occurred
    pub fn get(&self, category: &str) -> u64 {
        self.frequencies.get(category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.frequencies
            .iter()
            .map(|(category, count)| (category.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum over all categories, equal to the number of tokens recorded
    pub fn total(&self) -> u64 {
        self.frequencies.values().sum()
    }

    pub fn into_map(self) -> BTreeMap<String, u64> {
        self.frequencies
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, count)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", category, count)?;
        }
        Ok(())
    }
}
