//! FizzBuzz generation
//!
//! A [`FizzBuzz`] is an immutable description of a run: the inclusive range,
//! the override rules and whether statistics are appended. Instances are
//! created through [`Builder`], which validates the range.

use crate::evaluator::{Evaluator, Token};
use crate::response::Report;
use crate::rules::{LuckRule, Rule};
use crate::statistics::Statistics;
use crate::{FizzBuzzError, FizzBuzzResult};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const SEPARATOR: &str = " ";
const LINE_SEPARATOR: &str = "\n";

/// An immutable FizzBuzz run over an ascending range of numbers.
///
/// The output is generated on first access and cached for the lifetime of
/// the instance.
pub struct FizzBuzz {
    from: i64,
    to: i64,
    evaluator: Evaluator,
    with_statistics: bool,
    output: OnceLock<String>,
}

impl FizzBuzz {
    pub fn builder() -> Builder {
        Builder::new()
    }

    fn new(
        from: i64,
        to: i64,
        override_rules: Vec<Arc<dyn Rule>>,
        with_statistics: bool,
    ) -> FizzBuzzResult<Self> {
        if from <= 0 || to <= 0 {
            return Err(FizzBuzzError::invalid_configuration(format!(
                "Inputs must be positive - from({}) to({})",
                from, to
            )));
        }
        if from > to {
            return Err(FizzBuzzError::invalid_configuration(format!(
                "from({}) cannot be bigger than to({})",
                from, to
            )));
        }

        debug!(
            from,
            to,
            override_rules = override_rules.len(),
            with_statistics,
            "built fizzbuzz"
        );

        Ok(Self {
            from,
            to,
            evaluator: Evaluator::new(override_rules),
            with_statistics,
            output: OnceLock::new(),
        })
    }

    pub fn from(&self) -> i64 {
        self.from
    }

    pub fn to(&self) -> i64 {
        self.to
    }

    pub fn with_statistics(&self) -> bool {
        self.with_statistics
    }

    pub fn core_rules(&self) -> &[Arc<dyn Rule>] {
        self.evaluator.core_rules()
    }

    pub fn override_rules(&self) -> &[Arc<dyn Rule>] {
        self.evaluator.override_rules()
    }

    /// Number of values in the range
    pub fn len(&self) -> usize {
        (self.to - self.from + 1) as usize
    }

    /// Always false: a valid range holds at least one value
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Token for every value of the range, in ascending order
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> + '_ {
        (self.from..=self.to).map(move |value| self.evaluator.evaluate(value))
    }

    /// Label frequencies over the range, regardless of the statistics flag
    pub fn statistics(&self) -> Statistics {
        Statistics::from_tokens(self.tokens())
    }

    /// Space separated tokens, followed by the statistics block when enabled.
    ///
    /// Computed once; later calls return the cached string.
    pub fn output(&self) -> &str {
        self.output.get_or_init(|| self.generate())
    }

    pub fn report(&self) -> Report {
        Report {
            from: self.from,
            to: self.to,
            tokens: self.tokens().map(|token| token.to_string()).collect(),
            statistics: self
                .with_statistics
                .then(|| self.statistics().into_map()),
        }
    }

    fn generate(&self) -> String {
        debug!(from = self.from, to = self.to, "generating output");

        let mut output = self
            .tokens()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        if self.with_statistics {
            output.push_str(LINE_SEPARATOR);
            output.push_str(&self.statistics().to_string());
        }

        output
    }
}

fn same_labels(left: &[Arc<dyn Rule>], right: &[Arc<dyn Rule>]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| l.label() == r.label())
}

/// Two runs are equal when they cover the same range with the same rule
/// labels, in the same order, and the same statistics flag.
impl PartialEq for FizzBuzz {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.with_statistics == other.with_statistics
            && same_labels(self.core_rules(), other.core_rules())
            && same_labels(self.override_rules(), other.override_rules())
    }
}

impl Eq for FizzBuzz {}

impl fmt::Debug for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = |rules: &[Arc<dyn Rule>]| -> Vec<String> {
            rules.iter().map(|rule| rule.label().to_string()).collect()
        };

        f.debug_struct("FizzBuzz")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("core_rules", &labels(self.core_rules()))
            .field("override_rules", &labels(self.override_rules()))
            .field("with_statistics", &self.with_statistics)
            .finish()
    }
}

/// Builder for immutable [`FizzBuzz`] instances.
///
/// Defaults to the range 1 to 20 with no override rules and no statistics.
/// `build` borrows the builder, so one builder can produce several instances;
/// clone it to branch a configuration.
#[derive(Debug, Clone)]
pub struct Builder {
    from: i64,
    to: i64,
    override_rules: Vec<Arc<dyn Rule>>,
    with_statistics: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            from: 1,
            to: 20,
            override_rules: Vec::new(),
            with_statistics: false,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value of the range. Must be positive.
    pub fn from(mut self, from: i64) -> Self {
        self.from = from;
        self
    }

    /// Last value of the range, inclusive. Must be positive.
    pub fn to(mut self, to: i64) -> Self {
        self.to = to;
        self
    }

    /// Add a rule that takes precedence over the core rules.
    ///
    /// Rules added earlier take precedence over rules added later.
    pub fn with_override_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.override_rules.push(Arc::new(rule));
        self
    }

    pub fn with_luck_rule(self) -> Self {
        self.with_override_rule(LuckRule)
    }

    /// Append label frequencies to the output
    pub fn with_statistics(mut self) -> Self {
        self.with_statistics = true;
        self
    }

    pub fn build(&self) -> FizzBuzzResult<FizzBuzz> {
        FizzBuzz::new(
            self.from,
            self.to,
            self.override_rules.clone(),
            self.with_statistics,
        )
    }
}
