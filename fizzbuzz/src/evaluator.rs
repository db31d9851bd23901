//! Rule evaluation
//!
//! Converts a single value into its token. Override rules are scanned first in
//! insertion order, then the core rules in precedence order. A value no rule
//! matches stays a number.

use crate::rules::{CoreRule, Rule};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Statistics category for numeric tokens
pub const NUMBER: &str = "number";

/// The token produced for a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// Label of the first rule that matched
    Label(&'a str),
    /// No rule matched
    Number(i64),
}

impl Token<'_> {
    /// Statistics bucket for this token: `number` for anything that reads
    /// as an integer, including numeric rule labels, else the label itself
    pub fn category(&self) -> &str {
        match self {
            Token::Label(label) if label.parse::<i64>().is_ok() => NUMBER,
            Token::Label(label) => label,
            Token::Number(_) => NUMBER,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Label(label) => f.write_str(label),
            Token::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Label of the first rule in `rules` that matches `value`
pub fn first_match(value: i64, rules: &[Arc<dyn Rule>]) -> Option<&str> {
    rules
        .iter()
        .find(|rule| rule.matches(value))
        .map(|rule| rule.label())
}

/// Evaluates values against override rules followed by the core rules
#[derive(Debug, Clone)]
pub struct Evaluator {
    core_rules: Vec<Arc<dyn Rule>>,
    override_rules: Vec<Arc<dyn Rule>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Evaluator {
    pub fn new(override_rules: Vec<Arc<dyn Rule>>) -> Self {
        let core_rules = CoreRule::PRECEDENCE
            .iter()
            .map(|rule| Arc::new(*rule) as Arc<dyn Rule>)
            .collect();

        Self {
            core_rules,
            override_rules,
        }
    }

    pub fn core_rules(&self) -> &[Arc<dyn Rule>] {
        &self.core_rules
    }

    pub fn override_rules(&self) -> &[Arc<dyn Rule>] {
        &self.override_rules
    }

    pub fn has_override_rules(&self) -> bool {
        !self.override_rules.is_empty()
    }

    pub fn evaluate(&self, value: i64) -> Token<'_> {
        if self.has_override_rules() {
            if let Some(label) = first_match(value, &self.override_rules) {
                trace!(value, label, "override rule matched");
                return Token::Label(label);
            }
        }

        match first_match(value, &self.core_rules) {
            Some(label) => Token::Label(label),
            None => Token::Number(value),
        }
    }
}
