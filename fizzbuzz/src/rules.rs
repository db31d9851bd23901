//! Core and override rules
//!
//! A rule decides whether it matches a value and supplies the label that
//! replaces the value when it does.

use crate::digits::Digits;
use std::fmt;

pub const FIZZ: &str = "fizz";
pub const BUZZ: &str = "buzz";
pub const FIZZBUZZ: &str = "fizzbuzz";
pub const LUCK: &str = "luck";

/// A rule that can be installed either as a core rule or as an override
/// that takes precedence over the core rules.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Whether `value` matches the rule
    fn matches(&self, value: i64) -> bool;

    /// Text that replaces a matched value
    fn label(&self) -> &str;

    /// Human readable condition, used when listing rules
    fn description(&self) -> &str {
        "custom rule"
    }
}

/// The three built-in rules of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreRule {
    /// Divisible by 3 and 5
    FizzBuzz,
    /// Divisible by 3
    Fizz,
    /// Divisible by 5
    Buzz,
}

impl CoreRule {
    /// Core rules in precedence order, most specific first, so multiples of
    /// 15 never stop at `fizz` or `buzz`.
    pub const PRECEDENCE: [CoreRule; 3] = [CoreRule::FizzBuzz, CoreRule::Fizz, CoreRule::Buzz];
}

impl Rule for CoreRule {
    fn matches(&self, value: i64) -> bool {
        match self {
            CoreRule::FizzBuzz => CoreRule::Fizz.matches(value) && CoreRule::Buzz.matches(value),
            CoreRule::Fizz => value % 3 == 0,
            CoreRule::Buzz => value % 5 == 0,
        }
    }

    fn label(&self) -> &str {
        match self {
            CoreRule::FizzBuzz => FIZZBUZZ,
            CoreRule::Fizz => FIZZ,
            CoreRule::Buzz => BUZZ,
        }
    }

    fn description(&self) -> &str {
        match self {
            CoreRule::FizzBuzz => "divisible by 3 and 5",
            CoreRule::Fizz => "divisible by 3",
            CoreRule::Buzz => "divisible by 5",
        }
    }
}

/// Override rule matching any number whose decimal digits contain a 3.
///
/// Negative numbers and zero have no digits and never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LuckRule;

impl Rule for LuckRule {
    fn matches(&self, value: i64) -> bool {
        match u64::try_from(value) {
            Ok(value) => Digits::base10(value).any(|digit| digit == 3),
            Err(_) => false,
        }
    }

    fn label(&self) -> &str {
        LUCK
    }

    fn description(&self) -> &str {
        "contains the digit 3"
    }
}

/// A caller-defined rule built from a label and a predicate.
///
/// ```rust
/// use fizzbuzz::{PredicateRule, Rule};
///
/// let bang = PredicateRule::new("bang", |v| v % 7 == 0);
/// assert!(bang.matches(14));
/// assert_eq!(bang.label(), "bang");
/// ```
pub struct PredicateRule {
    label: String,
    predicate: Box<dyn Fn(i64) -> bool + Send + Sync>,
}

impl PredicateRule {
    pub fn new(
        label: impl Into<String>,
        predicate: impl Fn(i64) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl Rule for PredicateRule {
    fn matches(&self, value: i64) -> bool {
        (self.predicate)(value)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
