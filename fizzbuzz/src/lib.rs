//! # FizzBuzz Engine
//!
//! Counts over an ascending range of numbers replacing:
//! - any number divisible by three with the word `fizz`
//! - any number divisible by five with the word `buzz`
//! - any number divisible by three and five with the word `fizzbuzz`
//!
//! ## Quick Start
//!
//! ```rust
//! use fizzbuzz::{FizzBuzz, FizzBuzzResult};
//!
//! fn main() -> FizzBuzzResult<()> {
//!     let fizzbuzz = FizzBuzz::builder().from(1).to(5).build()?;
//!     assert_eq!(fizzbuzz.output(), "1 2 fizz 4 buzz");
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Rules
//! A rule matches a value and supplies the label that replaces it. The core
//! rules (fizzbuzz, fizz, buzz) are always installed.
//!
//! ### Override rules
//! Override rules are evaluated before the core rules, in the order they were
//! added to the builder. The [`LuckRule`] replaces any number containing the
//! digit 3 with `luck`.
//!
//! ### Statistics
//! When enabled, the output ends with one `label: count` line per distinct
//! label, with numbers counted under `number`.

pub mod digits;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod response;
pub mod rules;
pub mod statistics;

pub use digits::Digits;
pub use error::FizzBuzzError;
pub use evaluator::{Evaluator, Token};
pub use generator::{Builder, FizzBuzz};
pub use response::Report;
pub use rules::{CoreRule, LuckRule, PredicateRule, Rule};
pub use statistics::Statistics;

/// Result type for FizzBuzz operations
pub type FizzBuzzResult<T> = Result<T, FizzBuzzError>;

#[cfg(test)]
mod tests;
