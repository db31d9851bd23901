//! Digit decomposition
//!
//! Splits a non-negative integer into its digits, least significant first.

use std::iter::FusedIterator;

/// Lazy iterator over the digits of a number in a given base.
///
/// Zero has no digits: `Digits::base10(0)` yields nothing. Rules built on top
/// of this (see [`crate::LuckRule`]) rely on that.
#[derive(Debug, Clone)]
pub struct Digits {
    remaining: u64,
    base: u64,
}

impl Digits {
    /// `base` must be at least 2; it is not checked.
    pub fn new(number: u64, base: u64) -> Self {
        Self {
            remaining: number,
            base,
        }
    }

    pub fn base10(number: u64) -> Self {
        Self::new(number, 10)
    }
}

impl Iterator for Digits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }

        let digit = self.remaining % self.base;
        self.remaining /= self.base;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut count = 0;
        let mut rest = self.remaining;
        while rest != 0 {
            rest /= self.base;
            count += 1;
        }
        (count, Some(count))
    }
}

impl FusedIterator for Digits {}
