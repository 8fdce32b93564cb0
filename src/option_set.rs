//! Conformance target for `option_set!`-declared types.

use std::ops::{BitAnd, BitOr};

/// A set of boolean flags packed into an integer raw value.
///
/// `option_set!` implements the required items for the declared type; the
/// default methods give every option set the usual set algebra on top.
pub trait OptionSet: Sized {
    /// Integer storage for the flag bits.
    type RawValue: Copy
        + PartialEq
        + BitAnd<Output = Self::RawValue>
        + BitOr<Output = Self::RawValue>;

    /// The packed flag bits.
    fn raw_value(&self) -> Self::RawValue;

    /// Rebuild a set from packed flag bits.
    fn from_raw_value(raw_value: Self::RawValue) -> Self;

    /// Whether every flag of `other` is present in `self`.
    fn contains(&self, other: Self) -> bool {
        self.raw_value() & other.raw_value() == other.raw_value()
    }

    /// The set holding the flags of both `self` and `other`.
    fn union(self, other: Self) -> Self {
        Self::from_raw_value(self.raw_value() | other.raw_value())
    }

    /// Add every flag of `other` to `self`.
    fn insert(&mut self, other: Self) {
        *self = Self::from_raw_value(self.raw_value() | other.raw_value());
    }
}
