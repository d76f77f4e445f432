//! Completion percentage value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage, always within `0..=100`.
///
/// Construction never fails: out-of-range input is clamped. Rejection of
/// out-of-range input is the validator's job, not this type's.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct CompletionPercentage(u8);

impl CompletionPercentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);
    /// One hundred percent.
    pub const COMPLETE: Self = Self(100);

    /// Creates a percentage, clamping `value` into `0..=100`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        u8::try_from(value.clamp(0, 100)).map_or(Self::ZERO, Self)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for CompletionPercentage {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<CompletionPercentage> for u8 {
    fn from(value: CompletionPercentage) -> Self {
        value.0
    }
}

impl fmt::Display for CompletionPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
