//! Summary length tiers and their sentence budgets.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much of the document a summary keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

/// Fraction of sentences kept by a tier, with a minimum count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBudget {
    pub ratio: f64,
    pub floor: usize,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [LengthTier::Short, LengthTier::Medium, LengthTier::Long];

    /// Parse a tier name, case-insensitively. Anything unrecognized is `Medium`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "short" => LengthTier::Short,
            "long" => LengthTier::Long,
            _ => LengthTier::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        }
    }

    pub fn budget(&self) -> TierBudget {
        match self {
            LengthTier::Short => TierBudget { ratio: 0.10, floor: 1 },
            LengthTier::Medium => TierBudget { ratio: 0.20, floor: 3 },
            LengthTier::Long => TierBudget { ratio: 0.35, floor: 5 },
        }
    }

    /// Sentences to keep out of `n`: `max(floor, ceil(n * ratio))`.
    ///
    /// May exceed `n` for short documents; callers cap it.
    pub fn keep_count(&self, n: usize) -> usize {
        let budget = self.budget();
        let scaled = (n as f64 * budget.ratio).ceil() as usize;
        scaled.max(budget.floor)
    }
}

impl FromStr for LengthTier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
