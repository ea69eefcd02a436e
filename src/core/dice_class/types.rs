//! Core types for dice classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DiceClassError;

// ============================================================================
// DiceClass
// ============================================================================

/// A combat randomness tier, expressed as a die expression.
///
/// Variants are declared in rank order, so the derived `Ord` matches
/// [`DiceClass::rank`]. `D2d100` is the top rank and is normally reserved
/// for legendary and mythical creatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiceClass {
    D1d4,
    D1d6,
    D1d8,
    D1d10,
    D1d12,
    D2d6,
    D2d8,
    D2d10,
    D2d12,
    D2d100,
}

impl DiceClass {
    /// All classes, indexed by rank.
    pub const ALL: [DiceClass; 10] = [
        DiceClass::D1d4,
        DiceClass::D1d6,
        DiceClass::D1d8,
        DiceClass::D1d10,
        DiceClass::D1d12,
        DiceClass::D2d6,
        DiceClass::D2d8,
        DiceClass::D2d10,
        DiceClass::D2d12,
        DiceClass::D2d100,
    ];

    /// Highest rank index.
    pub const MAX_RANK: usize = 9;

    /// 0-based position in [`DiceClass::ALL`].
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Look up a class by rank. Returns `None` past [`DiceClass::MAX_RANK`].
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// The die expression, e.g. `"2d8"`.
    pub fn notation(self) -> &'static str {
        match self {
            DiceClass::D1d4 => "1d4",
            DiceClass::D1d6 => "1d6",
            DiceClass::D1d8 => "1d8",
            DiceClass::D1d10 => "1d10",
            DiceClass::D1d12 => "1d12",
            DiceClass::D2d6 => "2d6",
            DiceClass::D2d8 => "2d8",
            DiceClass::D2d10 => "2d10",
            DiceClass::D2d12 => "2d12",
            DiceClass::D2d100 => "2d100",
        }
    }

    /// Number of dice rolled.
    pub fn dice_count(self) -> u32 {
        if self.rank() < DiceClass::D2d6.rank() {
            1
        } else {
            2
        }
    }

    /// Number of faces on each die.
    pub fn die_size(self) -> u32 {
        match self {
            DiceClass::D1d4 => 4,
            DiceClass::D1d6 | DiceClass::D2d6 => 6,
            DiceClass::D1d8 | DiceClass::D2d8 => 8,
            DiceClass::D1d10 | DiceClass::D2d10 => 10,
            DiceClass::D1d12 | DiceClass::D2d12 => 12,
            DiceClass::D2d100 => 100,
        }
    }
}

impl fmt::Display for DiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for DiceClass {
    type Err = DiceClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.notation() == normalized)
            .ok_or_else(|| DiceClassError::unknown_notation(s))
    }
}

impl Serialize for DiceClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.notation())
    }
}

impl<'de> Deserialize<'de> for DiceClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ClassificationResult
// ============================================================================

/// Outcome of classifying one creature.
///
/// `explanation` holds the baseline entry followed by one entry per
/// adjustment rule that fired, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub dice_class: DiceClass,
    pub explanation: Vec<String>,
}

impl ClassificationResult {
    pub fn new(dice_class: DiceClass, explanation: Vec<String>) -> Self {
        Self {
            dice_class,
            explanation,
        }
    }

    pub fn rank(&self) -> usize {
        self.dice_class.rank()
    }
}
