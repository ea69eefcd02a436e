//! Creature profile input types.
//!
//! A [`CreatureProfile`] carries the stats of one creature plus, optionally,
//! the stats of its immediate pre-evolution. The pre-evolution is a plain
//! [`CreatureStats`] with no back-reference of its own, so classification
//! can look back exactly one evolution and no further.
//!
//! Numeric fields are `Option<u32>`. JSON values that are absent, null,
//! negative, fractional or not numbers at all decode to `None` instead of
//! failing, and a `None` fails every threshold comparison it takes part in.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::Result;

/// Stats for a single evolutionary form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureStats {
    /// Stable identifier, used as the cache key when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, used in explanation text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sum of the creature's base stats.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_stat_total: Option<u32>,

    #[serde(default)]
    pub is_legendary: bool,

    #[serde(default)]
    pub is_mythical: bool,

    /// Evolutions already undergone from the base form (0 = base form).
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub evolution_stage: Option<u32>,

    /// Evolutions still possible from this form (0 = final form).
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub remaining_evolutions: Option<u32>,

    /// Level of the first evolution in the chain, 0 if not applicable.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_evolution_level: Option<u32>,

    /// Level of the second evolution in the chain, 0 if not applicable.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub second_evolution_level: Option<u32>,
}

/// The immediate prior form of a creature. Carries no pre-evolution itself.
pub type PreEvolutionProfile = CreatureStats;

impl CreatureStats {
    /// Stats for a base-form, non-evolving creature.
    pub fn new(base_stat_total: u32) -> Self {
        Self {
            base_stat_total: Some(base_stat_total),
            evolution_stage: Some(0),
            remaining_evolutions: Some(0),
            first_evolution_level: Some(0),
            second_evolution_level: Some(0),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn legendary(mut self) -> Self {
        self.is_legendary = true;
        self
    }

    pub fn mythical(mut self) -> Self {
        self.is_mythical = true;
        self
    }

    /// Set evolutions undergone and evolutions remaining.
    pub fn with_evolution(mut self, stage: u32, remaining: u32) -> Self {
        self.evolution_stage = Some(stage);
        self.remaining_evolutions = Some(remaining);
        self
    }

    /// Set the first and second evolution levels (0 when not applicable).
    pub fn with_evolution_levels(mut self, first: u32, second: u32) -> Self {
        self.first_evolution_level = Some(first);
        self.second_evolution_level = Some(second);
        self
    }

    /// Non-empty id, if any.
    pub fn cache_key(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Label used when this form is referenced in an explanation.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.cache_key())
            .unwrap_or("pre-evolution")
    }

    pub fn into_profile(self) -> CreatureProfile {
        CreatureProfile::from(self)
    }
}

/// Classifier input: a creature and, optionally, its immediate pre-evolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureProfile {
    #[serde(flatten)]
    pub stats: CreatureStats,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_evolution: Option<PreEvolutionProfile>,
}

impl CreatureProfile {
    pub fn with_pre_evolution(mut self, pre_evolution: PreEvolutionProfile) -> Self {
        self.pre_evolution = Some(pre_evolution);
        self
    }

    /// Decode a single profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode either one profile object or an array of them.
    pub fn many_from_json(json: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(vec![serde_json::from_value(value)?])
        }
    }
}

impl From<CreatureStats> for CreatureProfile {
    fn from(stats: CreatureStats) -> Self {
        Self {
            stats,
            pre_evolution: None,
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}
