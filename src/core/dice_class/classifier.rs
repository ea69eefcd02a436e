//! Dice class assignment.
//!
//! # Pipeline
//!
//! ```text
//!  cache lookup -> legendary override -> baseline -> A -> B -> C -> D -> E -> cache store
//! ```
//!
//! | Step     | Condition                                   | Effect                     |
//! |----------|---------------------------------------------|----------------------------|
//! | Baseline | base stat total ladder                      | rank 0..=5                 |
//! | A        | stage 0 and no evolutions remaining         | one step toward `1d10`     |
//! | B        | stage >= 2                                  | +1                         |
//! | C        | evolved, first evolution level >= 32 / >= 42 | +1 / +1 more              |
//! | D        | evolved, either evolution level >= 50       | +1                         |
//! | E        | evolved, rank not above the pre-evolution's | +1 (once)                  |
//!
//! Every increment clamps at [`DiceClass::MAX_RANK`].

use std::sync::Arc;

use tracing::{debug, trace};

use super::cache::{CacheStats, ClassificationCache};
use super::profile::{CreatureProfile, CreatureStats, PreEvolutionProfile};
use super::types::{ClassificationResult, DiceClass};
use crate::config::ClassifierConfig;

// ============================================================================
// Constants
// ============================================================================

/// Upper bounds (inclusive) of the stat total ladder, lowest first.
const STAT_LADDER: [(u32, DiceClass); 5] = [
    (299, DiceClass::D1d4),
    (400, DiceClass::D1d6),
    (450, DiceClass::D1d8),
    (500, DiceClass::D1d10),
    (550, DiceClass::D1d12),
];

/// Baseline for totals above the ladder, or when the total is missing.
const TOP_BASELINE: DiceClass = DiceClass::D2d6;

/// Rank that single-stage creatures are pulled toward.
const SINGLE_STAGE_TARGET: DiceClass = DiceClass::D1d10;

const HIGH_FIRST_EVOLUTION: u32 = 32;
const VERY_HIGH_FIRST_EVOLUTION: u32 = 42;
const LATE_EVOLUTION: u32 = 50;

const LEGENDARY_CLASS: DiceClass = DiceClass::D2d100;

// ============================================================================
// DiceClassifier
// ============================================================================

/// Assigns dice classes to creature profiles, memoizing by creature id.
///
/// Each classifier owns its cache, so independent instances never share
/// results.
pub struct DiceClassifier {
    cache: ClassificationCache,
}

impl DiceClassifier {
    pub fn new() -> Self {
        Self::with_cache(ClassificationCache::new())
    }

    pub fn with_cache(cache: ClassificationCache) -> Self {
        Self { cache }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        if config.cache_enabled {
            Self::new()
        } else {
            Self::with_cache(ClassificationCache::disabled())
        }
    }

    /// Classify a creature.
    ///
    /// A profile with a non-empty id that was classified before is answered
    /// from the cache, even if its fields have changed since. Call
    /// [`DiceClassifier::clear_cache`] after reloading creature data.
    pub fn classify(&self, profile: &CreatureProfile) -> Arc<ClassificationResult> {
        self.classify_form(&profile.stats, profile.pre_evolution.as_ref())
    }

    /// Discard all cached results.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Discard the cached result for one id.
    pub fn invalidate(&self, id: &str) -> bool {
        self.cache.invalidate(id)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &ClassificationCache {
        &self.cache
    }

    fn classify_form(
        &self,
        stats: &CreatureStats,
        pre_evolution: Option<&PreEvolutionProfile>,
    ) -> Arc<ClassificationResult> {
        let key = stats.cache_key();

        if let Some(id) = key {
            if let Some(cached) = self.cache.get(id) {
                trace!(id, "Classification cache hit");
                return cached;
            }
        }

        let result = Arc::new(self.evaluate(stats, pre_evolution));
        debug!(
            id = key.unwrap_or("<none>"),
            dice_class = %result.dice_class,
            rules = result.explanation.len(),
            "Classified creature"
        );

        if let Some(id) = key {
            self.cache.put(id, Arc::clone(&result));
        }
        result
    }

    fn evaluate(
        &self,
        stats: &CreatureStats,
        pre_evolution: Option<&PreEvolutionProfile>,
    ) -> ClassificationResult {
        if stats.is_legendary || stats.is_mythical {
            return ClassificationResult::new(
                LEGENDARY_CLASS,
                vec![format!("Legendary/mythical creature: {LEGENDARY_CLASS}")],
            );
        }

        let baseline = baseline_class(stats.base_stat_total);
        let mut ladder = RankLadder::new(baseline);
        ladder.note(match stats.base_stat_total {
            Some(total) => format!("Base stat total {total}: {baseline}"),
            None => format!("Base stat total unavailable: {baseline}"),
        });

        let stage = stats.evolution_stage;
        let evolved = at_least(stage, 1);

        // A: neither evolved nor able to evolve.
        if stage == Some(0) && stats.remaining_evolutions == Some(0) {
            ladder.nudge_toward(SINGLE_STAGE_TARGET, "Single-stage creature");
        }

        // B
        if at_least(stage, 2) {
            ladder.step_up("Evolved twice or more");
        }

        // C: the two bonuses stack.
        if let Some(first) = stats.first_evolution_level.filter(|_| evolved) {
            if first >= HIGH_FIRST_EVOLUTION {
                ladder.step_up(&format!(
                    "First evolution at level {first} (>= {HIGH_FIRST_EVOLUTION})"
                ));
            }
            if first >= VERY_HIGH_FIRST_EVOLUTION {
                ladder.step_up(&format!(
                    "First evolution at level {first} (>= {VERY_HIGH_FIRST_EVOLUTION})"
                ));
            }
        }

        // D
        if evolved
            && (at_least(stats.first_evolution_level, LATE_EVOLUTION)
                || at_least(stats.second_evolution_level, LATE_EVOLUTION))
        {
            ladder.step_up(&format!("Evolution at level {LATE_EVOLUTION} or later"));
        }

        // E: a single corrective step, even if the gap is wider.
        if evolved {
            if let Some(pre) = pre_evolution {
                let pre_result = self.classify_form(pre, None);
                if ladder.rank <= pre_result.rank() {
                    ladder.step_up(&format!(
                        "Pre-evolution {} is {}",
                        pre.label(),
                        pre_result.dice_class
                    ));
                }
            }
        }

        ladder.finish()
    }
}

impl Default for DiceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Working rank plus the explanation trail that produced it.
struct RankLadder {
    rank: usize,
    explanation: Vec<String>,
}

impl RankLadder {
    fn new(baseline: DiceClass) -> Self {
        Self {
            rank: baseline.rank(),
            explanation: Vec::new(),
        }
    }

    fn note(&mut self, entry: String) {
        self.explanation.push(entry);
    }

    fn step_up(&mut self, reason: &str) {
        let from = self.class();
        self.rank = (self.rank + 1).min(DiceClass::MAX_RANK);
        let to = self.class();
        trace!(reason, %from, %to, "Dice class rule applied");
        self.note(format!("{reason}: +1 ({from} -> {to})"));
    }

    /// Move one step toward `target`. Records nothing if already there.
    fn nudge_toward(&mut self, target: DiceClass, reason: &str) {
        let from = self.class();
        let target = target.rank();
        if self.rank < target {
            self.rank += 1;
        } else if self.rank > target {
            self.rank -= 1;
        } else {
            return;
        }
        let to = self.class();
        trace!(reason, %from, %to, "Dice class rule applied");
        self.note(format!("{reason}: {from} -> {to}"));
    }

    fn class(&self) -> DiceClass {
        DiceClass::from_rank(self.rank).unwrap_or(DiceClass::D2d100)
    }

    fn finish(self) -> ClassificationResult {
        ClassificationResult::new(self.class(), self.explanation)
    }
}

/// Ladder lookup. A missing total fails every bound and lands on the top
/// baseline.
fn baseline_class(base_stat_total: Option<u32>) -> DiceClass {
    base_stat_total
        .and_then(|total| {
            STAT_LADDER
                .iter()
                .find(|(bound, _)| total <= *bound)
                .map(|(_, class)| *class)
        })
        .unwrap_or(TOP_BASELINE)
}

fn at_least(value: Option<u32>, bound: u32) -> bool {
    value.is_some_and(|v| v >= bound)
}
