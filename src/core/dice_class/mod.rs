//! Dice class assignment for creatures.
//!
//! Maps a creature's base stat total, legendary/mythical status and
//! evolution lineage onto one of ten ordered die expressions
//! (`1d4` .. `2d100`), with an audit trail explaining each adjustment.
//!
//! # Usage
//!
//! ```rust,ignore
//! use creature_dice::core::dice_class::{CreatureStats, DiceClass, DiceClassifier};
//!
//! let classifier = DiceClassifier::new();
//! let profile = CreatureStats::new(600)
//!     .with_id("dragonite")
//!     .with_evolution(2, 0)
//!     .with_evolution_levels(30, 55)
//!     .into_profile();
//!
//! let result = classifier.classify(&profile);
//! println!("{} ({:?})", result.dice_class, result.explanation);
//!
//! // Creature data reloaded: cached results may be stale.
//! classifier.clear_cache();
//! ```

pub mod cache;
pub mod classifier;
pub mod error;
pub mod profile;
pub mod types;

pub use cache::{CacheStats, ClassificationCache};
pub use classifier::DiceClassifier;
pub use error::{DiceClassError, Result};
pub use profile::{CreatureProfile, CreatureStats, PreEvolutionProfile};
pub use types::{ClassificationResult, DiceClass};
