//! Property-based tests for creature-dice
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `dice_class_props`: Tests for the dice classifier
//!   - Legendary/mythical always yields 2d100 with one entry
//!   - Results are deterministic across classifier instances
//!   - Only Rule A can lower a rank below its baseline
//!   - Pre-evolution comparison adds at most one step
//!   - Cached results are returned unchanged

mod dice_class_props;
