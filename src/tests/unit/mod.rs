//! Unit tests that exercise several dice class modules together
//!
//! - `dice_class_tests`: JSON input through classification, explanation
//!   trail ordering, and the fallbacks for out-of-range numeric input

mod dice_class_tests;
