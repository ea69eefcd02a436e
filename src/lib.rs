/// creature-dice - dice class assignment for creatures
///
/// Core library mapping creature stats and evolution lineage onto an
/// ordered set of die expressions, with a per-instance result cache.

pub mod config;
pub mod core;


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
