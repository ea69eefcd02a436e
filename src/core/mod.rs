pub mod dice_class;
pub mod logging;
