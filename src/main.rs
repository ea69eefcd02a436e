use std::io::{self, Read};

use creature_dice::config::AppConfig;
use creature_dice::core::dice_class::{
    ClassificationResult, CreatureProfile, DiceClassError, DiceClassifier,
};

fn main() {
    let (config, config_issue) = AppConfig::load();

    // Initialize logging
    let _log_guard = creature_dice::core::logging::init(&config);
    log::info!("{} v{} starting", creature_dice::NAME, creature_dice::VERSION);

    // Config is read before logging exists, so its outcome is reported here.
    match config_issue {
        None => log::info!("Loaded config from {}", AppConfig::config_path().display()),
        Some(e) if e.is_missing() => log::debug!("{e}, using defaults"),
        Some(e) => log::warn!("{e}, using defaults"),
    }

    if let Err(e) = run(&config) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Read profiles from the path given as the first argument, or stdin, and
/// print their classifications as JSON.
fn run(config: &AppConfig) -> Result<(), DiceClassError> {
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let is_batch = input.trim_start().starts_with('[');
    let profiles = CreatureProfile::many_from_json(&input)?;
    let classifier = DiceClassifier::from_config(&config.classifier);

    let results: Vec<_> = profiles
        .iter()
        .map(|profile| classifier.classify(profile))
        .collect();
    log::debug!(
        "Classified {} profiles, cache: {:?}",
        results.len(),
        classifier.cache_stats()
    );

    let results: Vec<&ClassificationResult> = results.iter().map(|r| &**r).collect();
    let output = match results.as_slice() {
        [single] if !is_batch => serde_json::to_string_pretty(single)?,
        all => serde_json::to_string_pretty(all)?,
    };
    println!("{output}");
    Ok(())
}
