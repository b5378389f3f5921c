//! Fruit Farm entry point
//!
//! Plays one headless game with the autopilot and prints the result.
//! Usage: `fruit-farm [config.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use fruit_farm::GameConfig;
use fruit_farm::platform::run_headless;

fn main() {
    env_logger::init();
    log::info!("Fruit Farm (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let session = run_headless(&config, seed);
    let state = session.state();

    if let Some(status) = session.presenter().last_status() {
        println!("{}", status.turn_text());
        println!("{}", status.timer_text());
        if let Some(text) = &status.outcome_text {
            println!("{}", text);
        }
    }

    for animal in state.animals() {
        println!(
            "{:<8} level {}  exp {:>3}  hunger {:>3}",
            animal.kind.as_str(),
            animal.level(),
            animal.exp(),
            animal.hunger()
        );
    }
    println!(
        "Fruit left in inventory: {}, missed: {}",
        state.player.inventory().len(),
        session.presenter().expired_count()
    );
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
