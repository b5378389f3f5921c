//! Game configuration
//!
//! Every knob has a default, so a config file only needs the fields it
//! changes. Loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{AnimalKind, AnimalPreset, FruitKind};

/// Starting stats per animal kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalPresets {
    pub cow: AnimalPreset,
    pub chicken: AnimalPreset,
    pub pig: AnimalPreset,
    pub generic: AnimalPreset,
}

impl Default for AnimalPresets {
    fn default() -> Self {
        Self {
            cow: AnimalKind::Cow.default_preset(),
            chicken: AnimalKind::Chicken.default_preset(),
            pig: AnimalKind::Pig.default_preset(),
            generic: AnimalKind::Generic.default_preset(),
        }
    }
}

impl AnimalPresets {
    pub fn get(&self, kind: AnimalKind) -> AnimalPreset {
        match kind {
            AnimalKind::Cow => self.cow,
            AnimalKind::Chicken => self.chicken,
            AnimalKind::Pig => self.pig,
            AnimalKind::Generic => self.generic,
        }
    }
}

/// Game tuning and setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Turns ===
    pub max_turn: u32,
    pub turn_duration_secs: f32,

    // === Difficulty ===
    pub initial_spawn_rate: f32,
    pub min_spawn_rate: f32,
    pub spawn_rate_step: f32,
    pub initial_fall_speed: f32,
    pub fall_speed_step: f32,

    // === Spawn area ===
    pub spawn_height: f32,
    pub min_spawn_x: f32,
    pub max_spawn_x: f32,
    pub fruit_lifetime_secs: f32,

    // === Player ===
    pub player_min_x: f32,
    pub player_max_x: f32,
    pub player_move_speed: f32,
    pub pickup_radius: f32,

    // === Setup ===
    /// Animals registered at game start, in order
    pub animals: Vec<AnimalKind>,
    pub presets: AnimalPresets,
    /// RNG seed; the binary derives one from the clock when absent
    pub seed: Option<u64>,
    /// Fruit kinds with no spawn template (spawns of these are skipped)
    pub disabled_fruits: Vec<FruitKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turn: MAX_TURN,
            turn_duration_secs: TURN_DURATION_SECS,

            initial_spawn_rate: INITIAL_SPAWN_RATE,
            min_spawn_rate: MIN_SPAWN_RATE,
            spawn_rate_step: SPAWN_RATE_STEP,
            initial_fall_speed: INITIAL_FALL_SPEED,
            fall_speed_step: FALL_SPEED_STEP,

            spawn_height: SPAWN_HEIGHT,
            min_spawn_x: MIN_SPAWN_X,
            max_spawn_x: MAX_SPAWN_X,
            fruit_lifetime_secs: FRUIT_LIFETIME_SECS,

            player_min_x: PLAYER_MIN_X,
            player_max_x: PLAYER_MAX_X,
            player_move_speed: PLAYER_MOVE_SPEED,
            pickup_radius: PICKUP_RADIUS,

            animals: vec![AnimalKind::Cow, AnimalKind::Chicken, AnimalKind::Pig],
            presets: AnimalPresets::default(),
            seed: None,
            disabled_fruits: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                log::info!("Using default config");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}", path.display(), e);
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Repair out-of-range values in place
    pub fn validate(&mut self) {
        if self.max_turn == 0 {
            log::warn!("max_turn must be at least 1");
            self.max_turn = 1;
        }
        if !self.turn_duration_secs.is_finite() || self.turn_duration_secs <= 0.0 {
            log::warn!("turn_duration_secs must be positive, using {}", TURN_DURATION_SECS);
            self.turn_duration_secs = TURN_DURATION_SECS;
        }
        if !self.min_spawn_rate.is_finite() || self.min_spawn_rate <= 0.0 {
            log::warn!("min_spawn_rate must be positive, using {}", MIN_SPAWN_RATE);
            self.min_spawn_rate = MIN_SPAWN_RATE;
        }
        if !self.initial_spawn_rate.is_finite() || self.initial_spawn_rate < self.min_spawn_rate {
            log::warn!("initial_spawn_rate below the floor, raising it");
            self.initial_spawn_rate = self.min_spawn_rate;
        }
        if self.spawn_rate_step < 0.0 || self.fall_speed_step < 0.0 {
            log::warn!("Difficulty steps must not be negative");
            self.spawn_rate_step = self.spawn_rate_step.max(0.0);
            self.fall_speed_step = self.fall_speed_step.max(0.0);
        }
        if !self.min_spawn_x.is_finite() || !self.max_spawn_x.is_finite() {
            log::warn!("Spawn bounds must be finite, using defaults");
            self.min_spawn_x = MIN_SPAWN_X;
            self.max_spawn_x = MAX_SPAWN_X;
        }
        if self.min_spawn_x > self.max_spawn_x {
            log::warn!("min_spawn_x > max_spawn_x, swapping");
            std::mem::swap(&mut self.min_spawn_x, &mut self.max_spawn_x);
        }
        if !self.player_min_x.is_finite() || !self.player_max_x.is_finite() {
            log::warn!("Player bounds must be finite, using defaults");
            self.player_min_x = PLAYER_MIN_X;
            self.player_max_x = PLAYER_MAX_X;
        }
        if self.player_min_x > self.player_max_x {
            log::warn!("player_min_x > player_max_x, swapping");
            std::mem::swap(&mut self.player_min_x, &mut self.player_max_x);
        }
        if self.fruit_lifetime_secs <= 0.0 {
            self.fruit_lifetime_secs = FRUIT_LIFETIME_SECS;
        }
        if self.disabled_fruits.len() >= FruitKind::ALL.len() {
            log::warn!("Every fruit kind is disabled; nothing will spawn");
        }
    }
}
