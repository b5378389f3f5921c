//! Fruit spawn policy
//!
//! Decides when to spawn and what/where. The stage owns the falling entity
//! once the request is emitted; expiry is not tracked here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, FruitKind};
use crate::consts::{MAX_SPAWN_X, MIN_SPAWN_X};
use crate::settings::GameConfig;

/// A fruit handed to the presentation layer for instantiation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub fruit: Fruit,
    pub position: Vec2,
    pub fall_speed: f32,
}

/// Result of one spawn attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRoll {
    Spawn(SpawnRequest),
    /// The chosen kind has no instantiable template
    MissingTemplate(FruitKind),
}

/// Timer-driven spawn cadence plus difficulty knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns
    pub spawn_rate: f32,
    /// Fall rate given to new fruit
    pub fall_speed: f32,
    spawn_timer: f32,
    min_spawn_rate: f32,
    spawn_rate_step: f32,
    fall_speed_step: f32,
    spawn_height: f32,
    min_x: f32,
    max_x: f32,
    #[serde(default)]
    missing_templates: Vec<FruitKind>,
}

impl Spawner {
    pub fn from_config(config: &GameConfig) -> Self {
        let (min_x, max_x) = spawn_bounds(config.min_spawn_x, config.max_spawn_x);
        Self {
            spawn_rate: config.initial_spawn_rate,
            fall_speed: config.initial_fall_speed,
            spawn_timer: 0.0,
            min_spawn_rate: config.min_spawn_rate,
            spawn_rate_step: config.spawn_rate_step,
            fall_speed_step: config.fall_speed_step,
            spawn_height: config.spawn_height,
            min_x,
            max_x,
            missing_templates: config.disabled_fruits.clone(),
        }
    }

    /// Accumulate elapsed time. Returns true when a spawn is due.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_rate {
            self.spawn_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Pick a kind and position for a new fruit with the given id
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R, id: u32) -> SpawnRoll {
        let kind = FruitKind::ALL[rng.random_range(0..FruitKind::ALL.len())];
        if self.missing_templates.contains(&kind) {
            return SpawnRoll::MissingTemplate(kind);
        }

        let x = rng.random_range(self.min_x..=self.max_x);
        SpawnRoll::Spawn(SpawnRequest {
            fruit: Fruit::new(id, kind),
            position: Vec2::new(x, self.spawn_height),
            fall_speed: self.fall_speed,
        })
    }

    /// Per-turn difficulty increase: faster spawns (floored) and faster falls
    pub fn tighten(&mut self) {
        self.spawn_rate = (self.spawn_rate - self.spawn_rate_step).max(self.min_spawn_rate);
        self.fall_speed += self.fall_speed_step;
    }
}

/// Ordered, finite x range for `random_range`
fn spawn_bounds(a: f32, b: f32) -> (f32, f32) {
    if !a.is_finite() || !b.is_finite() {
        log::warn!("Spawn bounds ({}, {}) are not finite, using defaults", a, b);
        return (MIN_SPAWN_X, MAX_SPAWN_X);
    }
    (a.min(b), a.max(b))
}
