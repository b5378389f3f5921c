//! Headless stage: falling fruit and pickup detection

use glam::Vec2;

use crate::consts::PLAYER_Y;
use crate::renderer::{Presenter, StatusLine};
use crate::settings::GameConfig;
use crate::sim::{Fruit, SpawnRequest};

/// A fruit entity in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingFruit {
    pub fruit: Fruit,
    pub pos: Vec2,
    pub fall_speed: f32,
    /// Seconds since spawn
    pub age: f32,
}

/// Minimal entity host: fruit falls straight down, expires, and is reported
/// when it overlaps the player.
#[derive(Debug, Clone)]
pub struct HeadlessStage {
    fruits: Vec<FallingFruit>,
    lifetime: f32,
    pickup_radius: f32,
    expired: usize,
    last_status: Option<StatusLine>,
}

impl HeadlessStage {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            fruits: Vec::new(),
            lifetime: config.fruit_lifetime_secs,
            pickup_radius: config.pickup_radius,
            expired: 0,
            last_status: None,
        }
    }

    pub fn fruits(&self) -> &[FallingFruit] {
        &self.fruits
    }

    /// Fruit discarded because nobody caught it in time
    pub fn expired_count(&self) -> usize {
        self.expired
    }

    pub fn last_status(&self) -> Option<&StatusLine> {
        self.last_status.as_ref()
    }

    /// Move fruit, drop expired ones, and report fruit touching the player
    pub fn advance(&mut self, dt: f32, player_x: f32) -> Vec<Fruit> {
        let lifetime = self.lifetime;
        let before = self.fruits.len();
        self.fruits.retain_mut(|f| {
            f.age += dt;
            f.pos.y -= f.fall_speed * dt;
            f.age < lifetime
        });
        self.expired += before - self.fruits.len();

        let player = Vec2::new(player_x, PLAYER_Y);
        self.fruits
            .iter()
            .filter(|f| f.pos.distance(player) <= self.pickup_radius)
            .map(|f| f.fruit)
            .collect()
    }
}

impl Presenter for HeadlessStage {
    fn spawn_fruit_entity(&mut self, request: &SpawnRequest) {
        self.fruits.push(FallingFruit {
            fruit: request.fruit,
            pos: request.position,
            fall_speed: request.fall_speed,
            age: 0.0,
        });
    }

    fn deactivate_fruit_entity(&mut self, fruit: &Fruit) {
        self.fruits.retain(|f| f.fruit.id != fruit.id);
    }

    fn render_status(&mut self, status: &StatusLine) {
        self.last_status = Some(status.clone());
    }
}
