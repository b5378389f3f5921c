//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay pure and deterministic:
//! - Time only advances through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (registration order for animals)
//! - No rendering or platform dependencies

pub mod animal;
pub mod fruit;
pub mod inventory;
pub mod spawner;
pub mod state;
pub mod tick;

pub use animal::{
    Animal, AnimalKind, AnimalPreset, FeedOutcome, apply_bonus, bonus_percent, next_level,
};
pub use fruit::{Fruit, FruitKind};
pub use inventory::Inventory;
pub use spawner::{SpawnRequest, SpawnRoll, Spawner};
pub use state::{GameEvent, GamePhase, GameState, Outcome, Player};
pub use tick::{TickInput, Verdict, check_win_condition, evaluate_outcome, spawn_fruit, tick};
