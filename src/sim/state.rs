//! Game state and core simulation types
//!
//! Everything a running game needs lives here, owned by `GameState` and
//! passed by reference to the tick and evaluator functions.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animal::{Animal, AnimalKind, FeedOutcome};
use super::fruit::{Fruit, FruitKind};
use super::inventory::Inventory;
use super::spawner::{SpawnRequest, SpawnRoll, Spawner};
use crate::clamp_x;
use crate::settings::GameConfig;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Turn controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but not started
    NotStarted,
    /// Turns are running
    Active,
    /// Terminal. A new game needs a fresh `GameState`.
    Ended(Outcome),
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { max_turn: u32 },
    TurnStarted { turn: u32 },
    TurnEnded { turn: u32 },
    FruitSpawned(SpawnRequest),
    SpawnSkipped { kind: FruitKind },
    FruitCollected(Fruit),
    AnimalFed { animal_id: u32, fruit: FruitKind, exp_gained: u32 },
    LeveledUp { animal_id: u32, level: u8 },
    GameWon { animals_at_max_level: usize },
    GameLost,
    AnimalFailed { animal_id: u32 },
}

/// The player: a horizontal position and an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    min_x: f32,
    max_x: f32,
    move_speed: f32,
    inventory: Inventory,
}

impl Player {
    pub fn new(min_x: f32, max_x: f32, move_speed: f32) -> Self {
        Self {
            x: clamp_x(0.0, min_x, max_x),
            min_x,
            max_x,
            move_speed,
            inventory: Inventory::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.player_min_x, config.player_max_x, config.player_move_speed)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Move by `input * move_speed * dt`, staying inside the boundaries
    pub fn move_by(&mut self, input: f32, dt: f32) {
        let input = input.clamp(-1.0, 1.0);
        self.x = clamp_x(self.x + input * self.move_speed * dt, self.min_x, self.max_x);
    }

    /// Store a picked-up fruit. Returns false when there was nothing to collect.
    pub fn collect_fruit(&mut self, fruit: Option<Fruit>) -> bool {
        let Some(fruit) = fruit else {
            return false;
        };
        self.inventory.add_fruit(fruit);
        log::info!("Collected {}!", fruit.kind.as_str());
        true
    }

    /// Feed the earliest collected fruit to `animal` and drop it from the inventory
    pub fn feed_animal(&mut self, animal: &mut Animal) -> Option<(Fruit, FeedOutcome)> {
        let Some(fruit) = self.inventory.first().copied() else {
            log::info!("No fruits in inventory to feed!");
            return None;
        };

        let outcome = animal.feed(Some(&fruit))?;
        self.inventory.remove_fruit(&fruit);
        log::info!("Fed {} with {}!", animal.kind.as_str(), fruit.kind.as_str());
        Some((fruit, outcome))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// 1-based turn counter; exceeds `max_turn` once the last turn is over
    pub current_turn: u32,
    pub max_turn: u32,
    /// Seconds elapsed while active
    pub timer: f32,
    pub turn_duration: f32,
    /// Timer value at which the current turn ends
    pub next_turn_deadline: f32,
    pub spawner: Spawner,
    pub player: Player,
    animals: Vec<Animal>,
    /// Result of the last win check
    pub animals_at_max_level: usize,
    /// Pending notifications (not part of a snapshot)
    #[serde(skip)]
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a game with the configured roster registered, not yet started.
    /// The config is validated on a copy first.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut config = config.clone();
        config.validate();
        let config = &config;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            current_turn: 0,
            max_turn: config.max_turn,
            timer: 0.0,
            turn_duration: config.turn_duration_secs,
            next_turn_deadline: config.turn_duration_secs,
            spawner: Spawner::from_config(config),
            player: Player::from_config(config),
            animals: Vec::new(),
            animals_at_max_level: 0,
            events: Vec::new(),
            next_id: 1,
        };

        for &kind in &config.animals {
            let id = state.next_entity_id();
            state.register_animal(Animal::with_preset(id, kind, config.presets.get(kind)));
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the next spawn with the game's RNG
    pub fn roll_spawn(&mut self) -> SpawnRoll {
        let id = self.next_entity_id();
        self.spawner.roll(&mut self.rng, id)
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// NotStarted -> Active. Returns false if the game was already started.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            log::warn!("Game already started ({:?}); create a new game instead", self.phase);
            return false;
        }

        self.phase = GamePhase::Active;
        self.current_turn = 1;
        self.timer = 0.0;
        self.next_turn_deadline = self.turn_duration;
        self.animals_at_max_level = 0;

        log::info!(
            "Game Started! Feed the animals to Level 3 within {} turns!",
            self.max_turn
        );
        log::info!("--- Turn {}/{} ---", self.current_turn, self.max_turn);
        self.push_event(GameEvent::GameStarted {
            max_turn: self.max_turn,
        });
        self.push_event(GameEvent::TurnStarted {
            turn: self.current_turn,
        });
        true
    }

    /// Track an animal. Duplicates (same id) are ignored.
    pub fn register_animal(&mut self, animal: Animal) -> bool {
        if self.animals.iter().any(|a| a.id == animal.id) {
            return false;
        }
        log::info!("Registered {} to game manager", animal.kind.as_str());
        self.animals.push(animal);
        true
    }

    /// Convenience: allocate an id and register a default-stat animal
    pub fn add_animal(&mut self, kind: AnimalKind) -> u32 {
        let id = self.next_entity_id();
        self.register_animal(Animal::new(id, kind));
        id
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn animal_mut(&mut self, index: usize) -> Option<&mut Animal> {
        self.animals.get_mut(index)
    }

    /// Hand a picked-up fruit to the player's inventory
    pub fn collect_fruit(&mut self, fruit: Option<Fruit>) -> bool {
        if !self.player.collect_fruit(fruit) {
            return false;
        }
        if let Some(fruit) = fruit {
            self.push_event(GameEvent::FruitCollected(fruit));
        }
        true
    }

    /// Feed the player's earliest fruit to the animal at `index`
    pub fn feed_animal_by_index(&mut self, index: usize) -> Option<FeedOutcome> {
        let Some(animal) = self.animals.get_mut(index) else {
            log::info!("No animal to feed!");
            return None;
        };
        let animal_id = animal.id;
        let (fruit, outcome) = self.player.feed_animal(animal)?;

        self.push_event(GameEvent::AnimalFed {
            animal_id,
            fruit: fruit.kind,
            exp_gained: outcome.exp_gained,
        });
        if let Some(level) = outcome.leveled_up {
            self.push_event(GameEvent::LeveledUp { animal_id, level });
        }
        Some(outcome)
    }

    /// Passive hunger growth for every tracked animal
    pub fn drift_hunger(&mut self, dt: f32) {
        for animal in &mut self.animals {
            animal.drift_hunger(dt);
        }
    }

    /// Number of tracked animals at the winning level
    pub fn count_max_level(&self) -> usize {
        self.animals.iter().filter(|a| a.is_max_level()).count()
    }

    /// Send the fail notification to every tracked animal
    pub(crate) fn notify_failure(&mut self) {
        for animal in &mut self.animals {
            animal.fail_behavior();
        }
        let ids: Vec<u32> = self.animals.iter().map(|a| a.id).collect();
        for animal_id in ids {
            self.push_event(GameEvent::AnimalFailed { animal_id });
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registers_roster() {
        let state = GameState::new(&GameConfig::default(), 1);
        let kinds: Vec<_> = state.animals().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnimalKind::Cow, AnimalKind::Chicken, AnimalKind::Pig]);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.animals()[0].hunger(), 50);
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        let existing = state.animals()[0].clone();
        assert!(!state.register_animal(existing));
        assert_eq!(state.animals().len(), 3);

        state.add_animal(AnimalKind::Generic);
        assert_eq!(state.animals().len(), 4);
    }

    #[test]
    fn test_start_only_once() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        assert!(state.start());
        assert_eq!(state.current_turn, 1);
        assert!(state.is_active());
        assert!(!state.start());

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::GameStarted { max_turn: 10 },
                GameEvent::TurnStarted { turn: 1 }
            ]
        );
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_player_movement_is_clamped() {
        let mut player = Player::new(-8.0, 8.0, 5.0);
        player.move_by(1.0, 1.0);
        assert_eq!(player.x, 5.0);
        player.move_by(1.0, 1.0);
        assert_eq!(player.x, 8.0);
        // Input is clamped to [-1, 1]
        player.move_by(-10.0, 2.0);
        assert_eq!(player.x, -2.0);
        player.move_by(-1.0, 10.0);
        assert_eq!(player.x, -8.0);
    }

    #[test]
    fn test_collect_none_is_noop() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        assert!(!state.collect_fruit(None));
        assert!(state.player.inventory().is_empty());
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_feed_by_index_uses_earliest_fruit() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        let apple = Fruit::new(100, FruitKind::Apple);
        let berry = Fruit::new(101, FruitKind::Berry);
        state.collect_fruit(Some(apple));
        state.collect_fruit(Some(berry));
        state.drain_events();

        // Chicken is index 1; apple goes first, no bonus
        let outcome = state.feed_animal_by_index(1).unwrap();
        assert_eq!(outcome.exp_gained, 10);
        assert_eq!(state.player.inventory().all_fruits(), vec![berry]);

        // Berry gives the chicken 30 and a level
        let outcome = state.feed_animal_by_index(1).unwrap();
        assert_eq!(outcome.leveled_up, Some(2));
        assert!(state.player.inventory().is_empty());

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::LeveledUp {
            animal_id: state.animals()[1].id,
            level: 2
        }));

        // Empty inventory and bad index are no-ops
        assert!(state.feed_animal_by_index(1).is_none());
        state.collect_fruit(Some(Fruit::new(102, FruitKind::Apple)));
        assert!(state.feed_animal_by_index(42).is_none());
        assert_eq!(state.player.inventory().len(), 1);
    }
}
