//! Animals: feeding, bonus multipliers, leveling and hunger drift
//!
//! Per-variant behavior is data: a starting preset per kind and a bonus
//! table keyed by (animal kind, fruit kind). One `feed` path serves all kinds.

use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, FruitKind};
use crate::consts::{HUNGER_DRIFT_PER_SEC, MAX_LEVEL};

/// Animal variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Cow,
    Chicken,
    Pig,
    Generic,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 4] = [
        AnimalKind::Cow,
        AnimalKind::Chicken,
        AnimalKind::Pig,
        AnimalKind::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalKind::Cow => "Cow",
            AnimalKind::Chicken => "Chicken",
            AnimalKind::Pig => "Pig",
            AnimalKind::Generic => "Animal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cow" => Some(AnimalKind::Cow),
            "chicken" => Some(AnimalKind::Chicken),
            "pig" => Some(AnimalKind::Pig),
            "generic" | "animal" => Some(AnimalKind::Generic),
            _ => None,
        }
    }

    /// Starting stats for this kind
    pub fn default_preset(self) -> AnimalPreset {
        match self {
            AnimalKind::Cow => AnimalPreset::new(50, 40, 80),
            AnimalKind::Chicken => AnimalPreset::new(40, 30, 60),
            AnimalKind::Pig => AnimalPreset::new(60, 50, 100),
            AnimalKind::Generic => AnimalPreset::new(0, 50, 100),
        }
    }
}

/// Starting stats and level thresholds for one animal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalPreset {
    pub hunger: u32,
    pub exp_to_level2: u32,
    pub exp_to_level3: u32,
}

impl AnimalPreset {
    pub const fn new(hunger: u32, exp_to_level2: u32, exp_to_level3: u32) -> Self {
        Self {
            hunger,
            exp_to_level2,
            exp_to_level3,
        }
    }
}

/// Bonus multiplier in percent for an (animal, fruit) pair
pub fn bonus_percent(animal: AnimalKind, fruit: FruitKind) -> u32 {
    match (animal, fruit) {
        (AnimalKind::Chicken, FruitKind::Berry) => 150,
        (AnimalKind::Cow, FruitKind::Apple) => 120,
        _ => 100,
    }
}

/// Scale nutrition by a percent multiplier, rounding half up
#[inline]
pub fn apply_bonus(nutrition: u32, percent: u32) -> u32 {
    (nutrition.saturating_mul(percent).saturating_add(50)) / 100
}

/// Single-step level transition. Never skips a level in one call.
pub fn next_level(level: u8, exp: u32, exp_to_level2: u32, exp_to_level3: u32) -> u8 {
    if level == 1 && exp >= exp_to_level2 {
        2
    } else if level == 2 && exp >= exp_to_level3 {
        3
    } else {
        level
    }
}

/// What a successful feed did to the animal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOutcome {
    /// EXP gained after the bonus was applied
    pub exp_gained: u32,
    /// New level, if the feed caused a level up
    pub leveled_up: Option<u8>,
}

/// An animal tracked by the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub kind: AnimalKind,
    hunger: u32,
    level: u8,
    exp: u32,
    exp_to_level2: u32,
    exp_to_level3: u32,
    /// Set by the fail notification when the game is lost
    #[serde(default)]
    failed: bool,
}

impl Animal {
    pub fn new(id: u32, kind: AnimalKind) -> Self {
        Self::with_preset(id, kind, kind.default_preset())
    }

    pub fn with_preset(id: u32, kind: AnimalKind, preset: AnimalPreset) -> Self {
        Self {
            id,
            kind,
            hunger: preset.hunger,
            level: 1,
            exp: 0,
            exp_to_level2: preset.exp_to_level2,
            exp_to_level3: preset.exp_to_level3,
            failed: false,
        }
    }

    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    pub fn set_hunger(&mut self, hunger: u32) {
        self.hunger = hunger;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn exp_to_level2(&self) -> u32 {
        self.exp_to_level2
    }

    pub fn exp_to_level3(&self) -> u32 {
        self.exp_to_level3
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// EXP still needed to reach the next level (0 at max level)
    pub fn exp_to_next_level(&self) -> u32 {
        match self.level {
            1 => self.exp_to_level2.saturating_sub(self.exp),
            2 => self.exp_to_level3.saturating_sub(self.exp),
            _ => 0,
        }
    }

    /// Feed a fruit. `None` is a silent no-op.
    pub fn feed(&mut self, fruit: Option<&Fruit>) -> Option<FeedOutcome> {
        let fruit = fruit?;

        let percent = bonus_percent(self.kind, fruit.kind);
        let nutrition = apply_bonus(fruit.nutrition(), percent);
        if percent != 100 {
            log::info!(
                "{} loves {}! Bonus EXP!",
                self.kind.as_str(),
                fruit.kind.as_str()
            );
        }

        self.exp = self.exp.saturating_add(nutrition);
        self.hunger = self.hunger.saturating_sub(nutrition);

        log::info!(
            "{} ate {} and gained {} EXP! Total EXP: {}",
            self.kind.as_str(),
            fruit.kind.as_str(),
            nutrition,
            self.exp
        );

        Some(FeedOutcome {
            exp_gained: nutrition,
            leveled_up: self.level_up(),
        })
    }

    /// Apply at most one level transition; returns the new level if it changed
    pub fn level_up(&mut self) -> Option<u8> {
        let next = next_level(self.level, self.exp, self.exp_to_level2, self.exp_to_level3);
        if next == self.level {
            return None;
        }
        self.level = next;
        log::info!("{} leveled up to Level {}!", self.kind.as_str(), next);
        Some(next)
    }

    /// Passive hunger growth: `2 * dt` truncated, so steps under half a
    /// second add nothing
    pub fn drift_hunger(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let gain = (dt * HUNGER_DRIFT_PER_SEC).trunc() as u32;
        self.hunger = self.hunger.saturating_add(gain);
    }

    /// Notification sent to every animal when the game is lost
    pub fn fail_behavior(&mut self) {
        self.failed = true;
        log::info!("{} has failed!", self.kind.as_str());
    }
}
