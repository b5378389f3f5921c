//! Fruit variants and their nutrition values

use serde::{Deserialize, Serialize};

/// Fruit variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Berry,
}

impl FruitKind {
    /// Every variant, in spawn-table order
    pub const ALL: [FruitKind; 3] = [FruitKind::Apple, FruitKind::Banana, FruitKind::Berry];

    /// Fixed nutrition (EXP) granted by this variant
    pub fn base_nutrition(self) -> u32 {
        match self {
            FruitKind::Apple => 10,
            FruitKind::Banana => 15,
            FruitKind::Berry => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "Apple",
            FruitKind::Banana => "Banana",
            FruitKind::Berry => "Berry",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apple" => Some(FruitKind::Apple),
            "banana" => Some(FruitKind::Banana),
            "berry" => Some(FruitKind::Berry),
            _ => None,
        }
    }
}

/// A fruit item. Identity is the entity id; nutrition is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub kind: FruitKind,
    nutrition: u32,
}

impl Fruit {
    pub fn new(id: u32, kind: FruitKind) -> Self {
        Self {
            id,
            kind,
            nutrition: kind.base_nutrition(),
        }
    }

    /// Nutrition this fruit provides when eaten
    pub fn nutrition(&self) -> u32 {
        log::info!("{} provides {} nutrition!", self.kind.as_str(), self.nutrition);
        self.nutrition
    }
}
