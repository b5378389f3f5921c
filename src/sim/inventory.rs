//! Player inventory of collected fruit

use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, FruitKind};

/// Insertion-ordered collection of collected fruit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    fruits: Vec<Fruit>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { fruits: Vec::new() }
    }

    /// Append a fruit (the same kind may repeat)
    pub fn add_fruit(&mut self, fruit: Fruit) {
        self.fruits.push(fruit);
        log::info!(
            "Added {} to inventory. Total fruits: {}",
            fruit.kind.as_str(),
            self.fruits.len()
        );
    }

    /// Remove the first entry with the same identity. Returns false if absent.
    pub fn remove_fruit(&mut self, fruit: &Fruit) -> bool {
        let Some(pos) = self.fruits.iter().position(|f| f.id == fruit.id) else {
            return false;
        };
        self.fruits.remove(pos);
        log::info!(
            "Removed {} from inventory. Remaining fruits: {}",
            fruit.kind.as_str(),
            self.fruits.len()
        );
        true
    }

    /// Earliest inserted fruit still present
    pub fn first(&self) -> Option<&Fruit> {
        self.fruits.first()
    }

    /// Earliest inserted fruit of the given kind
    pub fn fruit_by_kind(&self, kind: FruitKind) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.kind == kind)
    }

    pub fn count_by_kind(&self, kind: FruitKind) -> usize {
        self.fruits.iter().filter(|f| f.kind == kind).count()
    }

    /// Copy of every fruit, in insertion order
    pub fn all_fruits(&self) -> Vec<Fruit> {
        self.fruits.clone()
    }

    pub fn clear(&mut self) {
        self.fruits.clear();
        log::info!("Inventory cleared!");
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }
}
