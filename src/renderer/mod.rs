//! Presentation-facing contracts
//!
//! The simulation never draws anything. It emits `GameEvent`s and a status
//! line each frame; a `Presenter` turns those into entities and text.

pub mod hud;

pub use hud::{StatusColor, StatusLine};

use crate::sim::{Fruit, GameEvent, SpawnRequest};

/// Implemented by the presentation/physics layer
pub trait Presenter {
    /// Instantiate a falling fruit. The core keeps no handle to it.
    fn spawn_fruit_entity(&mut self, request: &SpawnRequest);

    /// A collected fruit's visual should be hidden/destroyed
    fn deactivate_fruit_entity(&mut self, _fruit: &Fruit) {}

    /// One-way status push (turn, timer, outcome)
    fn render_status(&mut self, _status: &StatusLine) {}

    /// Every event, after the dedicated hooks above have run
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Presenter with nothing bound. Every push is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn spawn_fruit_entity(&mut self, _request: &SpawnRequest) {}
}

/// Route drained events to a presenter, oldest first
pub fn present_events<P: Presenter + ?Sized>(events: &[GameEvent], presenter: &mut P) {
    for event in events {
        match event {
            GameEvent::FruitSpawned(request) => presenter.spawn_fruit_entity(request),
            GameEvent::FruitCollected(fruit) => presenter.deactivate_fruit_entity(fruit),
            _ => {}
        }
        presenter.on_event(event);
    }
}
