//! Scripted player for demos and tests
//!
//! Chases the catchable fruit that reaches the catch line first and feeds
//! everything to the animal closest to level 3.

use std::cmp::Ordering;

use crate::consts::PLAYER_Y;
use crate::sim::{GameState, TickInput};

use super::stage::HeadlessStage;

/// Seconds of slack when deciding whether a fruit can still be reached
const REACH_SLACK_SECS: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Last horizontal target, for inspection
    pub target_x: Option<f32>,
}

impl Autopilot {
    pub fn plan(&mut self, state: &GameState, stage: &HeadlessStage, dt: f32) -> TickInput {
        TickInput {
            horizontal: self.steer(state, stage, dt),
            pickups: Vec::new(),
            feed: pick_animal(state),
        }
    }

    fn steer(&mut self, state: &GameState, stage: &HeadlessStage, dt: f32) -> f32 {
        let x = state.player.x;
        let speed = state.player.move_speed();

        self.target_x = stage
            .fruits()
            .iter()
            .filter_map(|f| {
                let time_to_line = (f.pos.y - PLAYER_Y) / f.fall_speed.max(1e-3);
                if time_to_line < 0.0 {
                    return None;
                }
                let travel = (f.pos.x - x).abs() / speed.max(1e-3);
                (travel <= time_to_line + REACH_SLACK_SECS).then_some((time_to_line, f.pos.x))
            })
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            .map(|(_, target)| target);

        let step = speed * dt;
        match self.target_x {
            Some(target) if step > 0.0 => ((target - x) / step).clamp(-1.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Animal (by index) with the least EXP left to level 3
fn pick_animal(state: &GameState) -> Option<usize> {
    if state.player.inventory().is_empty() {
        return None;
    }
    state
        .animals()
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_max_level())
        .min_by_key(|(_, a)| a.exp_to_level3().saturating_sub(a.exp()))
        .map(|(index, _)| index)
}
