//! HUD status text

use crate::sim::{GamePhase, GameState, Outcome};

/// Color of the outcome text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusColor {
    #[default]
    Neutral,
    Green,
    Red,
}

impl StatusColor {
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            StatusColor::Neutral => [1.0, 1.0, 1.0, 1.0],
            StatusColor::Green => [0.0, 1.0, 0.0, 1.0],
            StatusColor::Red => [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Everything the status UI shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub turn: u32,
    pub max_turn: u32,
    pub elapsed_secs: f32,
    pub outcome_text: Option<String>,
    pub outcome_color: StatusColor,
}

impl StatusLine {
    pub fn from_state(state: &GameState) -> Self {
        let (outcome_text, outcome_color) = match state.phase {
            GamePhase::NotStarted => (None, StatusColor::Neutral),
            GamePhase::Active => (Some("Game Started!".to_string()), StatusColor::Neutral),
            GamePhase::Ended(Outcome::Win) => (
                Some(format!(
                    "YOU WIN! {} animal(s) reached Level 3!",
                    state.animals_at_max_level
                )),
                StatusColor::Green,
            ),
            GamePhase::Ended(Outcome::Lose) => {
                (Some("YOU LOSE! Try again!".to_string()), StatusColor::Red)
            }
        };

        Self {
            turn: state.current_turn,
            max_turn: state.max_turn,
            elapsed_secs: state.timer,
            outcome_text,
            outcome_color,
        }
    }

    pub fn turn_text(&self) -> String {
        format!("Turn: {}/{}", self.turn, self.max_turn)
    }

    pub fn timer_text(&self) -> String {
        format!("Time: {:.1}s", self.elapsed_secs)
    }
}
