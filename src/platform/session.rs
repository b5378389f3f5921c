//! Fixed-step frame driver
//!
//! Accumulates frame time, runs the simulation in `SIM_DT` substeps and
//! pushes the resulting events and status to the presenter.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{Presenter, StatusLine, present_events};
use crate::settings::GameConfig;
use crate::sim::{GameState, TickInput, tick};

use super::autopilot::Autopilot;
use super::stage::HeadlessStage;

/// A running game bound to a presenter
pub struct Session<P: Presenter> {
    state: GameState,
    presenter: P,
    accumulator: f32,
}

impl<P: Presenter> Session<P> {
    /// Create and start a game
    pub fn new(config: &GameConfig, seed: u64, presenter: P) -> Self {
        let mut state = GameState::new(config, seed);
        state.start();
        let mut session = Self {
            state,
            presenter,
            accumulator: 0.0,
        };
        session.flush();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn is_over(&self) -> bool {
        self.state.outcome().is_some()
    }

    /// Advance by one rendered frame. Returns the number of substeps run.
    ///
    /// Pickups and feed requests are one-shot: they apply to the first
    /// substep only.
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> u32 {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut input = input.clone();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            input.pickups.clear();
            input.feed = None;
        }

        self.flush();
        substeps
    }

    fn flush(&mut self) {
        let events = self.state.drain_events();
        present_events(&events, &mut self.presenter);
        self.presenter.render_status(&StatusLine::from_state(&self.state));
    }
}

/// Play one full game on the headless stage with the autopilot at 60 fps
pub fn run_headless(config: &GameConfig, seed: u64) -> Session<HeadlessStage> {
    let mut session = Session::new(config, seed, HeadlessStage::new(config));
    let mut autopilot = Autopilot::default();

    // A little slack past the last turn for accumulated float error
    let game_secs = config.max_turn as f32 * config.turn_duration_secs + 5.0;
    let max_frames = (game_secs / SIM_DT).ceil() as u64;

    for _ in 0..max_frames {
        if session.is_over() {
            break;
        }
        let player_x = session.state().player.x;
        let pickups = session.presenter_mut().advance(SIM_DT, player_x);
        let mut input = autopilot.plan(session.state(), session.presenter(), SIM_DT);
        input.pickups = pickups;
        session.frame(SIM_DT, &input);
    }

    match session.state().outcome() {
        Some(outcome) => log::info!("Headless game finished: {:?}", outcome),
        None => log::warn!("Headless game stopped before an outcome"),
    }
    session
}
