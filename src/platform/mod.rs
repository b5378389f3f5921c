//! Platform layer
//!
//! A headless stand-in for the engine side of the game:
//! - `stage`: falling fruit entities, expiry, pickup overlap
//! - `session`: fixed-step frame driver that feeds the simulation
//! - `autopilot`: scripted input for demos and tests

pub mod autopilot;
pub mod session;
pub mod stage;

pub use autopilot::Autopilot;
pub use session::{Session, run_headless};
pub use stage::{FallingFruit, HeadlessStage};
