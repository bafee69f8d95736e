//! Core engine types: players, dice, RNG, configuration.
//!
//! These are the building blocks shared by the board, the strategies
//! and the simulation loop.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;

pub use player::{Player, PlayerId, PlayerMap, STARTING_BALANCE};
pub use rng::{GameRng, DIE_FACES};
pub use dice::Dice;
pub use config::{FieldSpec, GameConfig, PlayerSpec};
