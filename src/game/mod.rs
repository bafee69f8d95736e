//! The Capitaly simulation.
//!
//! Players take turns moving a shared cursor around the map. Whoever
//! cannot pay rent or a service is eliminated and their properties go
//! back on the market. The game ends when one player remains; the report
//! names the player who finished second to last.

mod engine;
mod record;

pub use engine::{Game, GameStatus, MIN_PLAYERS};
pub use record::{Outcome, Standing, TurnRecord};
