//! Turn history and final outcome.

use serde::{Deserialize, Serialize};

use crate::board::FieldIndex;
use crate::core::PlayerId;
use crate::rules::Landing;

/// One resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// Player who moved.
    pub player: PlayerId,
    /// Die value used.
    pub roll: u8,
    /// Field landed on.
    pub position: FieldIndex,
    /// Effect of the landing.
    pub landing: Landing,
}

/// Final standing of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub balance: i64,
    pub eliminated: bool,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The last player standing.
    pub winner: String,
    /// Names in the order they were eliminated.
    pub eliminated: Vec<String>,
    /// The second player eliminated, i.e. the one who finished second to last.
    pub second_to_last: Option<String>,
    /// Number of turns played.
    pub turns: u32,
    /// Every player in roster order.
    pub standings: Vec<Standing>,
}
