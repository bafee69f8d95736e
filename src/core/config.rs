//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `FieldSpec`: one entry per board field, in board order
//! - `PlayerSpec`: one entry per player, in turn order
//! - `Dice`: scripted rolls or a seed
//!
//! The text file loader in [`crate::loader`] produces a `GameConfig`; tests
//! and tools can also build one directly.

use serde::{Deserialize, Serialize};

use super::dice::Dice;
use super::player::STARTING_BALANCE;
use crate::strategy::StrategyKind;

/// Description of one board field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSpec {
    /// A purchasable property, unowned at start.
    Property,
    /// Charges `cost` to every player landing on it.
    Service { cost: i64 },
    /// Pays `payout` to every player landing on it.
    Luck { payout: i64 },
}

/// Description of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name.
    pub name: String,
    /// Play style.
    pub strategy: StrategyKind,
}

impl PlayerSpec {
    /// Create a new player description.
    pub fn new(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board fields in order.
    pub fields: Vec<FieldSpec>,

    /// Players in turn order.
    pub players: Vec<PlayerSpec>,

    /// Source of die rolls.
    pub dice: Dice,

    /// Balance every player starts with.
    pub starting_balance: i64,

    /// Stop with an error after this many turns. `None` for unlimited.
    pub max_turns: Option<u32>,
}

impl GameConfig {
    /// Create an empty configuration rolling random dice from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            fields: Vec::new(),
            players: Vec::new(),
            dice: Dice::Random { seed },
            starting_balance: STARTING_BALANCE,
            max_turns: None,
        }
    }

    /// Add a field at the end of the board.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a player at the end of the turn order.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, strategy: StrategyKind) -> Self {
        self.players.push(PlayerSpec::new(name, strategy));
        self
    }

    /// Replay the given rolls instead of rolling randomly.
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl Into<Vec<u8>>) -> Self {
        self.dice = Dice::Scripted(rolls.into());
        self
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, limit: u32) -> Self {
        self.max_turns = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new(7)
            .with_field(FieldSpec::Property)
            .with_field(FieldSpec::Service { cost: 500 })
            .with_field(FieldSpec::Luck { payout: 300 })
            .with_player("A", StrategyKind::Greedy)
            .with_player("B", StrategyKind::Careful)
            .with_player("C", StrategyKind::Tactician)
            .with_max_turns(1_000);

        assert_eq!(config.fields.len(), 3);
        assert_eq!(config.players[2], PlayerSpec::new("C", StrategyKind::Tactician));
        assert_eq!(config.dice, Dice::Random { seed: 7 });
        assert_eq!(config.starting_balance, STARTING_BALANCE);
        assert_eq!(config.max_turns, Some(1_000));
    }

    #[test]
    fn test_with_rolls_replaces_seed() {
        let config = GameConfig::new(7).with_rolls([1, 2, 3]);
        assert_eq!(config.dice, Dice::Scripted(vec![1, 2, 3]));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(1)
            .with_field(FieldSpec::Service { cost: 200 })
            .with_player("A", StrategyKind::Greedy)
            .with_starting_balance(500);

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
