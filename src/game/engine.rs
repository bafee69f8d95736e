//! The simulation loop.
//!
//! ## Turn
//!
//! 1. Draw a die value (scripted or random)
//! 2. Pick the next player still in the game, in roster order
//! 3. Advance the shared map cursor and resolve the landed field
//! 4. Eliminate the player if the landing says so
//!
//! The game is finished the moment a single player remains.

use tracing::{debug, info, warn};

use super::record::{Outcome, Standing, TurnRecord};
use crate::board::{Field, Map};
use crate::core::dice::DiceSource;
use crate::core::{GameConfig, Player, PlayerId, PlayerMap};
use crate::error::GameError;
use crate::rules::{play_field, Landing};
use crate::strategy::Strategy;

/// Minimum roster size for a game to have a second-to-last player.
pub const MIN_PLAYERS: usize = 3;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Two or more players are still in the game.
    Running,
    /// Exactly one player remains.
    Finished { winner: PlayerId },
}

/// A running Capitaly game.
#[derive(Clone, Debug)]
pub struct Game {
    map: Map,
    players: PlayerMap<Player>,
    dice: DiceSource,
    /// Roster index to start searching from for the next player.
    turn_cursor: usize,
    active: usize,
    eliminations: Vec<PlayerId>,
    history: Vec<TurnRecord>,
    turn: u32,
    max_turns: Option<u32>,
}

impl Game {
    /// Build a game from a configuration.
    ///
    /// # Errors
    ///
    /// Fails if the board is empty, the roster has fewer than
    /// [`MIN_PLAYERS`] or more than 255 players, or a scripted roll is
    /// not a die face.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        if config.fields.is_empty() {
            return Err(GameError::EmptyMap);
        }
        if config.players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers {
                found: config.players.len(),
            });
        }
        if config.players.len() > 255 {
            return Err(GameError::TooManyPlayers {
                found: config.players.len(),
            });
        }
        config.dice.validate()?;

        let map = Map::new(config.fields.into_iter().map(Field::from).collect());
        let players = PlayerMap::from_vec(
            config
                .players
                .into_iter()
                .map(|spec| {
                    Player::new(
                        spec.name,
                        Strategy::new(spec.strategy),
                        config.starting_balance,
                    )
                })
                .collect(),
        );
        let active = players.player_count();

        info!(
            fields = map.len(),
            players = active,
            dice = ?config.dice,
            "game created"
        );

        Ok(Self {
            map,
            players,
            dice: DiceSource::new(config.dice),
            turn_cursor: 0,
            active,
            eliminations: Vec::new(),
            history: Vec::new(),
            turn: 0,
            max_turns: config.max_turns,
        })
    }

    // === Simulation ===

    /// Play one turn.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the game already finished,
    /// [`GameError::DiceExhausted`] if the scripted rolls ran out and
    /// [`GameError::TurnLimitReached`] if the configured limit was hit.
    /// No state changes when an error is returned.
    pub fn step(&mut self) -> Result<TurnRecord, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if let Some(limit) = self.max_turns {
            if self.turn >= limit {
                warn!(limit, active = self.active, "turn limit reached");
                return Err(GameError::TurnLimitReached { limit });
            }
        }

        let turn = self.turn + 1;
        let roll = self.dice.roll(turn)?;
        let actor = self.next_player();

        let (position, field) = self.map.advance(roll);
        let landing = play_field(&mut self.players, actor, position, field);
        self.turn = turn;

        {
            let player = &self.players[actor];
            debug!(
                turn,
                player = player.name(),
                roll,
                position = position.0,
                ?landing,
                balance = player.balance(),
                "landed"
            );
            match landing {
                Landing::BoughtProperty { .. } => {
                    info!(
                        player = player.name(),
                        position = position.0,
                        balance = player.balance(),
                        "bought a property"
                    );
                }
                Landing::BuiltHouse { .. } => {
                    info!(
                        player = player.name(),
                        position = position.0,
                        balance = player.balance(),
                        "bought a house"
                    );
                }
                _ => {}
            }
        }
        if landing.is_elimination() {
            self.eliminate(actor);
        }

        let record = TurnRecord {
            turn,
            player: actor,
            roll,
            position,
            landing,
        };
        self.history.push(record);

        if let GameStatus::Finished { winner } = self.status() {
            info!(winner = self.players[winner].name(), turns = self.turn, "game over");
        }

        Ok(record)
    }

    /// Play until one player remains.
    ///
    /// # Errors
    ///
    /// Any error from [`Game::step`] other than the game being over.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.step()?;
        }
    }

    /// Pick the next player still in the game and move the cursor past it.
    fn next_player(&mut self) -> PlayerId {
        let count = self.players.player_count();
        let mut index = self.turn_cursor;
        while self.players[PlayerId::new(index as u8)].is_eliminated() {
            index = (index + 1) % count;
        }
        self.turn_cursor = (index + 1) % count;
        PlayerId::new(index as u8)
    }

    /// Remove `player` from play and release its properties.
    fn eliminate(&mut self, player: PlayerId) {
        for index in self.players[player].eliminate() {
            if let Some(property) = self.map.field_mut(index).as_property_mut() {
                property.reset();
            }
        }
        self.eliminations.push(player);
        self.active -= 1;

        info!(
            player = self.players[player].name(),
            order = self.eliminations.len(),
            remaining = self.active,
            "player lost the game"
        );
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.active > 1 {
            return GameStatus::Running;
        }
        match self.players.iter().find(|(_, p)| !p.is_eliminated()) {
            Some((winner, _)) => GameStatus::Finished { winner },
            None => GameStatus::Running,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active <= 1
    }

    /// The last player standing, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status() {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Running => None,
        }
    }

    /// Name of the player who finished second to last: the second one
    /// eliminated. `None` until the game is finished.
    #[must_use]
    pub fn second_to_last(&self) -> Option<&str> {
        if !self.is_finished() {
            return None;
        }
        self.eliminations
            .get(1)
            .map(|&id| self.players[id].name())
    }

    /// Summary of the finished game, `None` while it is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let winner = self.winner()?;
        Some(Outcome {
            winner: self.players[winner].name().to_string(),
            eliminated: self
                .eliminations
                .iter()
                .map(|&id| self.players[id].name().to_string())
                .collect(),
            second_to_last: self.second_to_last().map(str::to_string),
            turns: self.turn,
            standings: self
                .players
                .iter()
                .map(|(_, p)| Standing {
                    name: p.name().to_string(),
                    balance: p.balance(),
                    eliminated: p.is_eliminated(),
                })
                .collect(),
        })
    }

    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Number of players still in the game.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Players in the order they were eliminated.
    #[must_use]
    pub fn eliminations(&self) -> &[PlayerId] {
        &self.eliminations
    }

    /// Every turn played so far.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Number of turns played so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turn
    }
}
