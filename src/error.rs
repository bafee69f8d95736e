//! Error types.
//!
//! `ConfigError` covers everything that can be wrong with a configuration
//! file. `GameError` covers misuse of the engine itself; a player running
//! out of money is never an error.

use thiserror::Error;

/// Errors that can occur while loading a game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The input has no content.
    #[error("The file must not be empty")]
    Empty,

    /// The input ended before the expected line.
    #[error("Line {line}: unexpected end of file, expected {expected}")]
    UnexpectedEof {
        /// Line that was expected (1-based).
        line: usize,
        /// What the line should have contained.
        expected: &'static str,
    },

    /// A token that should be a number is not one.
    #[error("Line {line}: '{token}' is not a valid number")]
    InvalidNumber {
        /// Line of the token (1-based).
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The board would have no fields.
    #[error("Line {line}: the number of fields must be at least 1")]
    TooFewFields {
        /// Line of the field count (1-based).
        line: usize,
    },

    /// Unknown field kind.
    #[error("Line {line}: '{kind}' is not a valid field (property/service/luck)")]
    UnknownField {
        /// Line of the field (1-based).
        line: usize,
        /// The offending kind.
        kind: String,
    },

    /// A service or luck field without its amount.
    #[error("Line {line}: {kind} must have a value")]
    MissingValue {
        /// Line of the field (1-based).
        line: usize,
        /// Field kind.
        kind: &'static str,
    },

    /// A property with an amount.
    #[error("Line {line}: property must not have a value")]
    UnexpectedValue {
        /// Line of the field (1-based).
        line: usize,
    },

    /// Fewer than three players.
    #[error("Line {line}: the number of players must be at least 3, found {found}")]
    TooFewPlayers {
        /// Line of the player count (1-based).
        line: usize,
        /// Declared player count.
        found: usize,
    },

    /// Player line is not `Name style`.
    #[error("Line {line}: a player must have a name and a play style: Name (greedy/careful/tactician)")]
    MalformedPlayer {
        /// Line of the player (1-based).
        line: usize,
    },

    /// Unknown play style.
    #[error("Line {line}: {source}")]
    UnknownStrategy {
        /// Line of the player (1-based).
        line: usize,
        /// Parse failure.
        #[source]
        source: crate::strategy::UnknownStrategy,
    },

    /// A roll that is not a die face.
    #[error("Line {line}: {value} is not a valid dice roll")]
    InvalidRoll {
        /// Line of the rolls (1-based).
        line: usize,
        /// The offending value.
        value: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine misuse. Distinct from the normal end of a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The board has no fields.
    #[error("the map must have at least 1 field")]
    EmptyMap,

    /// Fewer than three players.
    #[error("at least 3 players are required, found {found}")]
    TooFewPlayers {
        /// Number of players supplied.
        found: usize,
    },

    /// More players than a `PlayerId` can address.
    #[error("at most 255 players are supported, found {found}")]
    TooManyPlayers {
        /// Number of players supplied.
        found: usize,
    },

    /// A scripted roll is not a die face.
    #[error("scripted roll #{index} is {value}, expected 1-6")]
    InvalidRoll {
        /// Position in the script (0-based).
        index: usize,
        /// The offending value.
        value: u8,
    },

    /// The scripted rolls ran out before the game finished.
    #[error("scripted dice ran out on turn {turn}")]
    DiceExhausted {
        /// Turn that needed a roll (1-based).
        turn: u32,
    },

    /// The configured turn limit was reached.
    #[error("turn limit of {limit} reached before the game finished")]
    TurnLimitReached {
        /// The configured limit.
        limit: u32,
    },

    /// A step was requested after the game ended.
    #[error("the game is already over")]
    GameOver,
}
