//! # capitaly
//!
//! A deterministic simulator for Capitaly, a property board game.
//!
//! ## Rules
//!
//! Players share one cursor moving around a circular board of properties,
//! services and luck fields. Each player follows a fixed play style
//! (greedy, careful or tactician) when buying properties and houses. A
//! player who cannot pay rent or a service is eliminated and their
//! properties are released. The last player standing wins; the report
//! names the player who finished second to last.
//!
//! ## Design Principles
//!
//! 1. **Closed variants**: fields and strategies are enums and resolution
//!    matches on them.
//!
//! 2. **Indices, not references**: properties name their owner by
//!    `PlayerId`, so the map and the roster are owned independently.
//!
//! 3. **Reproducible**: scripted rolls or a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Player IDs and state, dice, RNG, configuration
//! - `board`: Fields and the circular map
//! - `strategy`: Greedy, careful and tactician play styles
//! - `rules`: Landing resolution shared by every play style
//! - `game`: The turn loop, elimination and reporting
//! - `loader`: Game description file parsing
//!
//! ## Example
//!
//! ```
//! use capitaly::{FieldSpec, Game, GameConfig, StrategyKind};
//!
//! let config = GameConfig::new(42)
//!     .with_field(FieldSpec::Property)
//!     .with_field(FieldSpec::Service { cost: 500 })
//!     .with_field(FieldSpec::Luck { payout: 300 })
//!     .with_field(FieldSpec::Property)
//!     .with_player("A", StrategyKind::Greedy)
//!     .with_player("B", StrategyKind::Careful)
//!     .with_player("C", StrategyKind::Tactician)
//!     .with_rolls(vec![1; 41]);
//!
//! let mut game = Game::new(config).unwrap();
//! let outcome = game.run().unwrap();
//!
//! assert_eq!(outcome.winner, "A");
//! assert_eq!(game.second_to_last(), Some("C"));
//! ```

pub mod core;
pub mod board;
pub mod strategy;
pub mod rules;
pub mod game;
pub mod loader;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Dice, FieldSpec, GameConfig, GameRng, Player, PlayerId, PlayerMap, PlayerSpec,
};

pub use crate::board::{Field, FieldIndex, Map, Property};

pub use crate::strategy::{Strategy, StrategyKind};

pub use crate::rules::{play_field, Landing};

pub use crate::game::{Game, GameStatus, Outcome, Standing, TurnRecord};

pub use crate::loader::{load_config, parse_config};

pub use crate::error::{ConfigError, GameError};
