//! Play styles.
//!
//! Strategies only decide whether to take an opportunity: buying an
//! unowned property or building a house on one's own property. Paying
//! rent and services and collecting luck are mandatory and handled by
//! [`crate::rules`].
//!
//! - **Greedy**: takes every affordable opportunity.
//! - **Careful**: takes an affordable opportunity only if at least half of
//!   the current balance remains afterwards.
//! - **Tactician**: takes every other affordable opportunity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Play style named in the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Greedy,
    Careful,
    Tactician,
}

impl StrategyKind {
    /// All play styles, in the order the configuration format lists them.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Greedy,
        StrategyKind::Careful,
        StrategyKind::Tactician,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::Careful => "careful",
            StrategyKind::Tactician => "tactician",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a play style name that is not one of the known kinds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid play style (greedy, careful, tactician)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// A player's decision policy together with any state it keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Greedy,
    Careful,
    /// `toggle` flips on every affordable opportunity; the opportunity is
    /// taken when it is true after the flip.
    Tactician { toggle: bool },
}

impl Strategy {
    /// Fresh strategy state for a play style.
    #[must_use]
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Greedy => Strategy::Greedy,
            StrategyKind::Careful => Strategy::Careful,
            StrategyKind::Tactician => Strategy::Tactician { toggle: false },
        }
    }

    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Greedy => StrategyKind::Greedy,
            Strategy::Careful => StrategyKind::Careful,
            Strategy::Tactician { .. } => StrategyKind::Tactician,
        }
    }

    /// Decide whether to spend `price` out of `balance` on an opportunity.
    ///
    /// Unaffordable opportunities are always declined and leave the
    /// strategy state untouched.
    pub fn take_opportunity(&mut self, balance: i64, price: i64) -> bool {
        if balance < price {
            return false;
        }

        match self {
            Strategy::Greedy => true,
            Strategy::Careful => balance - price >= balance / 2,
            Strategy::Tactician { toggle } => {
                *toggle = !*toggle;
                *toggle
            }
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Strategy::new(kind)
    }
}
