//! Player identification, per-player storage and player state.
//!
//! ## PlayerId
//!
//! Index into the game roster, 0-based. Properties refer to their owner
//! through a `PlayerId` rather than a reference, so the map and the roster
//! can be owned independently by the game.
//!
//! ## PlayerMap
//!
//! Roster storage backed by `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Balance, owned properties, elimination flag and strategy of one player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::board::FieldIndex;
use crate::strategy::Strategy;

/// Money every player starts the game with.
pub const STARTING_BALANCE: i64 = 10_000;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player in the roster is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player, in roster order.
///
/// ```
/// use capitaly::core::{PlayerId, PlayerMap};
///
/// let mut balances = PlayerMap::from_vec(vec![10_000i64; 3]);
/// balances[PlayerId::new(1)] -= 500;
/// assert_eq!(balances[PlayerId::new(1)], 9_500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a PlayerMap from values already in roster order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player taking part in the game.
///
/// The player does not own its properties: the map does. `properties`
/// only records which fields point back at this player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: i64,
    properties: SmallVec<[FieldIndex; 8]>,
    eliminated: bool,
    strategy: Strategy,
}

impl Player {
    /// Create a player with the given starting balance.
    pub fn new(name: impl Into<String>, strategy: Strategy, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            properties: SmallVec::new(),
            eliminated: false,
            strategy,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Fields this player currently owns, in purchase order.
    #[must_use]
    pub fn properties(&self) -> &[FieldIndex] {
        &self.properties
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut Strategy {
        &mut self.strategy
    }

    /// Whether the balance covers `amount`.
    #[must_use]
    pub fn can_afford(&self, amount: i64) -> bool {
        self.balance >= amount
    }

    /// Deduct `amount`. No floor is enforced.
    pub fn pay(&mut self, amount: i64) {
        self.balance -= amount;
    }

    pub fn receive(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn add_property(&mut self, field: FieldIndex) {
        self.properties.push(field);
    }

    /// Mark the player as eliminated and hand back the fields it owned.
    ///
    /// The caller is responsible for resetting those fields on the map.
    pub(crate) fn eliminate(&mut self) -> SmallVec<[FieldIndex; 8]> {
        debug_assert!(!self.eliminated, "{} eliminated twice", self.name);
        self.eliminated = true;
        std::mem::take(&mut self.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(p0.index(), 0);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "Player 2");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec!["a", "b", "c"]);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], "c");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &"b"));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_payment_primitives() {
        let mut player = Player::new("Anna", Strategy::Greedy, 1_000);

        assert!(player.can_afford(1_000));
        assert!(!player.can_afford(1_001));

        player.pay(1_200);
        assert_eq!(player.balance(), -200);

        player.receive(700);
        assert_eq!(player.balance(), 500);
    }

    #[test]
    fn test_eliminate_releases_properties() {
        let mut player = Player::new("Bela", Strategy::Careful, STARTING_BALANCE);
        player.add_property(FieldIndex::new(0));
        player.add_property(FieldIndex::new(3));

        let released = player.eliminate();

        assert!(player.is_eliminated());
        assert!(player.properties().is_empty());
        assert_eq!(released.as_slice(), &[FieldIndex::new(0), FieldIndex::new(3)]);
    }
}
