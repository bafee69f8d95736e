//! Where die rolls come from.
//!
//! A game either replays a scripted roll sequence (for reproducible runs
//! and tests) or rolls a seeded [`GameRng`].

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, DIE_FACES};
use crate::error::GameError;

/// Dice configuration supplied with the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dice {
    /// Rolls consumed strictly in order, one per turn.
    Scripted(Vec<u8>),
    /// Uniform rolls from a seeded RNG.
    Random { seed: u64 },
}

impl Dice {
    /// Check that every scripted roll is a die face.
    pub fn validate(&self) -> Result<(), GameError> {
        if let Dice::Scripted(rolls) = self {
            if let Some((index, &value)) = rolls
                .iter()
                .enumerate()
                .find(|(_, r)| !(1..=DIE_FACES).contains(*r))
            {
                return Err(GameError::InvalidRoll { index, value });
            }
        }
        Ok(())
    }
}

/// Runtime roll source owned by the game.
#[derive(Clone, Debug)]
pub(crate) enum DiceSource {
    Scripted { rolls: Vec<u8>, next: usize },
    Random(GameRng),
}

impl DiceSource {
    pub(crate) fn new(dice: Dice) -> Self {
        match dice {
            Dice::Scripted(rolls) => DiceSource::Scripted { rolls, next: 0 },
            Dice::Random { seed } => DiceSource::Random(GameRng::new(seed)),
        }
    }

    /// Draw the roll for `turn`.
    ///
    /// Running out of scripted rolls is a broken configuration, not a game event.
    pub(crate) fn roll(&mut self, turn: u32) -> Result<u8, GameError> {
        match self {
            DiceSource::Scripted { rolls, next } => {
                let roll = *rolls.get(*next).ok_or(GameError::DiceExhausted { turn })?;
                *next += 1;
                Ok(roll)
            }
            DiceSource::Random(rng) => Ok(rng.roll_die()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_in_order() {
        let mut source = DiceSource::new(Dice::Scripted(vec![3, 1, 6]));

        assert_eq!(source.roll(1).unwrap(), 3);
        assert_eq!(source.roll(2).unwrap(), 1);
        assert_eq!(source.roll(3).unwrap(), 6);
    }

    #[test]
    fn test_scripted_exhaustion() {
        let mut source = DiceSource::new(Dice::Scripted(vec![2]));
        source.roll(1).unwrap();

        assert_eq!(source.roll(2), Err(GameError::DiceExhausted { turn: 2 }));
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = DiceSource::new(Dice::Random { seed: 9 });
        let mut b = DiceSource::new(Dice::Random { seed: 9 });

        for turn in 1..50 {
            assert_eq!(a.roll(turn).unwrap(), b.roll(turn).unwrap());
        }
    }

    #[test]
    fn test_validate_rejects_bad_face() {
        assert!(Dice::Scripted(vec![1, 6, 3]).validate().is_ok());
        assert_eq!(
            Dice::Scripted(vec![1, 7]).validate(),
            Err(GameError::InvalidRoll { index: 1, value: 7 })
        );
        assert_eq!(
            Dice::Scripted(vec![0]).validate(),
            Err(GameError::InvalidRoll { index: 0, value: 0 })
        );
        assert!(Dice::Random { seed: 0 }.validate().is_ok());
    }
}
