//! Deterministic die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical roll sequence
//! - **Portable**: ChaCha8 gives the same stream on every platform
//!
//! ```
//! use capitaly::core::GameRng;
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//!
//! for _ in 0..20 {
//!     assert_eq!(rng1.roll_die(), rng2.roll_die());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Seeded RNG for random games.
///
/// Uses ChaCha8 so a logged seed reproduces a run on any platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll one die, uniformly in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}
