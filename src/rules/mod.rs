//! Field resolution rules.
//!
//! Every strategy shares the same landing protocol:
//! - Unowned property: the strategy may buy it
//! - Own property without a house: the strategy may build
//! - Someone else's property: pay rent or be eliminated
//! - Service: pay the cost or be eliminated
//! - Luck: collect the payout

pub mod landing;

pub use landing::{play_field, Landing};
