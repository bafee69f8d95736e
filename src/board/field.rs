//! Board fields.
//!
//! The field set is closed: a property that can be bought and built on,
//! a service that charges a fixed cost, and a luck field that pays out a
//! fixed amount. Resolution logic matches on [`Field`] directly.

use serde::{Deserialize, Serialize};

use crate::core::{FieldSpec, PlayerId};

/// Price of buying an unowned property.
pub const PROPERTY_PRICE: i64 = 1_000;

/// Price of building a house on an owned property.
pub const HOUSE_PRICE: i64 = 4_000;

/// Rent for landing on someone else's property without a house.
pub const RENT: i64 = 500;

/// Rent for landing on someone else's property with a house.
pub const RENT_WITH_HOUSE: i64 = 2_000;

/// Position of a field on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldIndex(pub u32);

impl FieldIndex {
    /// Create a new field index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field {}", self.0)
    }
}

/// Ownership state of a property field.
///
/// Invariant: `has_house` implies `owner.is_some()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    owner: Option<PlayerId>,
    has_house: bool,
}

impl Property {
    /// An unowned property without a house.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owner: None,
            has_house: false,
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn has_house(&self) -> bool {
        self.has_house
    }

    /// Rent owed by a visitor: 0 unowned, [`RENT`] owned, [`RENT_WITH_HOUSE`] with a house.
    #[must_use]
    pub fn value(&self) -> i64 {
        match (self.owner, self.has_house) {
            (None, _) => 0,
            (Some(_), false) => RENT,
            (Some(_), true) => RENT_WITH_HOUSE,
        }
    }

    /// Record `player` as the owner. The property must be unowned.
    pub fn buy(&mut self, player: PlayerId) {
        debug_assert!(self.owner.is_none(), "property already owned by {:?}", self.owner);
        self.owner = Some(player);
    }

    /// Build a house if `player` owns the property; otherwise do nothing.
    pub fn build_house(&mut self, player: PlayerId) {
        if self.owner == Some(player) {
            self.has_house = true;
        }
    }

    /// Clear owner and house.
    pub fn reset(&mut self) {
        self.owner = None;
        self.has_house = false;
    }
}

/// One addressable position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Property(Property),
    Service { cost: i64 },
    Luck { payout: i64 },
}

impl Field {
    /// The amount this field is currently worth to a landing player.
    ///
    /// Rent for a property, cost for a service, payout for luck.
    #[must_use]
    pub fn value(&self) -> i64 {
        match self {
            Field::Property(property) => property.value(),
            Field::Service { cost } => *cost,
            Field::Luck { payout } => *payout,
        }
    }

    /// Short lowercase name of the field kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Property(_) => "property",
            Field::Service { .. } => "service",
            Field::Luck { .. } => "luck",
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Field::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            Field::Property(property) => Some(property),
            _ => None,
        }
    }
}

impl From<FieldSpec> for Field {
    fn from(spec: FieldSpec) -> Self {
        match spec {
            FieldSpec::Property => Field::Property(Property::new()),
            FieldSpec::Service { cost } => Field::Service { cost },
            FieldSpec::Luck { payout } => Field::Luck { payout },
        }
    }
}
