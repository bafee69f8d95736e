//! Landing resolution.
//!
//! `play_field` applies the effect of one field to the player who landed
//! on it. Only buy and build decisions go through the player's strategy;
//! everything else is mandatory.
//!
//! Elimination is reported, not performed: resetting the eliminated
//! player's properties needs the whole map, which the caller owns.

use serde::{Deserialize, Serialize};

use crate::board::{Field, FieldIndex, HOUSE_PRICE, PROPERTY_PRICE};
use crate::core::{Player, PlayerId, PlayerMap};

/// What happened when a player landed on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Bought the unowned property.
    BoughtProperty { price: i64 },
    /// Built a house on an owned property.
    BuiltHouse { price: i64 },
    /// Paid rent to the property's owner.
    PaidRent { owner: PlayerId, amount: i64 },
    /// Paid a service.
    PaidService { cost: i64 },
    /// Collected a luck payout.
    ReceivedLuck { payout: i64 },
    /// Could afford the opportunity but the strategy passed.
    Declined { price: i64 },
    /// Nothing to do: an own property with a house, or an unaffordable opportunity.
    Idle,
    /// Could not pay `debt`. `creditor` is the property owner, `None` for a service.
    Eliminated { debt: i64, creditor: Option<PlayerId> },
}

impl Landing {
    #[must_use]
    pub fn is_elimination(&self) -> bool {
        matches!(self, Landing::Eliminated { .. })
    }
}

/// Resolve `field` at `position` for `actor`.
///
/// Mutates the balances of `actor` (and a property owner receiving rent)
/// and the ownership state of `field`. A returned
/// [`Landing::Eliminated`] must be followed by the caller eliminating
/// `actor`.
pub fn play_field(
    players: &mut PlayerMap<Player>,
    actor: PlayerId,
    position: FieldIndex,
    field: &mut Field,
) -> Landing {
    match field {
        Field::Property(property) => match property.owner() {
            None => {
                let player = &mut players[actor];
                if !player.can_afford(PROPERTY_PRICE) {
                    return Landing::Idle;
                }
                let balance = player.balance();
                if !player.strategy_mut().take_opportunity(balance, PROPERTY_PRICE) {
                    return Landing::Declined { price: PROPERTY_PRICE };
                }
                player.pay(PROPERTY_PRICE);
                player.add_property(position);
                property.buy(actor);
                Landing::BoughtProperty { price: PROPERTY_PRICE }
            }
            Some(owner) if owner == actor => {
                let player = &mut players[actor];
                if property.has_house() || !player.can_afford(HOUSE_PRICE) {
                    return Landing::Idle;
                }
                let balance = player.balance();
                if !player.strategy_mut().take_opportunity(balance, HOUSE_PRICE) {
                    return Landing::Declined { price: HOUSE_PRICE };
                }
                player.pay(HOUSE_PRICE);
                property.build_house(actor);
                Landing::BuiltHouse { price: HOUSE_PRICE }
            }
            Some(owner) => {
                let rent = property.value();
                if !players[actor].can_afford(rent) {
                    return Landing::Eliminated {
                        debt: rent,
                        creditor: Some(owner),
                    };
                }
                players[actor].pay(rent);
                players[owner].receive(rent);
                Landing::PaidRent { owner, amount: rent }
            }
        },
        Field::Service { cost } => {
            let cost = *cost;
            let player = &mut players[actor];
            if !player.can_afford(cost) {
                return Landing::Eliminated {
                    debt: cost,
                    creditor: None,
                };
            }
            player.pay(cost);
            Landing::PaidService { cost }
        }
        Field::Luck { payout } => {
            players[actor].receive(*payout);
            Landing::ReceivedLuck { payout: *payout }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Property, RENT, RENT_WITH_HOUSE};
    use crate::strategy::{Strategy, StrategyKind};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const AT: FieldIndex = FieldIndex::new(0);

    fn roster(kinds: &[StrategyKind], balance: i64) -> PlayerMap<Player> {
        PlayerMap::from_vec(
            kinds
                .iter()
                .enumerate()
                .map(|(i, &k)| Player::new(format!("P{i}"), Strategy::new(k), balance))
                .collect(),
        )
    }

    fn owned_by(owner: PlayerId, house: bool) -> Field {
        let mut property = Property::new();
        property.buy(owner);
        if house {
            property.build_house(owner);
        }
        Field::Property(property)
    }

    #[test]
    fn test_greedy_buys_unowned() {
        let mut players = roster(&[StrategyKind::Greedy], 1_000);
        let mut field = Field::Property(Property::new());

        let landing = play_field(&mut players, P0, AT, &mut field);

        assert_eq!(landing, Landing::BoughtProperty { price: PROPERTY_PRICE });
        assert_eq!(players[P0].balance(), 0);
        assert_eq!(players[P0].properties(), &[AT]);
        assert_eq!(field.as_property().unwrap().owner(), Some(P0));
    }

    #[test]
    fn test_unaffordable_property_is_idle() {
        let mut players = roster(&[StrategyKind::Greedy], 999);
        let mut field = Field::Property(Property::new());

        assert_eq!(play_field(&mut players, P0, AT, &mut field), Landing::Idle);
        assert_eq!(field.as_property().unwrap().owner(), None);
        assert_eq!(players[P0].balance(), 999);
    }

    #[test]
    fn test_careful_declines_below_half() {
        let mut players = roster(&[StrategyKind::Careful], 1_500);
        let mut field = Field::Property(Property::new());

        assert_eq!(
            play_field(&mut players, P0, AT, &mut field),
            Landing::Declined { price: PROPERTY_PRICE }
        );
        assert!(players[P0].properties().is_empty());
    }

    #[test]
    fn test_owner_builds_house() {
        let mut players = roster(&[StrategyKind::Greedy], 5_000);
        let mut field = owned_by(P0, false);

        let landing = play_field(&mut players, P0, AT, &mut field);

        assert_eq!(landing, Landing::BuiltHouse { price: HOUSE_PRICE });
        assert_eq!(players[P0].balance(), 1_000);
        assert!(field.as_property().unwrap().has_house());
    }

    #[test]
    fn test_owner_with_house_is_idle() {
        let mut players = roster(&[StrategyKind::Greedy], 50_000);
        let mut field = owned_by(P0, true);

        assert_eq!(play_field(&mut players, P0, AT, &mut field), Landing::Idle);
        assert_eq!(players[P0].balance(), 50_000);
    }

    #[test]
    fn test_visitor_pays_rent_to_owner() {
        let mut players = roster(&[StrategyKind::Greedy, StrategyKind::Careful], 3_000);
        let mut field = owned_by(P0, true);

        let landing = play_field(&mut players, P1, AT, &mut field);

        assert_eq!(landing, Landing::PaidRent { owner: P0, amount: RENT_WITH_HOUSE });
        assert_eq!(players[P1].balance(), 1_000);
        assert_eq!(players[P0].balance(), 5_000);
    }

    #[test]
    fn test_visitor_unable_to_pay_rent_pays_nothing() {
        let mut players = roster(&[StrategyKind::Greedy, StrategyKind::Tactician], 400);
        let mut field = owned_by(P0, false);

        let landing = play_field(&mut players, P1, AT, &mut field);

        assert_eq!(landing, Landing::Eliminated { debt: RENT, creditor: Some(P0) });
        assert_eq!(players[P1].balance(), 400);
        assert_eq!(players[P0].balance(), 400);
    }

    #[test]
    fn test_exact_rent_is_affordable() {
        let mut players = roster(&[StrategyKind::Greedy, StrategyKind::Greedy], RENT);
        let mut field = owned_by(P0, false);

        assert!(!play_field(&mut players, P1, AT, &mut field).is_elimination());
        assert_eq!(players[P1].balance(), 0);
    }

    #[test]
    fn test_service_charges_or_eliminates() {
        let mut players = roster(&[StrategyKind::Careful], 700);
        let mut field = Field::Service { cost: 500 };

        assert_eq!(
            play_field(&mut players, P0, AT, &mut field),
            Landing::PaidService { cost: 500 }
        );
        assert_eq!(players[P0].balance(), 200);

        assert_eq!(
            play_field(&mut players, P0, AT, &mut field),
            Landing::Eliminated { debt: 500, creditor: None }
        );
        assert_eq!(players[P0].balance(), 200);
    }

    #[test]
    fn test_luck_always_pays() {
        let mut players = roster(&[StrategyKind::Tactician], 0);
        let mut field = Field::Luck { payout: 300 };

        assert_eq!(
            play_field(&mut players, P0, AT, &mut field),
            Landing::ReceivedLuck { payout: 300 }
        );
        assert_eq!(players[P0].balance(), 300);
    }

    #[test]
    fn test_tactician_alternates_across_opportunity_kinds() {
        let mut players = roster(&[StrategyKind::Tactician], 20_000);
        let mut first = Field::Property(Property::new());
        let mut second = Field::Property(Property::new());

        // 1st opportunity: buy.
        assert!(matches!(
            play_field(&mut players, P0, AT, &mut first),
            Landing::BoughtProperty { .. }
        ));
        // 2nd: skip the house.
        assert!(matches!(
            play_field(&mut players, P0, AT, &mut first),
            Landing::Declined { .. }
        ));
        // 3rd: build it.
        assert!(matches!(
            play_field(&mut players, P0, AT, &mut first),
            Landing::BuiltHouse { .. }
        ));
        // 4th: skip a fresh property.
        assert!(matches!(
            play_field(&mut players, P0, FieldIndex::new(1), &mut second),
            Landing::Declined { .. }
        ));
        assert_eq!(players[P0].balance(), 20_000 - PROPERTY_PRICE - HOUSE_PRICE);
    }
}
