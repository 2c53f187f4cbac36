use arrayvec::ArrayVec;

use super::error::ResolveError;
use crate::config::BattleConfig;
use crate::equipment::Squadron;
use crate::ship::{Combatant, FleetRole};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Friend,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Friend => Self::Enemy,
            Self::Enemy => Self::Friend,
        }
    }
}

/// Main or escort fleet of one side.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FleetSlot {
    Main,
    Escort,
}

/// Stable address of one combatant within an engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantIndex {
    pub side: Side,
    pub fleet: FleetSlot,
    pub position: u8,
}

impl ParticipantIndex {
    pub const fn new(side: Side, fleet: FleetSlot, position: u8) -> Self {
        Self {
            side,
            fleet,
            position,
        }
    }
}

impl core::fmt::Display for ParticipantIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}#{}", self.side, self.fleet, self.position)
    }
}

type Fleet = ArrayVec<Combatant, { BattleConfig::MAX_FLEET_SIZE }>;

/// Both sides of one engagement, as they stand before the first phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Engagement {
    pub config: BattleConfig,
    friend_main: Fleet,
    friend_escort: Fleet,
    enemy_main: Fleet,
    enemy_escort: Fleet,
    squadrons: ArrayVec<Squadron, { BattleConfig::MAX_SQUADRONS }>,
}

impl Engagement {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Adds a ship to the end of a fleet and returns its index.
    ///
    /// Friendly ships take the fleet role of their slot when the friendly
    /// side is a combined fleet.
    pub fn push(
        &mut self,
        side: Side,
        fleet: FleetSlot,
        ship: Combatant,
    ) -> Result<ParticipantIndex, ResolveError> {
        let combined = self.config.combined_fleet != crate::config::CombinedFleetKind::None;
        let ship = match (side, fleet) {
            (Side::Friend, FleetSlot::Main) if combined => ship.with_role(FleetRole::Main),
            (Side::Friend, FleetSlot::Escort) if combined => ship.with_role(FleetRole::Escort),
            _ => ship,
        };
        let ships = self.fleet_mut(side, fleet);
        let position = ships.len() as u8;
        ships
            .try_push(ship)
            .map_err(|_| ResolveError::FleetFull { side, fleet })?;
        Ok(ParticipantIndex::new(side, fleet, position))
    }

    pub fn with_ships(
        mut self,
        side: Side,
        fleet: FleetSlot,
        ships: impl IntoIterator<Item = Combatant>,
    ) -> Result<Self, ResolveError> {
        for ship in ships {
            self.push(side, fleet, ship)?;
        }
        Ok(self)
    }

    pub fn add_squadron(&mut self, squadron: Squadron) -> Result<u8, ResolveError> {
        let index = self.squadrons.len() as u8;
        self.squadrons
            .try_push(squadron)
            .map_err(|_| ResolveError::TooManySquadrons)?;
        Ok(index)
    }

    pub fn fleet(&self, side: Side, fleet: FleetSlot) -> &[Combatant] {
        match (side, fleet) {
            (Side::Friend, FleetSlot::Main) => &self.friend_main,
            (Side::Friend, FleetSlot::Escort) => &self.friend_escort,
            (Side::Enemy, FleetSlot::Main) => &self.enemy_main,
            (Side::Enemy, FleetSlot::Escort) => &self.enemy_escort,
        }
    }

    fn fleet_mut(&mut self, side: Side, fleet: FleetSlot) -> &mut Fleet {
        match (side, fleet) {
            (Side::Friend, FleetSlot::Main) => &mut self.friend_main,
            (Side::Friend, FleetSlot::Escort) => &mut self.friend_escort,
            (Side::Enemy, FleetSlot::Main) => &mut self.enemy_main,
            (Side::Enemy, FleetSlot::Escort) => &mut self.enemy_escort,
        }
    }

    pub fn squadrons(&self) -> &[Squadron] {
        &self.squadrons
    }

    pub fn combatant(&self, index: ParticipantIndex) -> Option<&Combatant> {
        self.fleet(index.side, index.fleet)
            .get(usize::from(index.position))
    }

    /// Ships of one fleet with their indices.
    pub fn members(
        &self,
        side: Side,
        fleet: FleetSlot,
    ) -> impl Iterator<Item = (ParticipantIndex, &Combatant)> {
        self.fleet(side, fleet)
            .iter()
            .enumerate()
            .map(move |(position, ship)| {
                (ParticipantIndex::new(side, fleet, position as u8), ship)
            })
    }

    /// Every ship of the engagement: friends first, main before escort.
    pub fn participants(&self) -> impl Iterator<Item = (ParticipantIndex, &Combatant)> {
        [Side::Friend, Side::Enemy].into_iter().flat_map(move |side| {
            [FleetSlot::Main, FleetSlot::Escort]
                .into_iter()
                .flat_map(move |fleet| self.members(side, fleet))
        })
    }

    /// The fleet that fights when `preferred` is requested: escort fleets
    /// fall back to the main fleet on sides without one.
    pub fn fighting_fleet(&self, side: Side, preferred: FleetSlot) -> FleetSlot {
        if preferred == FleetSlot::Escort && self.fleet(side, FleetSlot::Escort).is_empty() {
            FleetSlot::Main
        } else {
            preferred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombinedFleetKind;
    use crate::env::HullClass;
    use crate::ship::test_support::combatant;

    #[test]
    fn push_assigns_positions_and_roles() {
        let config = BattleConfig::default().with_combined_fleet(CombinedFleetKind::SurfaceTaskForce);
        let mut engagement = Engagement::new(config);
        let first = engagement
            .push(Side::Friend, FleetSlot::Escort, combatant(HullClass::Destroyer))
            .unwrap();
        let second = engagement
            .push(Side::Friend, FleetSlot::Escort, combatant(HullClass::LightCruiser))
            .unwrap();
        assert_eq!(second.position, first.position + 1);
        assert_eq!(
            engagement.combatant(second).map(|ship| ship.role),
            Some(FleetRole::Escort)
        );
        assert_eq!(second.to_string(), "friend/escort#1");
    }

    #[test]
    fn fleets_are_bounded() {
        let mut engagement = Engagement::default();
        for _ in 0..BattleConfig::MAX_FLEET_SIZE {
            engagement
                .push(Side::Enemy, FleetSlot::Main, combatant(HullClass::Destroyer))
                .unwrap();
        }
        let err = engagement
            .push(Side::Enemy, FleetSlot::Main, combatant(HullClass::Destroyer))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::FleetFull {
                side: Side::Enemy,
                fleet: FleetSlot::Main
            }
        );
    }

    #[test]
    fn escort_falls_back_to_main() {
        let engagement = Engagement::default()
            .with_ships(Side::Enemy, FleetSlot::Main, [combatant(HullClass::Destroyer)])
            .unwrap();
        assert_eq!(
            engagement.fighting_fleet(Side::Enemy, FleetSlot::Escort),
            FleetSlot::Main
        );
        assert_eq!(engagement.participants().count(), 1);
    }
}
