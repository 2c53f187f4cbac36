use crate::env::ShipMaster;

/// Stat totals of a combatant, equipment contributions included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatTotals {
    pub firepower: i32,
    pub torpedo: i32,
    pub anti_air: i32,
    pub armor: i32,
    pub evasion: i32,
    pub asw: i32,
    pub los: i32,
    pub luck: i32,
}

/// Increments applied through modernization, on top of the master minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Modernization {
    pub firepower: i32,
    pub torpedo: i32,
    pub anti_air: i32,
    pub armor: i32,
    pub luck: i32,
    pub asw: i32,
}

impl Modernization {
    /// Increments still missing before each stat reaches its master maximum.
    ///
    /// ASW has no published cap and is reported as 0.
    pub fn remaining(&self, master: &ShipMaster) -> Modernization {
        Modernization {
            firepower: (master.firepower.span() - self.firepower).max(0),
            torpedo: (master.torpedo.span() - self.torpedo).max(0),
            anti_air: (master.anti_air.span() - self.anti_air).max(0),
            armor: (master.armor.span() - self.armor).max(0),
            luck: (master.luck.span() - self.luck).max(0),
            asw: 0,
        }
    }

    pub fn is_maxed(&self, master: &ShipMaster) -> bool {
        let left = self.remaining(master);
        left.firepower == 0 && left.torpedo == 0 && left.anti_air == 0 && left.armor == 0
    }
}
