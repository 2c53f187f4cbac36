//! Seeded damage resolution.
//!
//! A reference [`DamageResolver`] for batch runs. Hit rolls and armor
//! mitigation live here, outside the predicted-power core, which only ever
//! hands a strike's power to whatever resolver it is given.

use battle_core::{Attacker, DamageResolver, FleetSlot, Side, Strike};

use crate::rng::{PcgRng, compute_seed};

/// Damage resolver with a hit roll, an armor roll and scratch damage.
///
/// # Formula
///
/// ```text
/// hit        = d100 <= hit_chance
/// mitigation = floor((armor * 7 + rand[0, armor) * 6) / 10)
/// damage     = power - mitigation                        if power > mitigation
///            = floor((hp * 6 + rand[0, hp) * 8) / 100)   otherwise (scratch)
/// ```
///
/// Every roll is seeded from the base seed, the strike's sequence number
/// and its attacker, so a battle replays exactly.
#[derive(Clone, Copy, Debug)]
pub struct SeededResolver {
    seed: u64,
    hit_chance: u32,
    rng: PcgRng,
}

impl SeededResolver {
    pub const DEFAULT_HIT_CHANCE: u32 = 90;

    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            hit_chance: Self::DEFAULT_HIT_CHANCE,
            rng: PcgRng,
        }
    }

    /// Percentage of strikes that connect, clamped to 100.
    pub fn with_hit_chance(mut self, hit_chance: u32) -> Self {
        self.hit_chance = hit_chance.min(100);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn attacker_code(attacker: Attacker) -> u32 {
        match attacker {
            Attacker::Ship(index) => {
                let side = match index.side {
                    Side::Friend => 0,
                    Side::Enemy => 1,
                };
                let fleet = match index.fleet {
                    FleetSlot::Main => 0,
                    FleetSlot::Escort => 1,
                };
                (side << 16) | (fleet << 8) | u32::from(index.position)
            }
            Attacker::Squadron(index) => 0xff00_0000 | u32::from(index),
        }
    }

    fn roll_seed(&self, strike: &Strike, context: u32) -> u64 {
        compute_seed(
            self.seed,
            u64::from(strike.sequence),
            Self::attacker_code(strike.attacker),
            context,
        )
    }
}

impl DamageResolver for SeededResolver {
    fn resolve(&self, strike: &Strike) -> u32 {
        if strike.power == 0 {
            return 0;
        }
        if self.rng.roll_d100(self.roll_seed(strike, 0)) > self.hit_chance {
            return 0;
        }

        let armor = strike.defender_armor.max(0) as u32;
        let mitigation = (armor * 7 + self.rng.below(self.roll_seed(strike, 1), armor) * 6) / 10;
        if strike.power > mitigation {
            return strike.power - mitigation;
        }

        let hp = strike.defender_hp.current();
        (hp * 6 + self.rng.below(self.roll_seed(strike, 2), hp) * 8) / 100
    }
}
