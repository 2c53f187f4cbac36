//! Anti-submarine equipment synergy.
//!
//! Depth charges, projectors and sonars multiply anti-submarine power when
//! carried together. The multiplier is never below 1.0.

use crate::equipment::{CategoryCounts, CategoryTag};

/// Counts of the anti-submarine equipment that takes part in synergy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AswEquipment {
    pub charges: u8,
    pub projectors: u8,
    /// Regular and large sonars together.
    pub sonars: u8,
    pub large_sonars: u8,
}

impl AswEquipment {
    pub fn from_counts(counts: &CategoryCounts) -> Self {
        Self {
            charges: counts.count(CategoryTag::DepthCharge),
            projectors: counts.count(CategoryTag::DepthChargeProjector),
            sonars: counts.sonars(),
            large_sonars: counts.count(CategoryTag::LargeSonar),
        }
    }

    fn projector_sonar(&self) -> f64 {
        if self.projectors > 0 && self.sonars > 0 {
            1.15
        } else {
            1.0
        }
    }

    fn charge_projector(&self) -> f64 {
        if self.charges > 0 && self.projectors > 0 {
            1.1
        } else {
            1.0
        }
    }

    fn charge_sonar(&self, projector_sonar: f64, charge_projector: f64) -> f64 {
        let triple = projector_sonar > 1.0 && charge_projector > 1.0 && self.large_sonars > 0;
        if !triple && self.charges > 0 && self.sonars > 0 {
            0.15
        } else {
            0.0
        }
    }

    /// Multiplicative ASW bonus.
    pub fn multiplier(&self) -> f64 {
        let projector_sonar = self.projector_sonar();
        let charge_projector = self.charge_projector();
        let charge_sonar = self.charge_sonar(projector_sonar, charge_projector);
        projector_sonar * (charge_projector + charge_sonar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_equipment_is_neutral() {
        assert_eq!(AswEquipment::default().multiplier(), 1.0);
    }

    #[test]
    fn single_pairs() {
        let projector_sonar = AswEquipment {
            projectors: 1,
            sonars: 1,
            ..Default::default()
        };
        assert!(close(projector_sonar.multiplier(), 1.15));

        let charge_projector = AswEquipment {
            charges: 1,
            projectors: 1,
            ..Default::default()
        };
        assert!(close(charge_projector.multiplier(), 1.1));

        let charge_sonar = AswEquipment {
            charges: 1,
            sonars: 1,
            ..Default::default()
        };
        assert!(close(charge_sonar.multiplier(), 1.15));
    }

    #[test]
    fn full_set_with_large_sonar_drops_the_charge_sonar_term() {
        let regular = AswEquipment {
            charges: 1,
            projectors: 1,
            sonars: 1,
            large_sonars: 0,
        };
        assert!(close(regular.multiplier(), 1.15 * 1.25));

        let large = AswEquipment {
            charges: 1,
            projectors: 1,
            sonars: 1,
            large_sonars: 1,
        };
        assert!(close(large.multiplier(), 1.15 * 1.1));
    }

    #[test]
    fn exhaustive_small_counts() {
        for charges in 0..=2u8 {
            for projectors in 0..=2u8 {
                for sonars in 0..=2u8 {
                    for large_sonars in 0..=sonars {
                        let set = AswEquipment {
                            charges,
                            projectors,
                            sonars,
                            large_sonars,
                        };
                        let ps = if projectors > 0 && sonars > 0 { 1.15 } else { 1.0 };
                        let cp = if charges > 0 && projectors > 0 { 1.1 } else { 1.0 };
                        let cs = if !(ps > 1.0 && cp > 1.0 && large_sonars > 0)
                            && charges > 0
                            && sonars > 0
                        {
                            0.15
                        } else {
                            0.0
                        };
                        let got = set.multiplier();
                        assert!(close(got, ps * (cp + cs)), "{set:?} -> {got}");
                        assert!(got >= 1.0, "{set:?} -> {got}");
                    }
                }
            }
        }
    }

    #[test]
    fn large_sonars_count_as_sonars() {
        let counts = CategoryCounts::from_tags([
            CategoryTag::LargeSonar,
            CategoryTag::DepthChargeProjector,
        ]);
        let set = AswEquipment::from_counts(&counts);
        assert_eq!(set.sonars, 1);
        assert_eq!(set.large_sonars, 1);
        assert!(close(set.multiplier(), 1.15));
    }
}
