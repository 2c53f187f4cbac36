/// Tactical posture of both fleets at the start of the engagement.
///
/// Scales every daytime power formula (shelling, aircraft, torpedo and
/// anti-submarine). Night battle ignores it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EngagementForm {
    /// Parallel engagement (×1.0)
    #[default]
    Parallel,
    /// Head-on (reversed) engagement (×0.8)
    HeadOn,
    /// Crossing the T, advantageous (×1.2)
    TAdvantage,
    /// Crossing the T, disadvantageous (×0.6)
    TDisadvantage,
}

impl EngagementForm {
    /// Power multiplier applied after the HP penalty.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Parallel => 1.0,
            Self::HeadOn => 0.8,
            Self::TAdvantage => 1.2,
            Self::TDisadvantage => 0.6,
        }
    }
}

/// Organisation of a two-fleet combined formation.
///
/// Decides the role offsets added to shelling and aircraft power. `None`
/// means the friendly side sorties as a single fleet.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombinedFleetKind {
    #[default]
    None,
    CarrierTaskForce,
    SurfaceTaskForce,
    TransportEscort,
}

/// Battle configuration and structural limits.
///
/// Supplied once at the start of a resolution and treated as immutable for
/// its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Engagement form used by the daytime power formulas.
    pub engagement_form: EngagementForm,
    /// Combined-fleet organisation of the friendly side.
    pub combined_fleet: CombinedFleetKind,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Regular equipment slots per ship (the expansion slot is extra).
    pub const MAX_REGULAR_SLOTS: usize = 6;
    /// Regular slots plus the expansion slot.
    pub const MAX_SLOTS: usize = Self::MAX_REGULAR_SLOTS + 1;
    /// Ships per fleet.
    pub const MAX_FLEET_SIZE: usize = 7;
    /// Land-based squadrons that may join the base air phases.
    pub const MAX_SQUADRONS: usize = 12;

    pub fn new(engagement_form: EngagementForm, combined_fleet: CombinedFleetKind) -> Self {
        Self {
            engagement_form,
            combined_fleet,
        }
    }

    pub fn with_engagement_form(mut self, engagement_form: EngagementForm) -> Self {
        self.engagement_form = engagement_form;
        self
    }

    pub fn with_combined_fleet(mut self, combined_fleet: CombinedFleetKind) -> Self {
        self.combined_fleet = combined_fleet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn engagement_form_multipliers() {
        assert_eq!(EngagementForm::Parallel.multiplier(), 1.0);
        assert_eq!(EngagementForm::HeadOn.multiplier(), 0.8);
        assert_eq!(EngagementForm::TAdvantage.multiplier(), 1.2);
        assert_eq!(EngagementForm::TDisadvantage.multiplier(), 0.6);
    }

    #[test]
    fn engagement_form_parses_snake_case() {
        assert_eq!(
            EngagementForm::from_str("t_advantage").unwrap(),
            EngagementForm::TAdvantage
        );
        assert_eq!(
            EngagementForm::from_str("Head_On").unwrap(),
            EngagementForm::HeadOn
        );
        assert!(EngagementForm::from_str("diagonal").is_err());
    }

    #[test]
    fn default_config_is_single_parallel() {
        let config = BattleConfig::default();
        assert_eq!(config.engagement_form, EngagementForm::Parallel);
        assert_eq!(config.combined_fleet, CombinedFleetKind::None);
    }
}
