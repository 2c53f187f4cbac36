/// Classification of an equipped item.
///
/// Every formula matches on this tag instead of raw master-data codes. Codes
/// the engine has no rule for become [`CategoryTag::Generic`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CategoryTag {
    SmallCaliberMainGun,
    MediumCaliberMainGun,
    LargeCaliberMainGun,
    SecondaryGun,
    Torpedo,
    CarrierFighter,
    CarrierDiveBomber,
    CarrierTorpedoBomber,
    CarrierRecon,
    SeaplaneRecon,
    SeaplaneBomber,
    SmallRadar,
    LargeRadar,
    Sonar,
    DepthCharge,
    DepthChargeProjector,
    ArmorPiercingShell,
    AntiAircraftGun,
    MidgetSubmarine,
    LandingCraft,
    Autogyro,
    AswPatrolAircraft,
    Searchlight,
    SubmarineTorpedo,
    AaFireDirector,
    RocketLauncher,
    LargeSonar,
    LargeSearchlight,
    SpecialAmphibiousTank,
    LandBasedAttacker,
    JetFighterBomber,
    /// Anything without a dedicated rule.
    Generic,
}

impl CategoryTag {
    pub const fn is_main_gun(self) -> bool {
        matches!(
            self,
            Self::SmallCaliberMainGun | Self::MediumCaliberMainGun | Self::LargeCaliberMainGun
        )
    }

    pub const fn is_radar(self) -> bool {
        matches!(self, Self::SmallRadar | Self::LargeRadar)
    }

    pub const fn is_sonar(self) -> bool {
        matches!(self, Self::Sonar | Self::LargeSonar)
    }

    /// Seaplanes that can spot for artillery cut-ins.
    pub const fn is_spotter(self) -> bool {
        matches!(self, Self::SeaplaneRecon | Self::SeaplaneBomber)
    }

    /// Categories that occupy aircraft capacity.
    pub const fn is_aircraft(self) -> bool {
        matches!(
            self,
            Self::CarrierFighter
                | Self::CarrierDiveBomber
                | Self::CarrierTorpedoBomber
                | Self::CarrierRecon
                | Self::SeaplaneRecon
                | Self::SeaplaneBomber
                | Self::Autogyro
                | Self::AswPatrolAircraft
                | Self::LandBasedAttacker
                | Self::JetFighterBomber
        )
    }
}
