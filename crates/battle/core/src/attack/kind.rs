/// Attack pattern of a ship during daytime shelling.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DayAttackKind {
    #[default]
    Normal,
    DoubleShelling,
    CutinMainSecondary,
    CutinMainRadar,
    CutinMainAp,
    CutinMainMain,
    AirAttack,
    CutinAirAttack,
    DepthCharge,
    Torpedo,
    Rocket,
}

impl DayAttackKind {
    pub const fn is_air_attack(self) -> bool {
        matches!(self, Self::AirAttack | Self::CutinAirAttack)
    }

    /// Artillery-spotting multiplier applied after the shelling cap.
    pub const fn shelling_multiplier(self) -> f64 {
        match self {
            Self::DoubleShelling | Self::CutinMainRadar => 1.2,
            Self::CutinMainSecondary => 1.1,
            Self::CutinMainAp => 1.3,
            Self::CutinMainMain => 1.5,
            _ => 1.0,
        }
    }
}

/// Attack pattern of a ship during night battle.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum NightAttackKind {
    #[default]
    Normal,
    DoubleShelling,
    CutinMainTorpedo,
    CutinTorpedoTorpedo,
    CutinMainSecondary,
    CutinMainMain,
    AirAttack,
    DepthCharge,
    Torpedo,
}

impl NightAttackKind {
    pub const fn multiplier(self, torpedo_cutin: TorpedoCutinKind) -> f64 {
        match self {
            Self::DoubleShelling => 1.2,
            Self::CutinMainTorpedo => 1.3,
            Self::CutinTorpedoTorpedo => torpedo_cutin.multiplier(),
            Self::CutinMainSecondary => 1.75,
            Self::CutinMainMain => 2.0,
            _ => 1.0,
        }
    }
}

/// Variant of the torpedo-torpedo night cut-in.
///
/// Only submarines carrying late-model bow torpedoes upgrade the standard
/// cut-in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TorpedoCutinKind {
    #[default]
    Standard,
    /// Late-model bow torpedo plus submarine radar (×1.75)
    LateModelRadar,
    /// Two late-model bow torpedoes (×1.6)
    LateModelDouble,
}

impl TorpedoCutinKind {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.5,
            Self::LateModelRadar => 1.75,
            Self::LateModelDouble => 1.6,
        }
    }
}
