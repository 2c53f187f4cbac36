use crate::config::{BattleConfig, CombinedFleetKind, EngagementForm};

/// Engagement-wide inputs shared by every daytime power formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerContext {
    pub form: EngagementForm,
    /// [`CombinedFleetKind::None`] unless the friendly side is combined.
    pub combined: CombinedFleetKind,
}

impl PowerContext {
    pub fn new(form: EngagementForm, combined: CombinedFleetKind) -> Self {
        Self { form, combined }
    }

    /// Single-fleet context with the given engagement form.
    pub fn single(form: EngagementForm) -> Self {
        Self::new(form, CombinedFleetKind::None)
    }

    pub fn is_combined(&self) -> bool {
        self.combined != CombinedFleetKind::None
    }
}

impl From<&BattleConfig> for PowerContext {
    fn from(config: &BattleConfig) -> Self {
        Self::new(config.engagement_form, config.combined_fleet)
    }
}
