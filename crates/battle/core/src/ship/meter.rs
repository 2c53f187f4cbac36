/// Hit points of one combatant.
///
/// `current <= max` holds for every constructed meter; damage saturates at
/// zero so HP never goes negative and never increases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpMeter {
    current: u32,
    max: u32,
}

impl HpMeter {
    /// Creates a meter, clamping `current` to `max`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// `current / max`, or 0 when the maximum is 0.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.max)
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.current == 0
    }

    /// Below a quarter of maximum HP.
    pub fn is_heavily_damaged(&self) -> bool {
        self.ratio() < 0.25
    }

    /// Subtracts `amount` and returns the damage actually taken.
    pub fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.current);
        self.current -= taken;
        taken
    }
}

/// Consumable supply (ammunition or fuel) expressed against its maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gauge {
    pub current: u32,
    pub max: u32,
}

impl Gauge {
    pub fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// `current / max(max, 1)` clamped to `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        let ratio = f64::from(self.current) / f64::from(self.max.max(1));
        ratio.clamp(0.0, 1.0)
    }
}
