//! Combat result types.

/// Outcome of a damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    /// Final damage, always at least 1.
    pub damage: u32,

    /// Whether the critical multiplier was applied.
    pub is_critical: bool,
}

impl DamageRoll {
    pub const fn normal(damage: u32) -> Self {
        Self {
            damage,
            is_critical: false,
        }
    }
}
