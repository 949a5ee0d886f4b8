/// Oracle providing the enemy roster.
pub trait EnemyOracle: Send + Sync {
    fn roster(&self) -> &[EnemyTemplate];

    /// Templates eligible for the given tier, in roster order.
    fn by_tier(&self, tier: Tier) -> Vec<&EnemyTemplate> {
        self.roster()
            .iter()
            .filter(|enemy| enemy.tier == tier)
            .collect()
    }
}

/// Enemy difficulty bucket.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tier {
    #[default]
    Weak,
    Normal,
    Strong,
}

/// Static enemy definition. Encounters copy it into an `EnemyInstance`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    /// Fixed damage of the enemy's attack.
    pub damage: u32,
    pub tier: Tier,
    pub attack_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp_reward: u32,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, max_hp: u32, damage: u32, tier: Tier) -> Self {
        Self {
            name: name.into(),
            max_hp,
            damage,
            tier,
            attack_name: "Attack".to_string(),
            description: String::new(),
            exp_reward: 0,
        }
    }

    pub fn with_attack_name(mut self, attack_name: impl Into<String>) -> Self {
        self.attack_name = attack_name.into();
        self
    }

    pub fn with_exp_reward(mut self, exp_reward: u32) -> Self {
        self.exp_reward = exp_reward;
        self
    }
}
