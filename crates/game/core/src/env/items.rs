/// Oracle providing consumable item definitions.
pub trait ItemOracle: Send + Sync {
    fn items(&self) -> &[ItemDefinition];

    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items().iter().find(|item| item.id == id)
    }
}

/// A consumable the player starts each run with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub effect: ItemEffect,
    /// Units in the inventory at the start of a run.
    pub quantity: u32,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            effect,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores HP, clamped to the class maximum.
    Heal(u32),
    /// Restores MP, clamped to the class maximum.
    RestoreMp(u32),
    /// Multiplies the next damaging action.
    Empower,
    /// Boosts evasion against the next enemy attack.
    Evasion,
    /// Deals flat damage to the enemy, bypassing critical rolls.
    Bomb(u32),
}
