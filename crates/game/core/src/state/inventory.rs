use crate::env::ItemOracle;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: String,
    pub quantity: u32,
}

/// Consumables carried across encounters until the next reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub stacks: Vec<ItemStack>,
}

impl InventoryState {
    /// Inventory holding every defined item at its starting quantity.
    pub fn starting(items: &(impl ItemOracle + ?Sized)) -> Self {
        Self {
            stacks: items
                .items()
                .iter()
                .map(|item| ItemStack {
                    item: item.id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn quantity(&self, item: &str) -> u32 {
        self.stacks
            .iter()
            .find(|stack| stack.item == item)
            .map_or(0, |stack| stack.quantity)
    }

    /// Removes one unit. Returns false if none was left.
    pub fn take(&mut self, item: &str) -> bool {
        match self
            .stacks
            .iter_mut()
            .find(|stack| stack.item == item && stack.quantity > 0)
        {
            Some(stack) => {
                stack.quantity -= 1;
                true
            }
            None => false,
        }
    }
}
