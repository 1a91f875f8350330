/// A named, countable object. The name is the sole identity key: lookups and
/// removals match on it, and two same-named entries in one container are
/// indistinguishable by convention.
///
/// Ownership is structural. An item belongs to whichever container (Room, NPC
/// or Player inventory) currently holds it; transfers move the value, they
/// never alias it into two containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub count: u32,
    /// What the player sees when they `use` the item.
    pub effect: String,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, count: u32, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count,
            effect: effect.into(),
        }
    }

    /// A single unit of this item, for one-at-a-time transfers.
    pub fn one(&self) -> Self {
        Self {
            name: self.name.clone(),
            count: 1,
            effect: self.effect.clone(),
        }
    }
}
