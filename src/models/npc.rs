use crate::models::item::InventoryItem;
use std::collections::HashMap;

/// Dialogue key every NPC must answer to. World construction rejects NPCs
/// without it.
pub const DEFAULT_DIALOGUE_KEY: &str = "default";

/// A non-player character. Bound to the room it was constructed into; it
/// never moves. Its inventory depletes the same way a room's does: `take`
/// hands single units to the player and a zero-count entry stays behind for
/// effect-text lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
    inventory: Vec<InventoryItem>,
    dialogue: HashMap<String, String>,
}

impl Npc {
    pub fn new(name: impl Into<String>, inventory: Vec<InventoryItem>, dialogue: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            inventory,
            dialogue,
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name == name && item.count > 0)
    }

    /// Lookup by name, depleted entries included.
    pub fn find_item(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.name == name)
    }

    /// Hand one unit of a matching in-stock item to the caller.
    pub fn remove_from_inventory(&mut self, name: &str) -> Option<InventoryItem> {
        let item = self
            .inventory
            .iter_mut()
            .find(|item| item.name == name && item.count > 0)?;
        item.count -= 1;
        Some(item.one())
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn dialogue(&self, key: &str) -> Option<&str> {
        self.dialogue.get(key).map(String::as_str)
    }

    /// What the NPC says to a plain `talk`. Presence of the default entry is
    /// validated at world build; the fallback only covers hand-built NPCs.
    pub fn default_dialogue(&self) -> &str {
        self.dialogue(DEFAULT_DIALOGUE_KEY).unwrap_or("...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Npc {
        Npc::new(
            "Unicorn Doctor",
            vec![InventoryItem::new("vial of unicorn blood", 1, "INVINCIBLE!")],
            HashMap::from([("default".to_string(), "Hello".to_string())]),
        )
    }

    #[test]
    fn item_membership_is_by_name() {
        let npc = doctor();
        assert!(npc.has_item("vial of unicorn blood"));
        assert!(!npc.has_item("vial"));
    }

    #[test]
    fn remove_hands_over_one_unit_and_depletes() {
        let mut npc = doctor();
        let item = npc.remove_from_inventory("vial of unicorn blood");
        assert_eq!(item.map(|i| i.count), Some(1));

        // Depleted, not forgotten.
        assert!(!npc.has_item("vial of unicorn blood"));
        assert!(npc.remove_from_inventory("vial of unicorn blood").is_none());
        assert_eq!(
            npc.find_item("vial of unicorn blood").map(|i| i.effect.as_str()),
            Some("INVINCIBLE!")
        );
    }

    #[test]
    fn default_dialogue_falls_back_when_missing() {
        let npc = Npc::new("Mime", vec![], HashMap::new());
        assert_eq!(npc.default_dialogue(), "...");
        assert_eq!(doctor().default_dialogue(), "Hello");
    }
}
