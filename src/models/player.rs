use crate::models::item::InventoryItem;
use crate::models::location::Location;

/// The user's avatar: a name, the current cell, and a personal inventory.
/// Movement assigns a fresh `Location` value; coordinates are never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub location: Location,
    inventory: Vec<InventoryItem>,
}

impl Player {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Vec::new(),
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name == name)
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// Add an item: merge into an existing same-name entry, else append.
    pub fn add_to_inventory(&mut self, item: InventoryItem) {
        match self.inventory.iter_mut().find(|held| held.name == item.name) {
            Some(held) => held.count += item.count,
            None => self.inventory.push(item),
        }
    }

    /// Consume one unit of the first matching entry, dropping the entry when
    /// its count reaches zero. Returns false when the player holds no such
    /// item; "you don't have that" is expected input, not an error.
    pub fn remove_from_inventory(&mut self, name: &str) -> bool {
        let Some(ix) = self.inventory.iter().position(|item| item.name == name) else {
            return false;
        };
        self.inventory[ix].count -= 1;
        if self.inventory[ix].count == 0 {
            self.inventory.remove(ix);
        }
        true
    }

    /// Inventory as display lines, one "name: count" per entry. Empty comes
    /// back as None so the caller can suggest exploring instead.
    pub fn inventory_lines(&self) -> Option<Vec<String>> {
        if self.inventory.is_empty() {
            return None;
        }
        Some(
            self.inventory
                .iter()
                .map(|item| format!("{}: {}", item.name, item.count))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new("Liz", Location::new(1, 1))
    }

    #[test]
    fn adding_merges_same_name_entries() {
        let mut p = player();
        p.add_to_inventory(InventoryItem::new("a puppy", 1, "waggy tail"));
        p.add_to_inventory(InventoryItem::new("a puppy", 1, "waggy tail"));
        assert_eq!(p.inventory().len(), 1);
        assert_eq!(p.inventory()[0].count, 2);
    }

    #[test]
    fn removing_decrements_then_drops() {
        let mut p = player();
        p.add_to_inventory(InventoryItem::new("a sandwich", 2, "yum"));
        assert!(p.remove_from_inventory("a sandwich"));
        assert!(p.has_item("a sandwich"));
        assert!(p.remove_from_inventory("a sandwich"));
        assert!(!p.has_item("a sandwich"));
        assert!(!p.remove_from_inventory("a sandwich"));
    }

    #[test]
    fn inventory_lines_formats_name_and_count() {
        let mut p = player();
        assert!(p.inventory_lines().is_none());
        p.add_to_inventory(InventoryItem::new("a puppy", 1, "waggy tail"));
        assert_eq!(p.inventory_lines(), Some(vec!["a puppy: 1".to_string()]));
    }
}
