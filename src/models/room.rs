use crate::models::item::InventoryItem;
use crate::models::location::Location;
use crate::models::npc::Npc;

/// A single grid cell. Built once at world-build time; the only mutation for
/// the life of a session is stock depletion when the player picks items up.
///
/// Containers deplete rather than forget: an entry whose count has reached
/// zero stays in the list so its effect text can still be looked up, but it
/// no longer counts as present. Display and membership filter depleted
/// entries out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub location: Location,
    pub name: String,
    pub description: String,
    items: Vec<InventoryItem>,
    npc: Option<Npc>,
}

impl Room {
    /// `items` is expected to be normalized already: the world loader filters
    /// placeholder entries out before rooms are constructed.
    pub fn new(
        location: Location,
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<InventoryItem>,
        npc: Option<Npc>,
    ) -> Self {
        Self {
            location,
            name: name.into(),
            description: description.into(),
            items,
            npc,
        }
    }

    pub fn has_items(&self) -> bool {
        self.items.iter().any(|item| item.count > 0)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name && item.count > 0)
    }

    /// Lookup by name, depleted entries included: the effect text of an item
    /// stays readable after the last unit has been carried off.
    pub fn find_item(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Comma-joined item names for `look around`, without depleted entries.
    pub fn item_list(&self) -> String {
        self.items
            .iter()
            .filter(|item| item.count > 0)
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Take one unit of the first in-stock item whose name matches. Absence
    /// (including a fully depleted stack) is not a fault; the caller reports
    /// it to the player.
    pub fn remove_one(&mut self, name: &str) -> Option<InventoryItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name == name && item.count > 0)?;
        item.count -= 1;
        Some(item.one())
    }

    pub fn npc(&self) -> Option<&Npc> {
        self.npc.as_ref()
    }

    pub fn npc_mut(&mut self) -> Option<&mut Npc> {
        self.npc.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puppy_room() -> Room {
        Room::new(
            Location::new(1, 2),
            "Cute Puppy Room",
            "So many puppies!",
            vec![
                InventoryItem::new("a puppy", 2, "waggy tail"),
                InventoryItem::new("a chew toy", 1, "squeak"),
            ],
            None,
        )
    }

    #[test]
    fn has_item_matches_whole_names_only() {
        let room = puppy_room();
        assert!(room.has_item("a puppy"));
        assert!(!room.has_item("puppy"));
    }

    #[test]
    fn item_list_joins_names_with_commas() {
        assert_eq!(puppy_room().item_list(), "a puppy, a chew toy");
    }

    #[test]
    fn remove_one_takes_a_single_unit() {
        let mut room = puppy_room();
        let removed = room.remove_one("a puppy").expect("puppy in stock");
        assert_eq!(removed.name, "a puppy");
        assert_eq!(removed.count, 1);
        // One fewer in the room; still in stock.
        assert_eq!(room.find_item("a puppy").map(|i| i.count), Some(1));
        assert!(room.has_item("a puppy"));
    }

    #[test]
    fn depleted_entries_stay_for_lookup_but_not_display() {
        let mut room = puppy_room();
        assert!(room.remove_one("a chew toy").is_some());
        assert!(room.remove_one("a chew toy").is_none());

        assert!(!room.has_item("a chew toy"));
        assert_eq!(room.item_list(), "a puppy");
        // Effect text remains reachable after the stock is gone.
        assert_eq!(room.find_item("a chew toy").map(|i| i.effect.as_str()), Some("squeak"));
    }

    #[test]
    fn remove_one_is_a_no_op_when_absent() {
        let mut room = puppy_room();
        assert!(room.remove_one("a kitten").is_none());
        assert_eq!(room.items().len(), 2);
        assert_eq!(room.find_item("a puppy").map(|i| i.count), Some(2));
    }
}
