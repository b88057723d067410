//! Gold, stat purchases, inventory and equipment

use super::{Character, CharacterError};
use crate::item::Item;
use crate::types::{EquipmentSlot, ItemId};
use std::fmt;

/// An item placed into an equipment slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipped {
    pub slot: EquipmentSlot,
    pub id: ItemId,
    pub item_name: String,
}

impl fmt::Display for Equipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equipped {}: {}", self.slot, self.item_name)
    }
}

impl Character {
    pub fn gain_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
        tracing::debug!(character = %self.name, amount, gold = self.gold, "gold gained");
    }

    /// Deduct `amount` if affordable, otherwise leave gold untouched
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), CharacterError> {
        if self.gold < amount {
            return Err(CharacterError::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        tracing::debug!(character = %self.name, amount, gold = self.gold, "gold spent");
        Ok(())
    }

    pub fn increase_attack(&mut self, value: i32) {
        self.attack_power += value;
    }

    pub fn increase_defense(&mut self, value: i32) {
        self.defense += value;
    }

    /// Append an item to the inventory and return its handle
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.inventory.len());
        tracing::debug!(character = %self.name, item = %item, slot = id.menu_number(), "item added");
        self.inventory.push(item);
        id
    }

    /// Equip the item at 1-based position `index`
    ///
    /// The item stays in the inventory; the slot matching its kind now
    /// refers to it, replacing whatever was there.
    pub fn equip_item(&mut self, index: usize) -> Result<Equipped, CharacterError> {
        let id = ItemId::from_menu_number(index)
            .filter(|id| id.0 < self.inventory.len())
            .ok_or(CharacterError::InvalidItemIndex {
                index,
                inventory_size: self.inventory.len(),
            })?;

        let item = &self.inventory[id.0];
        let slot = item.slot();
        let item_name = item.name().to_string();

        match slot {
            EquipmentSlot::Weapon => self.equipped_weapon = Some(id),
            EquipmentSlot::Armor => self.equipped_armor = Some(id),
        }

        tracing::debug!(character = %self.name, %slot, item = %item_name, "item equipped");
        Ok(Equipped {
            slot,
            id,
            item_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn knight() -> Character {
        Character::new("Knight", 20, 10, 100)
    }

    #[test]
    fn test_spend_gold_success() {
        let mut hero = knight();
        hero.gain_gold(45);
        assert_eq!(hero.spend_gold(30), Ok(()));
        assert_eq!(hero.gold(), 15);
    }

    #[test]
    fn test_spend_gold_insufficient() {
        let mut hero = knight();
        hero.gain_gold(20);

        let result = hero.spend_gold(30);

        assert_eq!(
            result,
            Err(CharacterError::InsufficientGold {
                needed: 30,
                available: 20
            })
        );
        assert_eq!(hero.gold(), 20);
    }

    #[test]
    fn test_spend_exact_amount() {
        let mut hero = knight();
        hero.gain_gold(50);
        assert!(hero.spend_gold(50).is_ok());
        assert_eq!(hero.gold(), 0);
    }

    #[test]
    fn test_increase_stats() {
        let mut hero = knight();
        hero.increase_attack(1);
        hero.increase_defense(3);
        assert_eq!(hero.attack_power(), 21);
        assert_eq!(hero.defense(), 13);
    }

    #[test]
    fn test_add_item_returns_handles() {
        let mut hero = knight();
        let first = hero.add_item(Item::weapon("Sword +3", 3));
        let second = hero.add_item(Item::armor("Armor +4", 4));

        assert_eq!(first, ItemId(0));
        assert_eq!(second, ItemId(1));
        assert_eq!(hero.item(second).map(Item::name), Some("Armor +4"));
    }

    #[test]
    fn test_equip_by_kind() {
        let mut hero = knight();
        hero.add_item(Item::weapon("Sword +3", 3));
        hero.add_item(Item::armor("Armor +4", 4));

        let equipped = hero.equip_item(2).unwrap();
        assert_eq!(equipped.slot, EquipmentSlot::Armor);
        assert_eq!(equipped.to_string(), "Equipped armor: Armor +4");
        assert_eq!(hero.total_defense(), 14);
        assert_eq!(hero.total_attack(), 20);

        hero.equip_item(1).unwrap();
        assert_eq!(hero.total_attack(), 23);
        assert_eq!(hero.inventory().len(), 2);
    }

    #[test]
    fn test_reequip_repoints_slot() {
        let mut hero = knight();
        hero.add_item(Item::weapon("Sword +3", 3));
        hero.add_item(Item::weapon("Sword +9", 9));

        hero.equip_item(1).unwrap();
        hero.equip_item(2).unwrap();

        assert_eq!(hero.equipped_id(EquipmentSlot::Weapon), Some(ItemId(1)));
        assert_eq!(hero.total_attack(), 29);
        assert_eq!(hero.inventory().len(), 2);
    }

    #[test]
    fn test_equipment_survives_new_items() {
        let mut hero = knight();
        hero.add_item(Item::weapon("Sword +3", 3));
        hero.equip_item(1).unwrap();

        for bonus in 0..20 {
            hero.add_item(Item::armor(format!("Armor +{bonus}"), bonus));
        }

        assert_eq!(hero.equipped(EquipmentSlot::Weapon).map(Item::name), Some("Sword +3"));
        assert_eq!(hero.total_attack(), 23);
    }

    #[test]
    fn test_equip_out_of_range() {
        let mut hero = knight();
        hero.add_item(Item::weapon("Sword +3", 3));

        assert_eq!(
            hero.equip_item(0),
            Err(CharacterError::InvalidItemIndex {
                index: 0,
                inventory_size: 1
            })
        );
        assert!(hero.equip_item(2).is_err());
        assert!(hero.equipped(EquipmentSlot::Weapon).is_none());
    }

    proptest! {
        #[test]
        fn prop_spend_gold(gold in 0u32..500, amount in 0u32..500) {
            let mut hero = knight();
            hero.gain_gold(gold);

            let result = hero.spend_gold(amount);

            if gold >= amount {
                prop_assert!(result.is_ok());
                prop_assert_eq!(hero.gold(), gold - amount);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(hero.gold(), gold);
            }
        }

        #[test]
        fn prop_equip_bounds(weapons in prop::collection::vec(any::<bool>(), 0..8), index in 0usize..12) {
            let mut hero = knight();
            for (n, is_weapon) in weapons.iter().enumerate() {
                let item = if *is_weapon {
                    Item::weapon(format!("Sword +{n}"), n as u32)
                } else {
                    Item::armor(format!("Armor +{n}"), n as u32)
                };
                hero.add_item(item);
            }
            let before = hero.clone();

            let result = hero.equip_item(index);

            prop_assert_eq!(hero.inventory().len(), weapons.len());
            if index < 1 || index > weapons.len() {
                prop_assert!(result.is_err());
                prop_assert_eq!(hero, before);
            } else {
                let equipped = result.unwrap();
                let expected = if weapons[index - 1] { EquipmentSlot::Weapon } else { EquipmentSlot::Armor };
                prop_assert_eq!(equipped.slot, expected);
                prop_assert_eq!(hero.equipped_id(expected), Some(ItemId(index - 1)));
            }
        }
    }
}
