//! JSON projection of the [`ItemStack`] type.

use serde::{Deserialize, Serialize};

use crate::item::{ItemMeta, ItemStack};


/// The structured record an item stack is written as. The `id` and `count` keys are
/// always written, every other key is omitted when it holds its default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Canonical type name.
    pub id: String,
    #[serde(default = "default_count")]
    pub count: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub damage: u16,
    #[serde(flatten)]
    pub meta: ItemMeta,
}

#[inline]
fn default_count() -> u16 {
    1
}

#[inline]
fn is_zero(value: &u16) -> bool {
    *value == 0
}


/// Implemented by item types that the JSON codec can convert, the item model is
/// responsible of projecting itself into an [`ItemRecord`] and back.
pub trait RecordItem: Sized {

    /// Project this item into its record.
    fn to_record(&self) -> ItemRecord;

    /// Reconstruct an item from a decoded record.
    fn from_record(record: ItemRecord) -> Self;

}

impl RecordItem for ItemStack {

    fn to_record(&self) -> ItemRecord {
        ItemRecord {
            id: self.id.to_string(),
            count: self.size,
            damage: self.damage,
            meta: self.meta().cloned().unwrap_or_default(),
        }
    }

    fn from_record(record: ItemRecord) -> Self {
        ItemStack::new(record.id)
            .with_size(record.count)
            .with_damage(record.damage)
            .with_meta(record.meta)
    }

}
