//! Item stack model and legacy item ids.

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod legacy;


/// An item stack defines the actual item type, the number of items, their damage value
/// and optional metadata.
#[derive(Debug, Clone)]
pub struct ItemStack {
    /// The canonical type name of the item, such as `STONE`.
    pub id: ArcStr,
    /// The stack size.
    pub size: u16,
    /// The damage value of the stack.
    pub damage: u16,
    /// Additional metadata, absent when the stack has none. A box holding only default
    /// values is equivalent to no metadata.
    pub meta: Option<Box<ItemMeta>>,
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.size == other.size
            && self.damage == other.damage
            && self.meta() == other.meta()
    }
}

impl Eq for ItemStack {}

impl Default for ItemStack {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ItemStack {

    pub const EMPTY: Self = Self { id: arcstr::literal!("AIR"), size: 0, damage: 0, meta: None };

    /// Create a stack of a single item of the given type.
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self {
            id: id.into(),
            size: 1,
            damage: 0,
            meta: None,
        }
    }

    pub fn with_size(mut self, size: u16) -> ItemStack {
        self.size = size;
        self
    }

    pub fn with_damage(mut self, damage: u16) -> ItemStack {
        self.damage = damage;
        self
    }

    /// Set the metadata of this stack, metadata with only default values is removed
    /// so that two stacks with no actual metadata always compare equal.
    pub fn with_meta(mut self, meta: ItemMeta) -> ItemStack {
        self.meta = (!meta.is_empty()).then(|| Box::new(meta));
        self
    }

    /// Return true if this item stack is air, which is a special case where the item
    /// stack represent an empty slot.
    pub fn is_empty(&self) -> bool {
        self.id.as_str() == "AIR" || self.size == 0
    }

    /// Simplify this item stack by converting it into `None` if the item is just a air
    /// block, which is equivalent to no item for Minecraft, regardless of the damage
    /// value or stack size.
    pub fn to_non_empty(self) -> Option<ItemStack> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Return the metadata of this stack, if it has any non-default value.
    #[inline]
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_deref().filter(|meta| !meta.is_empty())
    }

}


/// Optional metadata attached to an item stack. Keys absent from a document keep
/// their default value, and default values are not written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    /// Custom display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lore lines shown below the name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    /// Enchantment levels by enchantment name, in application order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub enchants: IndexMap<String, u16>,
    /// Anvil repair cost.
    #[serde(rename = "repaircost", skip_serializing_if = "Option::is_none")]
    pub repair_cost: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub unbreakable: bool,
    /// Hidden tooltip sections, such as `HIDE_ENCHANTS`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    // Written books.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<String>,
    /// Leather armor color, as `0xRRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Player head owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skull: Option<String>,
}

impl ItemMeta {

    /// Return true if every field has its default value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

}

#[inline]
fn is_false(value: &bool) -> bool {
    !*value
}
