//! Minecraft item stacks and their JSON representation, including the upgrade of
//! documents written with legacy numeric item ids.

pub mod item;
pub mod serde;

pub use item::{ItemMeta, ItemStack};
pub use item::legacy::LegacyTypeTable;
pub use crate::serde::json::{ItemCodec, ItemError};
pub use crate::serde::record::{ItemRecord, RecordItem};
