//! Codec behavior through the public API, including a foreign item model.

use std::sync::Arc;
use std::thread;

use serde_json::json;

use mcitem::{ItemCodec, ItemError, ItemMeta, ItemRecord, ItemStack, LegacyTypeTable, RecordItem};
use mcitem::item::legacy;


/// A minimal item model from another engine, only keeping the legacy numeric id.
#[derive(Debug, PartialEq)]
struct NumericStack {
    id: u16,
    size: u16,
}

impl RecordItem for NumericStack {

    fn to_record(&self) -> ItemRecord {
        let table = LegacyTypeTable::standard();
        ItemRecord {
            id: table.get(self.id).map(|name| name.to_string()).unwrap_or_default(),
            count: self.size,
            damage: 0,
            meta: ItemMeta::default(),
        }
    }

    fn from_record(record: ItemRecord) -> Self {
        let table = LegacyTypeTable::standard();
        Self {
            id: table.code_of(&record.id).unwrap_or(legacy::AIR),
            size: record.count,
        }
    }

}


#[test]
fn legacy_document() {

    let codec = ItemCodec::default();
    let stack: ItemStack = codec.deserialize_str(r#"{"id": 276, "count": 1, "damage": 12, "name": "Old", "enchants": {"DURABILITY": 3}}"#).unwrap();

    assert_eq!(stack.id.as_str(), "DIAMOND_SWORD");
    assert_eq!(stack.damage, 12);
    let meta = stack.meta().unwrap();
    assert_eq!(meta.name.as_deref(), Some("Old"));
    assert_eq!(meta.enchants.get("DURABILITY"), Some(&3));

    // Written back with its symbolic name only.
    assert_eq!(codec.serialize(&stack), json!({
        "id": "DIAMOND_SWORD",
        "count": 1,
        "damage": 12,
        "name": "Old",
        "enchants": {"DURABILITY": 3},
    }));

}

#[test]
fn unknown_code_is_reported() {
    let codec = ItemCodec::default();
    let err = codec.deserialize::<ItemStack>(json!({"id": 99999, "count": 1})).unwrap_err();
    assert_eq!(err, ItemError::UnknownLegacyTypeId(99999));
    assert_eq!(err.to_string(), "Unknown legacy item type id: 99999");
}

#[test]
fn foreign_item_model() {

    let codec = ItemCodec::default();
    let stack = NumericStack { id: legacy::GOLD_RECORD, size: 1 };

    let value = codec.serialize(&stack);
    assert_eq!(value, json!({"id": "GOLD_RECORD", "count": 1}));
    assert_eq!(codec.deserialize::<NumericStack>(value), Ok(stack));
    assert_eq!(codec.deserialize::<NumericStack>(json!({"id": 2257, "count": 2})), Ok(NumericStack { id: legacy::GREEN_RECORD, size: 2 }));

}

#[test]
fn shared_between_threads() {

    let table = Arc::new(LegacyTypeTable::standard());

    let handles = (0..4u16).map(|i| {
        let codec = ItemCodec::with_shared(Arc::clone(&table));
        thread::spawn(move || {
            codec.deserialize::<ItemStack>(json!({"id": i + 1, "count": 1})).unwrap()
        })
    }).collect::<Vec<_>>();

    let names = handles.into_iter()
        .map(|handle| handle.join().unwrap().id.to_string())
        .collect::<Vec<_>>();

    assert_eq!(names, ["STONE", "GRASS", "DIRT", "COBBLESTONE"]);

}
