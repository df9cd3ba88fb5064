//! JSON serialization and deserialization for item stacks, with upgrade of legacy
//! numeric item ids.

use std::sync::Arc;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::item::ItemStack;
use crate::item::legacy::LegacyTypeTable;

use super::record::{ItemRecord, RecordItem};


/// The JSON codec for item stacks. It owns the legacy type table used to upgrade
/// documents written with numeric item ids, the table is shared between clones of
/// the codec.
#[derive(Debug, Clone)]
pub struct ItemCodec {
    table: Arc<LegacyTypeTable>,
}

impl Default for ItemCodec {
    fn default() -> Self {
        Self::new(LegacyTypeTable::standard())
    }
}

impl ItemCodec {

    /// Create a codec upgrading legacy ids with the given table.
    pub fn new(table: LegacyTypeTable) -> Self {
        Self::with_shared(Arc::new(table))
    }

    /// Create a codec reading from a table shared with other codecs.
    pub fn with_shared(table: Arc<LegacyTypeTable>) -> Self {
        Self { table }
    }

    /// The legacy type table of this codec.
    #[inline]
    pub fn table(&self) -> &LegacyTypeTable {
        &self.table
    }

    /// Serialize an item into its JSON tree, the type is always written as its
    /// canonical name.
    pub fn serialize<I: RecordItem>(&self, item: &I) -> Value {
        // String keys and integer values only, this cannot fail.
        serde_json::to_value(item.to_record())
            .expect("item record should always be representable as json")
    }

    /// Serialize an item into a JSON text.
    pub fn serialize_str<I: RecordItem>(&self, item: &I) -> String {
        self.serialize(item).to_string()
    }

    /// Serialize a list of items into a JSON array.
    pub fn serialize_all<'a, I>(&self, items: impl IntoIterator<Item = &'a I>) -> Value
    where
        I: RecordItem + 'a,
    {
        Value::Array(items.into_iter().map(|item| self.serialize(item)).collect())
    }

    /// Deserialize an item from a JSON tree. The tree must be an object, its legacy
    /// numeric id is upgraded before the record is decoded.
    pub fn deserialize<I: RecordItem>(&self, json: Value) -> Result<I, ItemError> {

        let object = match json {
            Value::Object(object) => object,
            other => return Err(malformed(format!("item is {}, expected an object", kind(&other)))),
        };

        let object = self.normalize_type_id(object)?;
        let record = serde_json::from_value::<ItemRecord>(Value::Object(object))
            .map_err(|e| malformed(e.to_string()))?;

        Ok(I::from_record(record))

    }

    /// Deserialize an item from a JSON text.
    pub fn deserialize_str<I: RecordItem>(&self, text: &str) -> Result<I, ItemError> {
        let json = serde_json::from_str::<Value>(text)
            .map_err(|e| malformed(e.to_string()))?;
        self.deserialize(json)
    }

    /// Deserialize a JSON array of items. The first failing element aborts the whole
    /// list and the error gives its index.
    pub fn deserialize_all<I: RecordItem>(&self, json: Value) -> Result<Vec<I>, ItemError> {

        let array = match json {
            Value::Array(array) => array,
            other => return Err(malformed(format!("item list is {}, expected an array", kind(&other)))),
        };

        array.into_iter()
            .enumerate()
            .map(|(index, element)| self.deserialize(element).map_err(|e| e.at(index)))
            .collect()

    }

    /// Upgrade the legacy numeric id of a single item object to its canonical name.
    ///
    /// An absent, null or string id is left untouched. A numeric id is truncated to
    /// an integer code and replaced by the name from the table, keeping its place in
    /// the object. Any other kind of id is malformed. Running this on an already
    /// upgraded object returns it unchanged.
    pub fn normalize_type_id(&self, mut json: Map<String, Value>) -> Result<Map<String, Value>, ItemError> {

        let Some(id) = json.get_mut("id") else {
            return Ok(json);
        };

        match id {
            Value::Null | Value::String(_) => {}
            Value::Number(number) => {

                let code = legacy_code(number);
                let name = u16::try_from(code).ok()
                    .and_then(|code| self.table.get(code))
                    .ok_or(ItemError::UnknownLegacyTypeId(code))?;

                debug!("upgraded legacy item id {code} to {name}");
                *id = Value::String(name.to_string());

            }
            _ => return Err(malformed(format!("item id is {}, expected a string or a number", kind(id)))),
        }

        Ok(json)

    }

    /// Upgrade legacy ids of a whole document without decoding it: either a single
    /// item object or an array of item objects. Keys unknown to the record are kept.
    pub fn normalize_all(&self, json: Value) -> Result<Value, ItemError> {
        match json {
            Value::Object(object) => self.normalize_type_id(object).map(Value::Object),
            Value::Array(array) => {
                array.into_iter()
                    .enumerate()
                    .map(|(index, element)| match element {
                        Value::Object(object) => self.normalize_type_id(object).map(Value::Object),
                        other => Err(malformed(format!("item is {}, expected an object", kind(&other)))),
                    }.map_err(|e| e.at(index)))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            other => Err(malformed(format!("document is {}, expected an object or an array", kind(&other)))),
        }
    }

}

/// Convenient shortcut to deserialize an item stack with the standard table.
pub fn from_value(json: Value) -> Result<ItemStack, ItemError> {
    ItemCodec::default().deserialize(json)
}

/// Convenient shortcut to serialize an item stack.
pub fn to_value(stack: &ItemStack) -> Value {
    ItemCodec::default().serialize(stack)
}


/// Interpret a JSON number as a legacy code, fractional parts are dropped. Every JSON
/// integer is kept exactly, only floats beyond the `i128` range saturate.
fn legacy_code(number: &Number) -> i128 {
    if let Some(code) = number.as_i64() {
        code as i128
    } else if let Some(code) = number.as_u64() {
        code as i128
    } else {
        number.as_f64().map_or(0, |code| code as i128)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[inline]
fn malformed(message: impl Into<String>) -> ItemError {
    ItemError::MalformedDocument(message.into())
}


/// Error type returned by every fallible operation of the [`ItemCodec`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// The document does not have the shape of an item, or one of its fields is
    /// missing or of the wrong type.
    #[error("Malformed item document: {0}")]
    MalformedDocument(String),
    /// A numeric item id is not present in the legacy type table, carrying the code
    /// as read from the document with its fractional part dropped.
    #[error("Unknown legacy item type id: {0}")]
    UnknownLegacyTypeId(i128),
    /// An element of an item list failed.
    #[error("Item #{index}: {source}")]
    Element {
        index: usize,
        source: Box<ItemError>,
    },
}

impl ItemError {

    /// Wrap this error as the error of the element at the given index of a list.
    fn at(self, index: usize) -> Self {
        Self::Element { index, source: Box::new(self) }
    }

    /// Return the innermost error, looking through list elements.
    pub fn root(&self) -> &ItemError {
        match self {
            Self::Element { source, .. } => source.root(),
            other => other,
        }
    }

}
