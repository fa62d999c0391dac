//! Item and collection types.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single record from the catalog.
///
/// Items are kept as opaque JSON so that fields the service does not know
/// about are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Value);

impl Item {
    /// Wraps a JSON value as an item.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns a top-level field, or `None` if it is absent or the item is
    /// not a JSON object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the `category` field when it is present and a string.
    pub fn category(&self) -> Option<&str> {
        self.get("category").and_then(Value::as_str)
    }

    /// Whether the item's `category` field is strictly equal to `category`.
    ///
    /// Strings and booleans compare by value, numbers by numeric value
    /// (`1` equals `1.0`). Arrays and objects never match, and neither do
    /// items without the field.
    pub fn has_category(&self, category: &Value) -> bool {
        match (self.get("category"), category) {
            (None, _) => false,
            (Some(Value::Array(_) | Value::Object(_)), _) => false,
            (Some(Value::Number(a)), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (Some(value), _) => value == category,
        }
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the item, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The `{ "items": [...] }` document shape shared by the data file and every
/// listing response.
///
/// Only JSON objects deserialize. A document without an `items` key loads as
/// an empty collection; other top-level keys are ignored. If `items` appears
/// more than once the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl<'de> Deserialize<'de> for ItemCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor)
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ItemCollection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with an `items` array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == "items" {
                items = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(ItemCollection { items })
    }
}

impl ItemCollection {
    /// Creates a collection from an ordered list of items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the items in their original order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keeps only the items whose `category` equals `category`, preserving order.
    pub fn filter_by_category(self, category: &Value) -> Self {
        self.items
            .into_iter()
            .filter(|item| item.has_category(category))
            .collect()
    }
}

impl FromIterator<Item> for ItemCollection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ItemCollection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ItemCollection {
        serde_json::from_value(json!({
            "items": [
                {"id": 1, "category": "a"},
                {"id": 2, "category": "b"},
                {"id": 3},
                {"id": 4, "category": "a", "tags": ["x"]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn category_accessor_reads_string_field() {
        let item = Item::new(json!({"id": 1, "category": "books"}));
        assert_eq!(item.category(), Some("books"));
    }

    #[test]
    fn category_accessor_ignores_non_string_and_missing() {
        assert_eq!(Item::new(json!({"category": 7})).category(), None);
        assert_eq!(Item::new(json!({"id": 1})).category(), None);
        assert_eq!(Item::new(json!("scalar")).category(), None);
    }

    #[test]
    fn filter_keeps_exact_matches_in_order() {
        let filtered = sample().filter_by_category(&json!("a"));
        let ids: Vec<_> = filtered.iter().map(|i| i.get("id").cloned()).collect();
        assert_eq!(ids, vec![Some(json!(1)), Some(json!(4))]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let filtered = sample().filter_by_category(&json!("A"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_excludes_items_without_category() {
        let filtered = sample().filter_by_category(&json!("b"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.items()[0].get("id"), Some(&json!(2)));
    }

    #[test]
    fn filter_is_idempotent() {
        let once = sample().filter_by_category(&json!("a"));
        let twice = once.clone().filter_by_category(&json!("a"));
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_item_fields_pass_through() {
        let collection = sample();
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["items"][3]["tags"], json!(["x"]));
    }

    #[test]
    fn missing_items_key_deserializes_empty() {
        let collection: ItemCollection = serde_json::from_value(json!({"other": 1})).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn serializes_only_items_key() {
        let collection: ItemCollection =
            serde_json::from_value(json!({"items": [], "version": 2})).unwrap();
        assert_eq!(serde_json::to_value(&collection).unwrap(), json!({"items": []}));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let result: std::result::Result<ItemCollection, _> =
            serde_json::from_str(r#"[[{"id":1}]]"#);
        assert!(result.is_err());

        let result: std::result::Result<ItemCollection, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_items_key_keeps_last() {
        let collection: ItemCollection =
            serde_json::from_str(r#"{"items":[{"id":1}],"items":[{"id":2},{"id":3}]}"#).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn numeric_category_matches_by_value() {
        let item = Item::new(json!({"category": 1}));
        assert!(item.has_category(&json!(1)));
        assert!(item.has_category(&json!(1.0)));
        assert!(!item.has_category(&json!("1")));
    }

    #[test]
    fn compound_categories_never_match() {
        let item = Item::new(json!({"category": ["a"]}));
        assert!(!item.has_category(&json!(["a"])));

        let item = Item::new(json!({"category": {"name": "a"}}));
        assert!(!item.has_category(&json!({"name": "a"})));
    }

    #[test]
    fn serialization_keeps_field_order() {
        let collection: ItemCollection =
            serde_json::from_str(r#"{"items":[{"id":1,"category":"a","name":"x"}]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&collection).unwrap(),
            r#"{"items":[{"id":1,"category":"a","name":"x"}]}"#
        );
    }

    #[test]
    fn items_must_be_an_array() {
        let result: std::result::Result<ItemCollection, _> =
            serde_json::from_value(json!({"items": {"id": 1}}));
        assert!(result.is_err());
    }
}
