// crates/flexprefix-core/src/style.rs

use crate::{PrefixError, Result, StyleValue};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Style declarations keyed by CSS property name.
///
/// Keys keep their insertion order. Assigning to an existing key replaces the
/// value in place; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    declarations: IndexMap<String, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.declarations.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.declarations.get(name)
    }

    /// Scalar value of `name`, if present and not a sequence.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(StyleValue::as_scalar)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.declarations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.declarations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decode a JSON object of declarations.
    ///
    /// `null` becomes the empty string and numbers keep their JSON text.
    /// Arrays must contain only strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(PrefixError::NotAnObject(json_kind(&other))),
        };

        let mut map = StyleMap::new();
        for (key, value) in object {
            let style_value = match value {
                Value::String(s) => StyleValue::Scalar(s),
                Value::Null => StyleValue::default(),
                Value::Number(n) => StyleValue::Scalar(n.to_string()),
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(s) => values.push(s),
                            other => {
                                return Err(PrefixError::InvalidValue {
                                    key,
                                    found: json_kind(&other),
                                })
                            }
                        }
                    }
                    StyleValue::Sequence(values)
                }
                other => {
                    return Err(PrefixError::InvalidValue {
                        key,
                        found: json_kind(&other),
                    })
                }
            };
            map.insert(key, style_value);
        }
        Ok(map)
    }

    /// Render as CSS declarations, one `name: value;` line per entry.
    /// Sequence values produce one line per fallback, in order.
    pub fn to_declarations(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            for entry in value.entries() {
                out.push_str(&format!("{}: {};\n", name, entry));
            }
        }
        out
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut map = StyleMap::new();
        map.insert("display", "flex");
        map.insert("color", "red");
        map.insert("display", "block");

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["display", "color"]);
        assert_eq!(map.get_str("display"), Some("block"));
    }

    #[test]
    fn test_from_json_coercions() {
        let map = StyleMap::from_json_str(
            r#"{"order": 2, "flex-grow": 1.5, "align-self": null, "display": ["a", "b"]}"#,
        )
        .unwrap();

        assert_eq!(map.get_str("order"), Some("2"));
        assert_eq!(map.get_str("flex-grow"), Some("1.5"));
        assert_eq!(map.get_str("align-self"), Some(""));
        assert_eq!(
            map.get("display").and_then(StyleValue::as_sequence),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(matches!(
            StyleMap::from_json_str("[1, 2]"),
            Err(PrefixError::NotAnObject("an array"))
        ));
        assert!(matches!(
            StyleMap::from_json_str(r#"{"flex": true}"#),
            Err(PrefixError::InvalidValue { ref key, found: "a boolean" }) if key == "flex"
        ));
        assert!(matches!(
            StyleMap::from_json_str(r#"{"display": ["flex", 1]}"#),
            Err(PrefixError::InvalidValue { ref key, found: "a number" }) if key == "display"
        ));
        assert!(matches!(
            StyleMap::from_json_str("{"),
            Err(PrefixError::Json(_))
        ));
    }

    #[test]
    fn test_json_order_is_preserved() {
        let map = StyleMap::from_json_str(r#"{"z-index": "1", "align-items": "center", "color": "red"}"#)
            .unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["z-index", "align-items", "color"]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"z-index":"1","align-items":"center","color":"red"}"#
        );
    }

    #[test]
    fn test_declarations_expand_sequences() {
        let mut map = StyleMap::new();
        map.insert(
            "display",
            vec!["-webkit-box".to_string(), "flex".to_string()],
        );
        map.insert("order", "1");

        insta::assert_snapshot!(map.to_declarations().trim_end(), @r"
        display: -webkit-box;
        display: flex;
        order: 1;
        ");
    }
}
