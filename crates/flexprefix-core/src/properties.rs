// crates/flexprefix-core/src/properties.rs
use serde::Serialize;

/// Value of a single style declaration.
///
/// `Sequence` holds fallbacks for one property, in the order they are emitted.
/// An engine keeps the last entry it understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl StyleValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            StyleValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            StyleValue::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, StyleValue::Sequence(_))
    }

    /// Every entry of the value, one for a scalar.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            StyleValue::Scalar(s) => std::slice::from_ref(s),
            StyleValue::Sequence(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    pub(crate) fn sequence(values: [&str; 3]) -> Self {
        StyleValue::Sequence(values.iter().map(|v| v.to_string()).collect())
    }
}

impl Default for StyleValue {
    fn default() -> Self {
        StyleValue::Scalar(String::new())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Scalar(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Scalar(value)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(values: Vec<String>) -> Self {
        StyleValue::Sequence(values)
    }
}

impl PartialEq<&str> for StyleValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_scalar() == Some(*other)
    }
}
