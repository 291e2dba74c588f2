use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::Error as DeError;
use serde_json::Value;

/// Boolean flag returned by SecureFax as a bool, number, string or even a list.
///
/// `null`, `false`, `0`, `""`, `"0"` and empty lists/objects are false; anything
/// else is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truthy(bool);

impl Truthy {
    pub fn into_bool(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(is_truthy(&value)))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|it| it != 0.0),
        Value::String(text) => !(text.is_empty() || text == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Identifier returned as either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TransportId {
    Text(String),
    Number(serde_json::Number),
}

impl TransportId {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Non-negative count returned as a JSON integer or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportCount(u64);

impl TransportCount {
    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Ok(Self(value)),
            Raw::Text(value) => value
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected a count, got {value:?}"))),
        }
    }
}

/// Permission set keyed by permission name.
///
/// An empty set may arrive as `[]`; list entries are keyed by their index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportPermissions {
    Map(BTreeMap<String, Value>),
    List(Vec<Value>),
}

impl TransportPermissions {
    pub fn into_map(self) -> BTreeMap<String, Value> {
        match self {
            Self::Map(map) => map,
            Self::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, value)| (idx.to_string(), value))
                .collect(),
        }
    }
}
