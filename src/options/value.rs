use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};

use crate::foundation::error::{SliderError, SliderResult};
use crate::foundation::ident::is_script_identifier;
use crate::options::token::{Easing, ReservedToken};

/// Script identifier emitted without quotes by the native literal encoder.
///
/// Used for references to variables declared elsewhere in the page script, such as the
/// caption transition table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawIdentifier(String);

impl RawIdentifier {
    pub fn new(ident: impl Into<String>) -> SliderResult<Self> {
        let ident = ident.into();
        if !is_script_identifier(&ident) {
            return Err(SliderError::validation(format!(
                "'{ident}' is not a valid script identifier"
            )));
        }
        Ok(Self(ident))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A leaf or branch of the plugin options tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Seq(Vec<ConfigValue>),
    Map(ConfigMap),
    /// Plugin constant, rendered bare in the final script.
    Token(ReservedToken),
    /// Identifier reference; only the native encoder can represent it.
    Raw(RawIdentifier),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Convert into a generic JSON value. Tokens become strings.
    pub fn to_json(&self) -> SliderResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Replace the first string leaf (depth-first, document order) equal to `needle`.
    pub(crate) fn replace_first_str(&mut self, needle: &str, replacement: &ConfigValue) -> bool {
        match self {
            Self::Str(s) if s.as_str() == needle => {
                *self = replacement.clone();
                true
            }
            Self::Seq(items) => items
                .iter_mut()
                .any(|item| item.replace_first_str(needle, replacement)),
            Self::Map(map) => map.replace_first_str(needle, replacement),
            _ => false,
        }
    }

    fn promote_reserved(&mut self) {
        match self {
            Self::Str(s) => {
                if let Ok(token) = s.parse::<ReservedToken>() {
                    *self = Self::Token(token);
                }
            }
            Self::Seq(items) => items.iter_mut().for_each(Self::promote_reserved),
            Self::Map(map) => map.promote_reserved(),
            _ => {}
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(v: Vec<ConfigValue>) -> Self {
        Self::Seq(v)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(v: ConfigMap) -> Self {
        Self::Map(v)
    }
}

impl From<ReservedToken> for ConfigValue {
    fn from(v: ReservedToken) -> Self {
        Self::Token(v)
    }
}

impl From<Easing> for ConfigValue {
    fn from(v: Easing) -> Self {
        Self::Token(ReservedToken::Easing(v))
    }
}

impl From<RawIdentifier> for ConfigValue {
    fn from(v: RawIdentifier) -> Self {
        Self::Raw(v)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            Value::Object(obj) => Self::Map(obj.into_iter().collect()),
        }
    }
}

impl serde::Serialize for ConfigValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => {
                if !f.is_finite() {
                    return Err(S::Error::custom(format!(
                        "non-finite number {f} has no literal form"
                    )));
                }
                serializer.serialize_f64(*f)
            }
            Self::Str(s) => serializer.serialize_str(s),
            Self::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => serde::Serialize::serialize(map, serializer),
            Self::Token(token) => serde::Serialize::serialize(token, serializer),
            Self::Raw(ident) => Err(S::Error::custom(format!(
                "raw identifier '{ident}' cannot be expressed as structured data"
            ))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for ConfigValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = ConfigValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a plugin option value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Null)
            }

            fn visit_some<D: serde::Deserializer<'de>>(
                self,
                d: D,
            ) -> Result<ConfigValue, D::Error> {
                serde::Deserialize::deserialize(d)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Integer(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigValue, E> {
                i64::try_from(v).map(ConfigValue::Integer).map_err(|_| {
                    E::custom(format!("integer {v} is out of range for a plugin option"))
                })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Str(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ConfigValue, E> {
                Ok(ConfigValue::Str(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigValue, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(ConfigValue::Seq(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<ConfigValue, A::Error> {
                MapVisitor.visit_map(access).map(ConfigValue::Map)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Insertion-ordered plugin options mapping.
///
/// Keys keep the position of their first insertion; re-inserting a key replaces the value in
/// place. The serialized literal lists keys in this order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigMap {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the previous value if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Chainable [`ConfigMap::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Convert into a generic JSON object. Tokens become strings.
    pub fn to_json(&self) -> SliderResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Turn every string leaf that exactly names a catalog constant into a token leaf.
    ///
    /// Options read from JSON documents carry constants as strings; this makes them
    /// visible to the native encoder.
    pub fn promote_reserved(&mut self) {
        for (_, value) in &mut self.entries {
            value.promote_reserved();
        }
    }

    pub(crate) fn replace_first_str(&mut self, needle: &str, replacement: &ConfigValue) -> bool {
        self.entries
            .iter_mut()
            .any(|(_, v)| v.replace_first_str(needle, replacement))
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> Extend<(K, V)> for ConfigMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = std::vec::IntoIter<(String, ConfigValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl serde::Serialize for ConfigMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct MapVisitor;

impl<'de> Visitor<'de> for MapVisitor {
    type Value = ConfigMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a plugin options object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ConfigMap, A::Error> {
        let mut map = ConfigMap::new();
        while let Some((k, v)) = access.next_entry::<String, ConfigValue>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de> serde::Deserialize<'de> for ConfigMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/value.rs"]
mod tests;
