//! Recursive container for segment JSON.
//!
//! A `DictContainer` wraps one JSON object. Every nested object, whether it
//! sits directly under a key or anywhere inside a list, is promoted to its own
//! `DictContainer`; scalars are kept as they are. Field access goes through
//! `attr` / `str_attr` / `list_attr` / `dict_attr`, which turn a missing or
//! mistyped field into an error naming the container and the field.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

use crate::error::{Error, Result};

/// Names the container keeps for itself. A JSON key with one of these names is rejected.
pub const RESERVED_KEYS: &[&str] = &["dc_name", "ext_dict", "ext_attributes"];

/// A promoted JSON value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
  Dict(DictContainer),
  List(Vec<Value>),
  Str(String),
  Number(Number),
  Bool(bool),
  Null,
}

impl Value {
  fn promote(json: &Json, name: String) -> Result<Value> {
    Ok(match json {
      Json::Object(map) => Value::Dict(DictContainer::new(map, name)?),
      Json::Array(items) => Value::List(
        items
          .iter()
          .enumerate()
          .map(|(i, item)| Value::promote(item, format!("{}[{}]", name, i)))
          .collect::<Result<Vec<_>>>()?,
      ),
      Json::String(s) => Value::Str(s.clone()),
      Json::Number(n) => Value::Number(n.clone()),
      Json::Bool(b) => Value::Bool(*b),
      Json::Null => Value::Null,
    })
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_dict(&self) -> Option<&DictContainer> {
    match self {
      Value::Dict(dc) => Some(dc),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[Value]> {
    match self {
      Value::List(items) => Some(items),
      _ => None,
    }
  }

  /// Text form of a scalar, used when a scalar stands in for an answer string.
  /// Strings are verbatim and numbers use their JSON text; booleans render as
  /// `True`/`False` and `null` as `None`, the spelling task authors' answers use.
  pub fn scalar_text(&self) -> Option<String> {
    match self {
      Value::Str(s) => Some(s.clone()),
      Value::Number(n) => Some(n.to_string()),
      Value::Bool(true) => Some("True".to_string()),
      Value::Bool(false) => Some("False".to_string()),
      Value::Null => Some("None".to_string()),
      Value::Dict(_) | Value::List(_) => None,
    }
  }
}

/// One JSON object with all nested objects promoted.
#[derive(Clone, Debug, PartialEq)]
pub struct DictContainer {
  name: String,
  fields: BTreeMap<String, Value>,
}

impl DictContainer {
  pub fn new(map: &Map<String, Json>, name: impl Into<String>) -> Result<Self> {
    let name = name.into();
    let mut fields = BTreeMap::new();
    for (key, json) in map {
      if RESERVED_KEYS.contains(&key.as_str()) {
        return Err(Error::ReservedKey(key.clone()));
      }
      fields.insert(key.clone(), Value::promote(json, key.clone())?);
    }
    Ok(Self { name, fields })
  }

  pub fn from_json(json: &Json, name: impl Into<String>) -> Result<Self> {
    let name = name.into();
    match json {
      Json::Object(map) => Self::new(map, name),
      _ => Err(Error::NotAnObject { what: name }),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn attr(&self, field: &str) -> Result<&Value> {
    self.fields.get(field).ok_or_else(|| Error::missing(&self.name, field))
  }

  pub fn str_attr(&self, field: &str) -> Result<&str> {
    self.attr(field)?.as_str().ok_or_else(|| Error::wrong_type(&self.name, field, "a string"))
  }

  pub fn list_attr(&self, field: &str) -> Result<&[Value]> {
    self.attr(field)?.as_list().ok_or_else(|| Error::wrong_type(&self.name, field, "a list"))
  }

  pub fn dict_attr(&self, field: &str) -> Result<&DictContainer> {
    self.attr(field)?.as_dict().ok_or_else(|| Error::wrong_type(&self.name, field, "an object"))
  }

  pub fn get(&self, field: &str) -> Option<&Value> {
    self.fields.get(field)
  }

  pub(crate) fn set(&mut self, field: &str, value: Value) {
    self.fields.insert(field.to_string(), value);
  }
}

impl Serialize for DictContainer {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(&self.fields)
  }
}
