//! Declarative payload schemas.
//!
//! Each entity describes its writable fields as a static table of
//! [`FieldSpec`]s. [`Schema::validate`] walks that table once, coerces every
//! value to its declared kind and collects *all* problems into
//! [`FieldErrors`], keyed by field name. Nothing is returned unless the whole
//! payload is clean.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const UNKNOWN: &str = "Unknown field.";
pub const INVALID_INPUT: &str = "Invalid input type.";
pub const INVALID_INTEGER: &str = "Not a valid integer.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_DATE: &str = "Not a valid date.";

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    #[cfg(test)]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// Field table for one entity. `key` names the server-assigned primary key,
/// which may appear in a payload but is never loaded from it.
#[derive(Debug)]
pub struct Schema {
    pub entity: &'static str,
    pub key: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Field name to error messages, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[cfg(test)]
    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

impl Schema {
    /// Check `payload` against the field table and return the coerced values.
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, FieldErrors> {
        let Some(obj) = payload.as_object() else {
            return Err(FieldErrors::single(SCHEMA_KEY, INVALID_INPUT));
        };

        let mut errors = FieldErrors::new();
        let mut out = Map::new();

        for spec in self.fields {
            match obj.get(spec.name) {
                None if spec.required => errors.add(spec.name, MISSING),
                None => {}
                Some(Value::Null) if spec.required => errors.add(spec.name, NULL),
                Some(Value::Null) => {
                    out.insert(spec.name.to_string(), Value::Null);
                }
                Some(value) => match coerce(spec.kind, value) {
                    Ok(v) => {
                        out.insert(spec.name.to_string(), v);
                    }
                    Err(msg) => errors.add(spec.name, msg),
                },
            }
        }

        for key in obj.keys() {
            if key != self.key && !self.fields.iter().any(|f| f.name == key) {
                errors.add(key, UNKNOWN);
            }
        }

        if errors.is_empty() { Ok(out) } else { Err(errors) }
    }

    /// Validate and deserialize into the entity's typed input.
    pub fn load<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, FieldErrors> {
        let fields = self.validate(payload)?;
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| FieldErrors::single(SCHEMA_KEY, e.to_string()))
    }
}

fn coerce(kind: FieldKind, value: &Value) -> Result<Value, &'static str> {
    match kind {
        FieldKind::Integer => coerce_integer(value).map(Value::from).ok_or(INVALID_INTEGER),
        FieldKind::String => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err(INVALID_STRING),
        },
        FieldKind::Date => value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
            .map(|d| Value::String(d.format(DATE_FORMAT).to_string()))
            .ok_or(INVALID_DATE),
    }
}

/// Integers, integral floats and numeric strings are accepted; booleans are not.
fn coerce_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                    .map(|f| f as i32)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok().and_then(|i| i32::try_from(i).ok()),
        _ => None,
    }
}
