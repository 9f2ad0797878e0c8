// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field schemas and payload coercion.
//!
//! A schema is a static list of [`FieldSpec`]s. Incoming payloads are never
//! rejected for their shape: every declared field is coerced to its kind,
//! values that cannot be coerced count as missing, and missing fields take
//! the field's default (or the kind's empty value). Undeclared keys are
//! dropped.

use crate::time_utils::{
    format_utc_rfc3339, from_epoch_millis, from_epoch_millis_f64, now_rfc3339, parse_client_date,
};
use serde_json::{Map, Number, Value};

/// Flat JSON object holding a record's schema fields.
pub type Fields = Map<String, Value>;

/// The type of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    /// Stored as an RFC3339 UTC string.
    Date,
    /// Stored verbatim.
    Mixed,
    /// Array of scalar values of the inner kind.
    List(&'static FieldKind),
    /// Nested object with its own fields.
    Object(&'static [FieldSpec]),
    /// Ordered list of sub-records.
    Records(&'static [FieldSpec]),
}

/// Default value declared on a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Text(&'static str),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Time of coercion.
    Now,
}

impl Literal {
    pub fn to_value(self) -> Value {
        match self {
            Literal::Text(s) => Value::String(s.to_string()),
            Literal::Integer(n) => Value::from(n),
            Literal::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Literal::Boolean(b) => Value::Bool(b),
            Literal::Now => Value::String(now_rfc3339()),
        }
    }
}

/// One declared field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: Option<Literal>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    pub const fn with_default(self, default: Literal) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Value stored when the payload has no usable value for this field.
    pub fn default_value(&self) -> Value {
        self.default
            .map(Literal::to_value)
            .unwrap_or_else(|| self.kind.empty_value())
    }
}

impl FieldKind {
    /// Short name used in the catalog listing.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Mixed => "mixed",
            FieldKind::List(_) => "list",
            FieldKind::Object(_) => "object",
            FieldKind::Records(_) => "records",
        }
    }

    pub fn empty_value(&self) -> Value {
        match self {
            FieldKind::Text => Value::String(String::new()),
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::Number | FieldKind::Date | FieldKind::Mixed => Value::Null,
            FieldKind::List(_) | FieldKind::Records(_) => Value::Array(Vec::new()),
            FieldKind::Object(fields) => Value::Object(coerce_fields(fields, &Map::new())),
        }
    }

    /// Coerce a raw value to this kind. `None` means the value is unusable
    /// and the field's default applies.
    pub fn coerce(&self, raw: &Value) -> Option<Value> {
        match self {
            FieldKind::Mixed => Some(raw.clone()),
            FieldKind::Text | FieldKind::Number | FieldKind::Boolean | FieldKind::Date
                if raw.is_null() =>
            {
                Some(Value::Null)
            }
            FieldKind::Text => coerce_text(raw),
            FieldKind::Number => coerce_number(raw),
            FieldKind::Boolean => coerce_boolean(raw),
            FieldKind::Date => coerce_date(raw),
            FieldKind::List(inner) => match raw {
                Value::Null => None,
                Value::Array(items) => Some(Value::Array(
                    items.iter().filter_map(|item| inner.coerce(item)).collect(),
                )),
                single => inner.coerce(single).map(|v| Value::Array(vec![v])),
            },
            FieldKind::Object(fields) => raw
                .as_object()
                .map(|map| Value::Object(coerce_fields(fields, map))),
            FieldKind::Records(fields) => match raw {
                Value::Array(items) => Some(Value::Array(
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(|map| Value::Object(coerce_fields(fields, map)))
                        .collect(),
                )),
                Value::Object(map) => Some(Value::Array(vec![Value::Object(coerce_fields(
                    fields, map,
                ))])),
                _ => None,
            },
        }
    }
}

/// Coerce a payload object against a schema.
///
/// The result holds exactly the declared fields, in declaration order.
pub fn coerce_fields(schema: &[FieldSpec], payload: &Fields) -> Fields {
    schema
        .iter()
        .map(|spec| {
            let value = payload
                .get(spec.name)
                .and_then(|raw| spec.kind.coerce(raw))
                .unwrap_or_else(|| spec.default_value());
            (spec.name.to_string(), value)
        })
        .collect()
}

fn coerce_text(raw: &Value) -> Option<Value> {
    match raw {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        _ => None,
    }
}

fn coerce_number(raw: &Value) -> Option<Value> {
    match raw {
        Value::Number(n) => Some(Value::Number(n.clone())),
        Value::Bool(b) => Some(Value::from(u8::from(*b))),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Some(Value::from(n));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
        }
        _ => None,
    }
}

fn coerce_boolean(raw: &Value) -> Option<Value> {
    let parsed = match raw {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.map(Value::Bool)
}

fn coerce_date(raw: &Value) -> Option<Value> {
    let parsed = match raw {
        Value::String(s) => parse_client_date(s),
        Value::Number(n) => match n.as_i64() {
            Some(millis) => from_epoch_millis(millis),
            None => n.as_f64().and_then(from_epoch_millis_f64),
        },
        _ => None,
    };
    parsed.map(|dt| Value::String(format_utc_rfc3339(dt)))
}
