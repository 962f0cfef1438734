use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// One flat row received from the backend: a lab susceptibility result or a
/// survey counter row.
///
/// Field names differ per endpoint (`antibiotic` vs `organism_isolated`,
/// `month` vs `year`), so the record keeps the raw JSON object and callers
/// name the fields they read. Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from an arbitrary JSON value. Only objects are records.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(CoreError::NotAnObject),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The field as a string slice, if it is a JSON string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// A field counts as present when it exists and is neither `null` nor an
    /// empty string.
    pub fn is_present(&self, field: &str) -> bool {
        match self.fields.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// The field coerced to a number. Missing, `null`, blank or non-numeric
    /// values are 0.
    pub fn number(&self, field: &str) -> f64 {
        self.number_opt(field).unwrap_or(0.0)
    }

    /// The field as a finite number, or `None` when it is missing or cannot be
    /// read as one.
    pub fn number_opt(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(coerce_number)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Coerce a JSON value to a finite number.
///
/// Numbers pass through, numeric strings (`"5"`, `" 41.80 "`) are parsed and
/// booleans map to 1/0. Everything else, including non-finite results, is
/// `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}
