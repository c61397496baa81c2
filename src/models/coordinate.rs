use std::fmt;

use serde_json::Value;

/// A point as supplied by the caller. `lat` and `lng` are kept as raw JSON
/// and only turned into text when the provider query is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub lat: Option<Value>,
    pub lng: Option<Value>,
}

impl Coordinate {
    /// Reads `lat`/`lng` off an object; any other value has neither.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                lat: map.get("lat").cloned(),
                lng: map.get("lng").cloned(),
            },
            _ => Self {
                lat: None,
                lng: None,
            },
        }
    }
}

/// Renders as `lat,lng`, the form the directions provider expects.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            render_component(self.lat.as_ref()),
            render_component(self.lng.as_ref())
        )
    }
}

fn render_component(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), render_value)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(v) if n.is_f64() => v.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JSON-falsy values (`null`, `false`, `0`, `""`) count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
