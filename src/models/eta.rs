use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::coordinate::{is_truthy, Coordinate};

/// The lookup body with `origin` and `destination` left as raw JSON, so the
/// credential check can run before either is inspected.
#[derive(Debug, Default)]
pub struct EtaRequest {
    pub origin: Option<Value>,
    pub destination: Option<Value>,
}

impl EtaRequest {
    /// Pulls the two fields off an object body. Any other non-null body has
    /// no fields; a `null` body cannot be destructured and is rejected.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        match body {
            Value::Object(mut map) => Ok(Self {
                origin: map.remove("origin"),
                destination: map.remove("destination"),
            }),
            Value::Null => Err(AppError::Unexpected(
                "request body must be a JSON object, got null".to_string(),
            )),
            _ => Ok(Self::default()),
        }
    }

    pub fn endpoints(&self) -> Result<(Coordinate, Coordinate), AppError> {
        match (present(&self.origin), present(&self.destination)) {
            (Some(origin), Some(destination)) => Ok((
                Coordinate::from_value(origin),
                Coordinate::from_value(destination),
            )),
            _ => Err(AppError::Validation),
        }
    }
}

fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| is_truthy(v))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eta {
    pub distance: String,
    pub duration: String,
}
