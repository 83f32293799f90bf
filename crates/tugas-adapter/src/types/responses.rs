/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned alongside a non-success status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Usually a string, but servers sometimes send numbers or booleans
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiErrorBody {
    /// Displayable `message`.
    ///
    /// Non-empty strings, non-zero numbers, and `true` count; empty, zero,
    /// `false`, `null`, objects and arrays do not.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}
