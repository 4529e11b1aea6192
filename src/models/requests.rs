use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Field names of the prediction request body, in the order they are reported
pub const REQUEST_FIELDS: [&str; 7] = [
    "batting_team",
    "bowling_team",
    "city",
    "target",
    "score",
    "wickets",
    "overs",
];

/// Prediction request as it arrives, before any coercion
///
/// Every field stays an untyped JSON value so that absent, null and
/// wrongly-typed inputs can be told apart. A JSON `null` deserializes to
/// `None`, the same as an absent key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(required, custom(function = "validate_non_blank"))]
    #[serde(default)]
    pub batting_team: Option<Value>,
    #[validate(required, custom(function = "validate_non_blank"))]
    #[serde(default)]
    pub bowling_team: Option<Value>,
    #[validate(required, custom(function = "validate_non_blank"))]
    #[serde(default)]
    pub city: Option<Value>,
    #[validate(required)]
    #[serde(default)]
    pub target: Option<Value>,
    #[validate(required)]
    #[serde(default)]
    pub score: Option<Value>,
    #[validate(required)]
    #[serde(default)]
    pub wickets: Option<Value>,
    #[validate(required)]
    #[serde(default)]
    pub overs: Option<Value>,
}

/// Whether a JSON value is empty: `null`, `false`, `0`, `""`, `[]` or `{}`
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// An empty team or venue counts as missing, whatever its JSON type
fn validate_non_blank(value: &Value) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
