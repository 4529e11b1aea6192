use serde_json::Value;
use validator::Validate;
use crate::core::error::PredictionError;
use crate::models::{MatchState, PredictRequest, REQUEST_FIELDS, requests::is_blank};

/// Parse a raw request body into a JSON value
///
/// A body that is empty or only whitespace is reported as a missing payload,
/// not as malformed JSON.
pub fn parse_body(body: &[u8]) -> Result<Value, PredictionError> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(PredictionError::MissingPayload);
    }

    serde_json::from_slice(body).map_err(|e| PredictionError::InvalidJson(e.to_string()))
}

/// Validate an untyped payload and coerce it into a [`MatchState`]
///
/// Stage order:
/// 1. Payload presence (null, empty object and other empty values count as absent)
/// 2. Field presence, all fields checked together
/// 3. Type coercion, first offending field reported
pub fn validate(payload: &Value) -> Result<MatchState, PredictionError> {
    if is_blank(payload) {
        return Err(PredictionError::MissingPayload);
    }

    if !payload.is_object() {
        return Err(PredictionError::InvalidJson(
            "expected a JSON object".to_string(),
        ));
    }

    let request: PredictRequest = serde_json::from_value(payload.clone())
        .map_err(|e| PredictionError::InvalidJson(e.to_string()))?;

    if let Err(errors) = request.validate() {
        let reported: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        let missing = REQUEST_FIELDS
            .iter()
            .filter(|field| reported.iter().any(|r| r == *field))
            .map(|field| field.to_string())
            .collect();
        return Err(PredictionError::MissingField(missing));
    }

    Ok(MatchState {
        batting_team: text(required(&request.batting_team, "batting_team")?, "batting_team")?,
        bowling_team: text(required(&request.bowling_team, "bowling_team")?, "bowling_team")?,
        city: text(required(&request.city, "city")?, "city")?,
        target: integer(required(&request.target, "target")?, "target")?,
        score: integer(required(&request.score, "score")?, "score")?,
        wickets: integer(required(&request.wickets, "wickets")?, "wickets")?,
        overs: real(required(&request.overs, "overs")?, "overs")?,
    })
}

/// Parse and validate in one step
pub fn validate_body(body: &[u8]) -> Result<MatchState, PredictionError> {
    let payload = parse_body(body)?;
    validate(&payload)
}

fn required<'a>(value: &'a Option<Value>, field: &str) -> Result<&'a Value, PredictionError> {
    value
        .as_ref()
        .ok_or_else(|| PredictionError::MissingField(vec![field.to_string()]))
}

fn text(value: &Value, field: &str) -> Result<String, PredictionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(PredictionError::TypeMismatch(field.to_string())),
    }
}

/// Integers accept JSON integers, finite floats (truncated toward zero) and
/// integer strings
fn integer(value: &Value, field: &str) -> Result<i64, PredictionError> {
    let mismatch = || PredictionError::TypeMismatch(field.to_string());

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(mismatch()),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| mismatch()),
        _ => Err(mismatch()),
    }
}

/// Reals accept JSON numbers and numeric strings; the result must be finite
fn real(value: &Value, field: &str) -> Result<f64, PredictionError> {
    let mismatch = || PredictionError::TypeMismatch(field.to_string());

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(mismatch()),
    }
}
