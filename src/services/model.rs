use crate::models::{FeatureRow, FeatureValue, FEATURE_COLUMNS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or invoking a scoring model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Found unknown category '{value}' in column '{column}'")]
    UnknownCategory { column: String, value: String },

    #[error("Column '{0}' received a value of the wrong type")]
    ColumnType(String),
}

/// A loaded probability model
///
/// Given one row laid out as [`FEATURE_COLUMNS`], returns a probability
/// distribution over two classes. Implementations are shared read-only across
/// request handlers.
pub trait ScoringFunction: Send + Sync {
    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError>;

    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn columns(&self) -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
    }
}

/// One column of a persisted logistic pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSpec {
    /// One-hot encoded column; the baseline category is the dropped level
    Categorical {
        name: String,
        baseline: String,
        weights: HashMap<String, f64>,
    },
    Numeric {
        name: String,
        weight: f64,
    },
}

impl ColumnSpec {
    pub fn name(&self) -> &str {
        match self {
            ColumnSpec::Categorical { name, .. } | ColumnSpec::Numeric { name, .. } => name,
        }
    }

    fn contribution(&self, value: &FeatureValue) -> Result<f64, ModelError> {
        match (self, value) {
            (ColumnSpec::Categorical { name, baseline, weights }, FeatureValue::Category(v)) => {
                if v == baseline {
                    return Ok(0.0);
                }
                weights.get(v).copied().ok_or_else(|| ModelError::UnknownCategory {
                    column: name.clone(),
                    value: v.clone(),
                })
            }
            (ColumnSpec::Numeric { weight, .. }, FeatureValue::Number(v)) => Ok(weight * v),
            (spec, _) => Err(ModelError::ColumnType(spec.name().to_string())),
        }
    }
}

/// One-hot encoder followed by binary logistic regression
///
/// Loaded from a JSON artifact. The artifact's columns must match
/// [`FEATURE_COLUMNS`] in both name and order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticPipeline {
    name: String,
    version: String,
    intercept: f64,
    columns: Vec<ColumnSpec>,
}

impl LogisticPipeline {
    /// Parse an artifact and check it against the feature layout
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let pipeline: LogisticPipeline = serde_json::from_str(json)?;
        pipeline.check_schema()?;
        Ok(pipeline)
    }

    /// Load an artifact from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&json)
    }

    fn check_schema(&self) -> Result<(), ModelError> {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name()).collect();
        if names != FEATURE_COLUMNS {
            return Err(ModelError::SchemaMismatch(format!(
                "expected columns {:?}, artifact has {:?}",
                FEATURE_COLUMNS, names
            )));
        }
        Ok(())
    }

    /// Log-odds of class 1
    fn decision(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let mut z = self.intercept;
        for (spec, (_, value)) in self.columns.iter().zip(row.columns()) {
            z += spec.contribution(value)?;
        }
        Ok(z)
    }
}

impl ScoringFunction for LogisticPipeline {
    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        let p = sigmoid(self.decision(row)?);
        Ok(vec![1.0 - p, p])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureVector;
    use serde_json::json;

    fn artifact(intercept: f64) -> serde_json::Value {
        json!({
            "name": "test-pipeline",
            "version": "1",
            "intercept": intercept,
            "columns": [
                {"kind": "categorical", "name": "batting_team", "baseline": "A", "weights": {"B": 0.5}},
                {"kind": "categorical", "name": "bowling_team", "baseline": "A", "weights": {"B": -0.5}},
                {"kind": "categorical", "name": "city", "baseline": "X", "weights": {}},
                {"kind": "numeric", "name": "runs_left", "weight": 0.0},
                {"kind": "numeric", "name": "balls_left", "weight": 0.0},
                {"kind": "numeric", "name": "wickets", "weight": 0.0},
                {"kind": "numeric", "name": "total_runs_x", "weight": 0.0},
                {"kind": "numeric", "name": "crr", "weight": 0.0},
                {"kind": "numeric", "name": "rrr", "weight": 0.0}
            ]
        })
    }

    fn row(batting: &str, bowling: &str, city: &str) -> FeatureRow {
        FeatureVector {
            batting_team: batting.to_string(),
            bowling_team: bowling.to_string(),
            city: city.to_string(),
            runs_left: 60,
            balls_left: 45.0,
            wickets: 3,
            target: 180,
            crr: 9.6,
            rrr: 8.0,
        }
        .to_row()
    }

    #[test]
    fn test_zero_log_odds_is_even() {
        let model = LogisticPipeline::from_json(&artifact(0.0).to_string()).unwrap();
        let probs = model.predict_proba(&row("A", "A", "X")).unwrap();

        assert_eq!(probs, vec![0.5, 0.5]);
    }

    #[test]
    fn test_category_weights_apply() {
        let model = LogisticPipeline::from_json(&artifact(0.0).to_string()).unwrap();
        let probs = model.predict_proba(&row("B", "A", "X")).unwrap();

        assert!(probs[1] > 0.5);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_category_fails() {
        let model = LogisticPipeline::from_json(&artifact(0.0).to_string()).unwrap();
        let err = model.predict_proba(&row("A", "B", "Atlantis")).unwrap_err();

        assert!(matches!(err, ModelError::UnknownCategory { ref column, .. } if column == "city"));
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let mut value = artifact(0.0);
        value["columns"].as_array_mut().unwrap().swap(3, 4);

        let err = LogisticPipeline::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_corrupt_artifact_rejected() {
        let err = LogisticPipeline::from_json("not json").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_artifact() {
        let err = LogisticPipeline::load("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
