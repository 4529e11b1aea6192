/// Deliveries in a full 20-over innings
pub const BALLS_PER_INNINGS: f64 = 120.0;

/// Deliveries in one over
pub const BALLS_PER_OVER: f64 = 6.0;

/// Column layout the scoring function was trained against.
///
/// Order and names are fixed by the model's training-time schema. Reordering
/// or renaming them does not fail, it silently produces wrong predictions.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "batting_team",
    "bowling_team",
    "city",
    "runs_left",
    "balls_left",
    "wickets",
    "total_runs_x",
    "crr",
    "rrr",
];

/// Class index of the model output holding the bowling side's probability
pub const BOWLING_TEAM_CLASS: usize = 0;

/// Class index of the model output holding the batting side's probability
pub const BATTING_TEAM_CLASS: usize = 1;

/// Validated state of an in-progress chase
///
/// Numeric ranges (wickets in 0..=10, overs in 0..=20) are nominal and are
/// not enforced; only presence and type are.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub batting_team: String,
    pub bowling_team: String,
    pub city: String,
    pub target: i64,
    pub score: i64,
    pub wickets: i64,
    pub overs: f64,
}

/// Features derived from a [`MatchState`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub batting_team: String,
    pub bowling_team: String,
    pub city: String,
    pub runs_left: i64,
    pub balls_left: f64,
    /// Wickets lost, passed through unchanged
    pub wickets: i64,
    pub target: i64,
    pub crr: f64,
    pub rrr: f64,
}

impl FeatureVector {
    /// Lay the features out in [`FEATURE_COLUMNS`] order
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow {
            values: vec![
                FeatureValue::Category(self.batting_team.clone()),
                FeatureValue::Category(self.bowling_team.clone()),
                FeatureValue::Category(self.city.clone()),
                FeatureValue::Number(self.runs_left as f64),
                FeatureValue::Number(self.balls_left),
                FeatureValue::Number(self.wickets as f64),
                FeatureValue::Number(self.target as f64),
                FeatureValue::Number(self.crr),
                FeatureValue::Number(self.rrr),
            ],
        }
    }
}

/// A single cell of a feature row
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Category(String),
    Number(f64),
}

/// One row matching the model's training-time schema
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<FeatureValue>,
}

impl FeatureRow {
    /// Column names paired with their values, in schema order
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter())
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.columns()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }
}

/// Win probabilities in percent, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub batting_team_prob: f64,
    pub bowling_team_prob: f64,
}
