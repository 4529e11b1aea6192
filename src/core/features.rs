use crate::models::{FeatureVector, MatchState, BALLS_PER_INNINGS, BALLS_PER_OVER};

/// Derive the model features from a match state
///
/// Total and pure. Edge cases are deliberately permissive:
/// - no overs bowled gives a current run rate of 0
/// - no balls left gives `runs_left * 6` as the required rate
/// - negative runs or balls left are passed through unclamped
///
/// Inputs are not range checked, so `runs_left` saturates at the `i64` bounds
/// instead of overflowing.
pub fn derive_features(state: &MatchState) -> FeatureVector {
    let runs_left = state.target.saturating_sub(state.score);
    let balls_left = BALLS_PER_INNINGS - state.overs * BALLS_PER_OVER;

    FeatureVector {
        batting_team: state.batting_team.clone(),
        bowling_team: state.bowling_team.clone(),
        city: state.city.clone(),
        runs_left,
        balls_left,
        wickets: state.wickets,
        target: state.target,
        crr: current_run_rate(state.score, state.overs),
        rrr: required_run_rate(runs_left, balls_left),
    }
}

/// Runs per over so far, 0 before the first ball
#[inline]
pub fn current_run_rate(score: i64, overs: f64) -> f64 {
    if overs > 0.0 {
        score as f64 / overs
    } else {
        0.0
    }
}

/// Runs per over needed from the remaining balls
///
/// Once the innings has no balls left this is not a true rate, just
/// `runs_left * 6`.
#[inline]
pub fn required_run_rate(runs_left: i64, balls_left: f64) -> f64 {
    let runs = runs_left as f64 * BALLS_PER_OVER;
    if balls_left > 0.0 {
        runs / balls_left
    } else {
        runs
    }
}
