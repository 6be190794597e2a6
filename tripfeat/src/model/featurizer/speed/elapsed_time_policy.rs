use crate::model::featurizer::FeaturizerError;
use serde::{Deserialize, Serialize};

/// how the speed featurizer treats trips whose elapsed time is zero,
/// negative or non-finite while fitting. these trips never contribute to a
/// learned mean speed.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedTimePolicy {
    /// skip the trip and continue fitting
    #[default]
    Exclude,
    /// fail the fit on the first invalid trip
    Reject,
}

impl ElapsedTimePolicy {
    /// screens a single elapsed time value.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the trip may be aggregated, `Ok(false)` if it should be
    ///   skipped, or an error under [`ElapsedTimePolicy::Reject`]
    pub fn accepts(&self, row: usize, elapsed_seconds: f64) -> Result<bool, FeaturizerError> {
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            return Ok(true);
        }
        match self {
            ElapsedTimePolicy::Exclude => Ok(false),
            ElapsedTimePolicy::Reject => Err(FeaturizerError::InvalidElapsedTimeError {
                row,
                value: elapsed_seconds,
            }),
        }
    }
}

impl std::fmt::Display for ElapsedTimePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElapsedTimePolicy::Exclude => write!(f, "exclude"),
            ElapsedTimePolicy::Reject => write!(f, "reject"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_exclude() {
        let policy = ElapsedTimePolicy::Exclude;
        assert!(policy.accepts(0, 60.0).unwrap());
        for bad in [0.0, -0.0, -60.0, f64::NAN, f64::INFINITY] {
            assert!(!policy.accepts(0, bad).unwrap(), "{bad}");
        }
    }

    #[test]
    fn test_reject() {
        let policy = ElapsedTimePolicy::Reject;
        assert!(policy.accepts(0, 0.5).unwrap());
        let result = policy.accepts(7, 0.0);
        assert!(matches!(
            result,
            Err(FeaturizerError::InvalidElapsedTimeError { row: 7, .. })
        ));
    }
}
