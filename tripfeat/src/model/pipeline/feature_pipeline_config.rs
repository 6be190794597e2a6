use super::FeaturizerConfig;
use crate::model::featurizer::speed::ElapsedTimePolicy;
use config::{Config, ConfigError, Environment, FileFormat};
use serde::{Deserialize, Serialize};
use tripfeat_core::util::DistanceUnit;

const DEFAULT_CONFIG: &str = include_str!("../../config/tripfeat-defaults.toml");
const ENV_PREFIX: &str = "TRIPFEAT";

/// configuration of a feature pipeline. see `src/config/tripfeat-defaults.toml`
/// for the default values and a description of each field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeaturePipelineConfig {
    pub distance_unit: DistanceUnit,
    pub elapsed_time_policy: ElapsedTimePolicy,
    pub target_column: String,
    pub featurizers: Vec<FeaturizerConfig>,
}

impl Default for FeaturePipelineConfig {
    fn default() -> Self {
        FeaturePipelineConfig {
            distance_unit: DistanceUnit::default(),
            elapsed_time_policy: ElapsedTimePolicy::default(),
            target_column: String::from("trip_duration"),
            featurizers: vec![
                FeaturizerConfig::Temporal,
                FeaturizerConfig::Distance,
                FeaturizerConfig::Speed,
            ],
        }
    }
}

impl FeaturePipelineConfig {
    /// loads a pipeline configuration in layers: built-in defaults, then the
    /// optional TOML file, then `TRIPFEAT_` prefixed environment variables.
    pub fn load(filepath: Option<&str>) -> Result<FeaturePipelineConfig, ConfigError> {
        Self::load_with_environment(filepath, environment())
    }

    fn load_with_environment(
        filepath: Option<&str>,
        environment: Environment,
    ) -> Result<FeaturePipelineConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        if let Some(f) = filepath {
            log::debug!("reading feature pipeline configuration from {f}");
            builder = builder.add_source(config::File::new(f, FileFormat::Toml));
        }
        builder
            .add_source(environment)
            .build()?
            .try_deserialize::<FeaturePipelineConfig>()
    }
}

/// reads `TRIPFEAT_<KEY>` variables, such as `TRIPFEAT_DISTANCE_UNIT`.
/// nested keys are separated by a double underscore.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .try_parsing(true)
        .separator("__")
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn no_environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    #[test]
    fn test_defaults_match_default_impl() {
        let loaded = FeaturePipelineConfig::load_with_environment(None, no_environment()).unwrap();
        assert_eq!(loaded, FeaturePipelineConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
distance_unit = "miles"

[[featurizers]]
type = "speed"
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();
        let loaded =
            FeaturePipelineConfig::load_with_environment(Some(path), no_environment()).unwrap();
        assert_eq!(loaded.distance_unit, DistanceUnit::Miles);
        assert_eq!(loaded.elapsed_time_policy, ElapsedTimePolicy::Exclude);
        assert_eq!(loaded.target_column, "trip_duration");
        assert_eq!(loaded.featurizers, vec![FeaturizerConfig::Speed]);
    }

    #[test]
    fn test_environment_overrides_file() {
        let env = [
            ("TRIPFEAT_ELAPSED_TIME_POLICY", "reject"),
            ("TRIPFEAT_TARGET_COLUMN", "duration_s"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<config::Map<String, String>>();
        let environment = environment().source(Some(env));
        let loaded = FeaturePipelineConfig::load_with_environment(None, environment).unwrap();
        assert_eq!(loaded.elapsed_time_policy, ElapsedTimePolicy::Reject);
        assert_eq!(loaded.target_column, "duration_s");
        assert_eq!(loaded.distance_unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_load_reads_process_environment() {
        // no other test reads or writes this variable through the process environment
        std::env::set_var("TRIPFEAT_DISTANCE_UNIT", "miles");
        let loaded = FeaturePipelineConfig::load(None);
        std::env::remove_var("TRIPFEAT_DISTANCE_UNIT");
        assert_eq!(loaded.unwrap().distance_unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_unknown_featurizer_type_fails() {
        let value = serde_json::json!({
            "distance_unit": "kilometers",
            "elapsed_time_policy": "exclude",
            "target_column": "trip_duration",
            "featurizers": [{ "type": "fare" }]
        });
        let result = serde_json::from_value::<FeaturePipelineConfig>(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let result = FeaturePipelineConfig::load_with_environment(
            Some("/nonexistent/tripfeat.toml"),
            no_environment(),
        );
        assert!(result.is_err());
    }
}
