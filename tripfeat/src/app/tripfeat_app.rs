use super::{tripfeat_ops, TripFeatAppError};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Command line tool for deriving ride-level features from trip CSV files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripFeatApp {
    #[command(subcommand)]
    pub op: TripFeatOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TripFeatOperation {
    /// fit the feature pipeline on completed trips and write features for another trip file
    FitTransform {
        /// CSV of completed trips, including the trip duration column
        train_file: String,
        /// CSV of trips to derive features for. may be the training file.
        input_file: String,
        /// file path to write the feature CSV
        output_file: String,
        /// TOML file overriding the default pipeline configuration
        #[arg(long)]
        config_file: Option<String>,
        /// name of the trip duration column (seconds), overrides the configuration
        #[arg(long)]
        target_column: Option<String>,
    },
    /// fit the speed featurizer and print the learned mean speed per pickup region as JSON
    Speeds {
        /// CSV of completed trips, including the trip duration column
        train_file: String,
        /// TOML file overriding the default pipeline configuration
        #[arg(long)]
        config_file: Option<String>,
        /// name of the trip duration column (seconds), overrides the configuration
        #[arg(long)]
        target_column: Option<String>,
    },
}

impl TripFeatOperation {
    pub fn run(&self) -> Result<(), TripFeatAppError> {
        match self {
            TripFeatOperation::FitTransform {
                train_file,
                input_file,
                output_file,
                config_file,
                target_column,
            } => {
                let config = tripfeat_ops::load_config(config_file.as_deref(), target_column)?;
                tripfeat_ops::fit_transform(&config, train_file, input_file, output_file)
            }
            TripFeatOperation::Speeds {
                train_file,
                config_file,
                target_column,
            } => {
                let config = tripfeat_ops::load_config(config_file.as_deref(), target_column)?;
                let model = tripfeat_ops::learn_speeds(&config, train_file)?;
                println!("{}", serde_json::to_string_pretty(&model)?);
                Ok(())
            }
        }
    }
}
