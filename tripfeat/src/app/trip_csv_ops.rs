use super::TripFeatAppError;
use crate::model::{
    feature::FeatureBatch,
    featurizer::FeaturizerError,
    fieldname,
    trip::{TripBatch, TripRecord},
};
use kdam::tqdm;
use std::collections::HashMap;

/// reads trips from a CSV file with a header row.
///
/// # Arguments
///
/// * `filepath`      - CSV file containing at least the required trip columns
/// * `target_column` - optional column holding trip duration in seconds
///
/// # Returns
///
/// * the trips in file order and, when `target_column` is given, the aligned durations
pub fn read_trips(
    filepath: &str,
    target_column: Option<&str>,
) -> Result<(TripBatch, Option<Vec<f64>>), TripFeatAppError> {
    let input_error = |source: FeaturizerError| TripFeatAppError::InputError {
        filepath: filepath.to_string(),
        source,
    };
    let read_error = |source: csv::Error| TripFeatAppError::CsvReadError {
        filepath: filepath.to_string(),
        source,
    };

    let mut reader = csv::Reader::from_path(filepath).map_err(read_error)?;
    let headers = reader.headers().map_err(read_error)?.clone();
    let header_lookup = headers
        .iter()
        .enumerate()
        .map(|(i, s)| (s, i))
        .collect::<HashMap<_, _>>();
    if let Some(missing) = fieldname::REQUIRED_INPUT_COLUMNS
        .iter()
        .find(|c| !header_lookup.contains_key(*c))
    {
        return Err(input_error(FeaturizerError::MissingColumnError(
            missing.to_string(),
        )));
    }
    let target_idx = match target_column {
        Some(col) => match header_lookup.get(col) {
            Some(idx) => Some(*idx),
            None => {
                return Err(input_error(FeaturizerError::MissingColumnError(
                    col.to_string(),
                )))
            }
        },
        None => None,
    };

    let mut trips: Vec<TripRecord> = vec![];
    let mut target: Vec<f64> = vec![];
    for (row_idx, row) in tqdm!(reader.records().enumerate(), desc = "read trips") {
        let record = row.map_err(read_error)?;
        let trip: TripRecord = record.deserialize(Some(&headers)).map_err(|e| {
            input_error(FeaturizerError::MalformedInput(format!("row {row_idx}: {e}")))
        })?;
        if let Some(idx) = target_idx {
            let raw = record.get(idx).unwrap_or_default().trim();
            let value = raw.parse::<f64>().map_err(|e| {
                input_error(FeaturizerError::MalformedInput(format!(
                    "row {row_idx}: trip duration '{raw}' is not numeric: {e}"
                )))
            })?;
            target.push(value);
        }
        trips.push(trip);
    }
    log::info!("read {} trips from {filepath}", trips.len());

    let target_opt = target_idx.map(|_| target);
    Ok((TripBatch::new(trips), target_opt))
}

/// writes a feature batch to CSV with a header row of column names.
/// missing values are written as empty cells.
pub fn write_features(filepath: &str, features: &FeatureBatch) -> Result<(), TripFeatAppError> {
    let write_error = |source: csv::Error| TripFeatAppError::CsvWriteError {
        filepath: filepath.to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(filepath).map_err(write_error)?;
    writer
        .write_record(features.column_names())
        .map_err(write_error)?;
    for row in features.rows() {
        let cells = row
            .iter()
            .map(|v| v.map(|x| x.to_string()).unwrap_or_default());
        writer.write_record(cells).map_err(write_error)?;
    }
    writer.flush().map_err(|source| TripFeatAppError::IoError {
        filepath: filepath.to_string(),
        source,
    })?;
    log::info!(
        "wrote {} rows of [{}] to {filepath}",
        features.n_rows(),
        features.column_names().join(", ")
    );
    Ok(())
}
