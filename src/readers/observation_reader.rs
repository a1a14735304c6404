use crate::error::{PredictorError, Result};
use crate::models::Observation;
use crate::utils::constants::REQUIRED_COLUMNS;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub struct ObservationReader {
    delimiter: u8,
}

impl ObservationReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read every observation from a delimited file with a header row
    pub fn read_observations(&self, path: &Path) -> Result<Vec<Observation>> {
        if !path.exists() {
            return Err(PredictorError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let observations = self.read_from(file)?;
        debug!(path = %path.display(), rows = observations.len(), "Read observations");

        Ok(observations)
    }

    /// Read observations from any reader, e.g. an in-memory buffer
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Observation>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        Self::check_required_columns(&headers)?;

        let mut observations = Vec::new();
        for (idx, result) in reader.deserialize::<Observation>().enumerate() {
            let observation = result.map_err(|e| {
                PredictorError::Load(format!("Row {}: {}", idx + 1, Self::describe(&e, &headers)))
            })?;
            observations.push(observation);
        }

        Ok(observations)
    }

    fn check_required_columns(headers: &StringRecord) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(PredictorError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Name the offending column when the CSV error points at one
    fn describe(err: &csv::Error, headers: &StringRecord) -> String {
        if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
            if let Some(column) = de.field().and_then(|f| headers.get(f as usize)) {
                return format!("invalid value in column '{}': {}", column, de);
            }
        }
        err.to_string()
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}
