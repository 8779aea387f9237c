//! CSV batch lookups
//!
//! This module provides:
//! - A struct (`QueryRecord`) for reading query positions from CSV files
//! - A struct (`FieldRecord`) for writing the looked up field in configured units
//! - [`process`] for running a whole batch through a [`GeomagneticLookup`]
//!
//! Input files need `latitude` and `longitude` columns in degrees; any other columns are ignored.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::OutputConfig;
use crate::{GeomagneticLookup, LookupError, MagneticField};

/// A single query position read from CSV
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// A single looked up field, expressed in the units of an [`OutputConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Latitude in degrees, as queried
    pub latitude: f64,
    /// Longitude in degrees, as queried
    pub longitude: f64,
    /// Declination in the configured angle unit
    pub declination: f64,
    /// Inclination in the configured angle unit
    pub inclination: f64,
    /// Total field strength in the configured strength unit
    pub strength: f64,
}
impl FieldRecord {
    /// Convert a field at `query` into the units of `config`
    pub fn new(query: &QueryRecord, field: &MagneticField, config: &OutputConfig) -> Self {
        FieldRecord {
            latitude: query.latitude,
            longitude: query.longitude,
            declination: config.angle_unit.express(field.declination),
            inclination: config.angle_unit.express(field.inclination),
            strength: config.strength_unit.express(field),
        }
    }
}

/// Errors from a batch run
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// A row could not be looked up (1-based data row, header excluded)
    #[error("row {row}: {source}")]
    Lookup { row: usize, source: LookupError },
    /// The CSV input or output failed
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Read all query records from a CSV file.
///
/// # Example
/// ```no_run
/// use geomag::batch::read_queries;
/// let queries = read_queries("positions.csv").expect("Failed to read positions");
/// println!("Loaded {} queries", queries.len());
/// ```
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<QueryRecord>, csv::Error> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: QueryRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Write field records to a CSV file with a header row.
pub fn write_fields<P: AsRef<Path>>(records: &[FieldRecord], path: P) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Look up every query.
///
/// Rows with non-finite coordinates fail the batch with [`BatchError::Lookup`] unless
/// `config.skip_invalid` is set, in which case they are dropped with a warning.
pub fn process(
    lookup: &GeomagneticLookup<'_>,
    queries: &[QueryRecord],
    config: &OutputConfig,
) -> Result<Vec<FieldRecord>, BatchError> {
    let mut fields = Vec::with_capacity(queries.len());
    for (i, query) in queries.iter().enumerate() {
        match lookup.lookup(query.latitude, query.longitude) {
            Ok(field) => fields.push(FieldRecord::new(query, &field, config)),
            Err(source) if config.skip_invalid => {
                warn!("Skipping row {}: {}", i + 1, source);
            }
            Err(source) => return Err(BatchError::Lookup { row: i + 1, source }),
        }
    }
    debug!(
        "Looked up {} of {} queries against {}",
        fields.len(),
        queries.len(),
        lookup.table().info()
    );
    Ok(fields)
}

/// Read queries from `input`, look them up, and write the fields to `output`.
///
/// # Returns
/// The number of records written.
pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
    lookup: &GeomagneticLookup<'_>,
    input: P,
    output: Q,
    config: &OutputConfig,
) -> Result<usize, BatchError> {
    let queries = read_queries(input.as_ref())?;
    info!(
        "Read {} queries from {}",
        queries.len(),
        input.as_ref().display()
    );
    let fields = process(lookup, &queries, config)?;
    write_fields(&fields, output.as_ref())?;
    info!(
        "Wrote {} records to {}",
        fields.len(),
        output.as_ref().display()
    );
    Ok(fields.len())
}
