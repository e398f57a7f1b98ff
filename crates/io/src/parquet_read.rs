//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::datatypes::{Float64Type, UInt8Type};
use isotherm_pathway::{Scenario, TimePeriod};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::parquet_write::build_schema;
use crate::record::{IndicatorRecord, RecordKey};

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    Ok(reader.collect::<Result<Vec<_>, _>>()?)
}

/// Checks column count, names and types against the record schema.
fn validate_schema(batch: &RecordBatch) -> Result<(), IoError> {
    let schema = batch.schema();
    let expected = build_schema();
    if schema.fields().len() != expected.fields().len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "expected {} columns, got {}",
                expected.fields().len(),
                schema.fields().len()
            ),
        });
    }

    let mismatches: Vec<String> = expected
        .fields()
        .iter()
        .zip(schema.fields().iter())
        .enumerate()
        .filter(|(_, (want, got))| {
            want.name() != got.name() || want.data_type() != got.data_type()
        })
        .map(|(i, (want, got))| {
            format!(
                "column {i}: expected '{}' ({}), got '{}' ({})",
                want.name(),
                want.data_type(),
                got.name(),
                got.data_type()
            )
        })
        .collect();

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }
    Ok(())
}

fn invalid(row: usize, e: impl std::fmt::Display) -> IoError {
    IoError::Validation {
        count: 1,
        details: format!("row {row}: {e}"),
    }
}

fn batch_to_records(batch: &RecordBatch, out: &mut Vec<IndicatorRecord>) -> Result<(), IoError> {
    let source = batch.column(0).as_string::<i32>();
    let indicator = batch.column(1).as_string::<i32>();
    let scenario = batch.column(2).as_string::<i32>();
    let period = batch.column(3).as_string::<i32>();
    let lat = batch.column(4).as_primitive::<Float64Type>();
    let lon = batch.column(5).as_primitive::<Float64Type>();
    let value = batch.column(6).as_primitive::<Float64Type>();
    let unit = batch.column(7).as_string::<i32>();
    let model = batch.column(8).as_string::<i32>();
    let percentile = batch.column(9).as_primitive::<UInt8Type>();

    for row in 0..batch.num_rows() {
        let key = RecordKey {
            source: source.value(row).to_string(),
            indicator_id: indicator.value(row).to_string(),
            scenario: scenario
                .value(row)
                .parse::<Scenario>()
                .map_err(|e| invalid(row, e))?,
            time_period: period
                .value(row)
                .parse::<TimePeriod>()
                .map_err(|e| invalid(row, e))?,
            latitude: lat.value(row),
            longitude: lon.value(row),
        };
        let record = IndicatorRecord::new(key, value.value(row), unit.value(row), model.value(row))?
            .with_percentile(percentile.value(row));
        out.push(record);
    }
    Ok(())
}

/// Reads a record file written by [`ParquetSink`](crate::ParquetSink).
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file is missing,
/// [`IoError::Validation`] if the columns do not match the record layout
/// or a row holds an unknown scenario or period, and
/// [`IoError::Parquet`] on decoding failures.
pub fn read_records(path: &Path) -> Result<Vec<IndicatorRecord>, IoError> {
    let batches = read_batches(path)?;
    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in &batches {
        validate_schema(batch)?;
        batch_to_records(batch, &mut records)?;
    }
    Ok(records)
}
