//! Low-level Parquet column building.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, StringArray, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};

use crate::error::IoError;
use crate::record::IndicatorRecord;

/// Column names of the record file, in order.
pub(crate) const COLUMNS: [&str; 10] = [
    "source",
    "indicator_id",
    "scenario",
    "time_period",
    "latitude",
    "longitude",
    "value",
    "unit",
    "model",
    "percentile",
];

/// Builds the Arrow schema for indicator records.
pub(crate) fn build_schema() -> SchemaRef {
    let utf8 = |name| Field::new(name, DataType::Utf8, false);
    let float = |name| Field::new(name, DataType::Float64, false);
    Arc::new(Schema::new(vec![
        utf8(COLUMNS[0]),
        utf8(COLUMNS[1]),
        utf8(COLUMNS[2]),
        utf8(COLUMNS[3]),
        float(COLUMNS[4]),
        float(COLUMNS[5]),
        float(COLUMNS[6]),
        utf8(COLUMNS[7]),
        utf8(COLUMNS[8]),
        Field::new(COLUMNS[9], DataType::UInt8, false),
    ]))
}

/// Converts records into one Arrow [`RecordBatch`].
pub(crate) fn records_to_batch(
    records: &[&IndicatorRecord],
    schema: &SchemaRef,
) -> Result<RecordBatch, IoError> {
    let strings = |f: fn(&IndicatorRecord) -> &str| -> ArrayRef {
        Arc::new(StringArray::from_iter_values(records.iter().map(|r| f(r))))
    };
    let floats = |f: fn(&IndicatorRecord) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(records.iter().map(|r| f(r))))
    };

    let columns: Vec<ArrayRef> = vec![
        strings(IndicatorRecord::source),
        strings(IndicatorRecord::indicator_id),
        strings(|r| r.scenario().as_str()),
        strings(|r| r.time_period().as_str()),
        floats(IndicatorRecord::latitude),
        floats(IndicatorRecord::longitude),
        floats(IndicatorRecord::value),
        strings(IndicatorRecord::unit),
        strings(IndicatorRecord::model),
        Arc::new(UInt8Array::from_iter_values(
            records.iter().map(|r| r.percentile()),
        )),
    ];

    Ok(RecordBatch::try_new(Arc::clone(schema), columns)?)
}
