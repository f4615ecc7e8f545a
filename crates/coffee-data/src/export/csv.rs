//! CSV encoder: header row, then one row per record.

use ::csv::{Terminator, WriterBuilder};

use super::{ExportFormat, serialization_error};
use crate::batch::Batch;
use crate::error::ExportError;

pub(super) fn encode(batch: &Batch) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if !batch.is_empty() {
        writer
            .write_record(batch.field_names())
            .map_err(|err| serialization_error(ExportFormat::Csv, &err))?;
    }
    for record in batch.records() {
        writer
            .write_record(record.values().map(ToString::to_string))
            .map_err(|err| serialization_error(ExportFormat::Csv, &err))?;
    }
    writer.into_inner().map_err(|err| serialization_error(ExportFormat::Csv, &err))
}
