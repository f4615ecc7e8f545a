//! JSON encoder: a pretty-printed array with four-space indentation.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::{ExportFormat, serialization_error};
use crate::batch::Batch;
use crate::error::ExportError;

const INDENT: &[u8] = b"    ";

pub(super) fn encode(batch: &Batch) -> Result<Vec<u8>, ExportError> {
    let mut serializer =
        Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(INDENT));
    batch
        .serialize(&mut serializer)
        .map_err(|err| serialization_error(ExportFormat::Json, &err))?;
    Ok(serializer.into_inner())
}
