//! XML encoder: `<data>` root with one `<item>` per record.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use super::{ExportFormat, serialization_error};
use crate::batch::Batch;
use crate::error::ExportError;
use crate::record::Record;

const ROOT: &str = "data";
const ITEM: &str = "item";

pub(super) fn encode(batch: &Batch) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|err| serialization_error(ExportFormat::Xml, &err))?;
    writer
        .create_element(ROOT)
        .write_inner_content(|root| {
            batch
                .records()
                .iter()
                .try_for_each(|record| write_item(root, record))
        })
        .map_err(|err| serialization_error(ExportFormat::Xml, &err))?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_item(writer: &mut Writer<Vec<u8>>, record: &Record) -> io::Result<()> {
    writer
        .create_element(ITEM)
        .write_inner_content(|item| {
            record.iter().try_for_each(|(name, value)| {
                item.create_element(element_name(name))
                    .write_text_content(BytesText::new(&value.to_string()))
                    .map(|_| ())
            })
        })
        .map(|_| ())
}

/// Turn a field name into a valid XML element name.
///
/// Characters outside letters, digits, `_`, `-` and `.` become `_`, and a
/// name that cannot start an element gets a leading `_`.
fn element_name(field: &str) -> String {
    let mut name: String = field
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let starts_well = name
        .chars()
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_');
    if !starts_well || name.to_ascii_lowercase().starts_with("xml") {
        name.insert(0, '_');
    }
    name
}
