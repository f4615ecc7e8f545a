//! Plain-text encoder: a right-aligned fixed-width table.

use crate::batch::Batch;

const SEPARATOR: &str = "  ";

pub(super) fn encode(batch: &Batch) -> Vec<u8> {
    let header: Vec<String> = batch.field_names().into_iter().map(str::to_owned).collect();
    if header.is_empty() {
        return Vec::new();
    }
    let rows: Vec<Vec<String>> = batch
        .records()
        .iter()
        .map(|record| record.values().map(ToString::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    for line in std::iter::once(&header).chain(&rows) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect();
        table.push_str(&cells.join(SEPARATOR));
        table.push('\n');
    }
    table.into_bytes()
}
