//! CSV読み込み

use super::split_rows;
use crate::error::Result;
use csv::ReaderBuilder;
use std::io::Read;
use wine_converter_common::Table;

const UTF8_BOM: char = '\u{feff}';

/// CSVを読み込む
///
/// 列数が行ごとに異なっても受け付ける。引用符内の改行はセル内改行として保持する。
pub fn parse_csv<R: Read>(reader: R, has_headers: bool) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    // Excelが付けるBOMを先頭セルから除去
    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        if first.starts_with(UTF8_BOM) {
            *first = first.trim_start_matches(UTF8_BOM).to_string();
        }
    }

    split_rows(rows, has_headers, "CSV")
}
