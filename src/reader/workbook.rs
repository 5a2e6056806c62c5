//! ワークブック（xlsx/xls/ods）読み込み
//!
//! 先頭シートのみを対象とする。

use super::split_rows;
use crate::error::{ConverterError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use wine_converter_common::{HeaderMapping, Table, WineField};

/// ワークブックの先頭シートを読み込む
pub fn read_workbook(path: &Path, has_headers: bool) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConverterError::EmptyInput(path.display().to_string()))?;

    tracing::debug!(sheet = %sheet_name, "シートを読み込み");
    let range = workbook.worksheet_range(&sheet_name)?;

    // 範囲がA列以外から始まる場合は左側を空セルで埋める
    let column_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let cells: Vec<Vec<Data>> = range
        .rows()
        .map(|row| {
            std::iter::repeat(Data::Empty)
                .take(column_offset)
                .chain(row.iter().cloned())
                .collect()
        })
        .collect();

    let alcohol_column = alcohol_column(&cells, has_headers);
    let rows: Vec<Vec<String>> = cells
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, cell)| {
                    if col == alcohol_column {
                        percentage_text(cell)
                    } else {
                        cell_text(cell)
                    }
                })
                .collect()
        })
        .collect();

    split_rows(rows, has_headers, &path.display().to_string())
}

/// アルコール度数の列番号（ヘッダー行があればそれで判定）
fn alcohol_column(cells: &[Vec<Data>], has_headers: bool) -> usize {
    let header = cells
        .iter()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .find(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    match header {
        Some(header) if has_headers => {
            HeaderMapping::from_headers(&header).column_for(WineField::AlcoholLevel)
        }
        _ => WineField::AlcoholLevel.fallback_index(),
    }
}

/// セル値を文字列に変換
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    }
}

/// アルコール度数セルを文字列に変換
///
/// パーセント書式のセルは小数（13.5% → 0.135）で格納されるため、
/// 1以下の小数はパーセント表記に戻す。
fn percentage_text(cell: &Data) -> String {
    match cell {
        Data::Float(f) if f.abs() <= 1.0 => {
            // 浮動小数の誤差（13.500000000000002）を丸める
            let percent = (f * 100.0 * 1e9).round() / 1e9;
            format!("{}%", percent)
        }
        other => cell_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Data> {
        cells.iter().map(|c| Data::String(c.to_string())).collect()
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Malbec".into())), "Malbec");
        assert_eq!(cell_text(&Data::Int(2018)), "2018");
        assert_eq!(cell_text(&Data::Float(2018.0)), "2018");
        assert_eq!(cell_text(&Data::Float(13.5)), "13.5");
        assert_eq!(cell_text(&Data::Float(3760245210066.0)), "3760245210066");
    }

    #[test]
    fn test_percentage_text() {
        assert_eq!(percentage_text(&Data::Float(0.135)), "13.5%");
        assert_eq!(percentage_text(&Data::Float(0.12)), "12%");
        assert_eq!(percentage_text(&Data::Float(13.5)), "13.5");
        assert_eq!(percentage_text(&Data::String("14%".into())), "14%");
        assert_eq!(percentage_text(&Data::Empty), "");
    }

    #[test]
    fn test_alcohol_column_from_header() {
        let cells = vec![
            vec![Data::Empty, Data::Empty],
            text_row(&["name", "AlcoholLevel"]),
        ];
        assert_eq!(alcohol_column(&cells, true), 1);
    }

    #[test]
    fn test_alcohol_column_fallback() {
        let cells = vec![text_row(&["name", "alcoholLevel"])];
        assert_eq!(alcohol_column(&cells, false), 9);
        assert_eq!(alcohol_column(&[], true), 9);
        assert_eq!(alcohol_column(&[text_row(&["name"])], true), 9);
    }
}
