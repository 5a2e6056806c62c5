//! 入力表の読み込み
//!
//! 拡張子で形式を判定し、CSVまたはワークブック（xlsx/xls/ods）を
//! 文字列セルの表として読み込む。

mod delimited;
mod workbook;

pub use delimited::parse_csv;
pub use workbook::read_workbook;

use crate::error::{ConverterError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wine_converter_common::Table;

/// 入力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

impl InputFormat {
    /// 拡張子から判定（不明な場合はCSV）
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
            InputFormat::Workbook
        } else {
            InputFormat::Csv
        }
    }
}

/// ファイルを表として読み込む
///
/// # Arguments
/// * `path` - 入力ファイル
/// * `has_headers` - 1行目をヘッダーとして扱うか
pub fn read_table(path: &Path, has_headers: bool) -> Result<Table> {
    if !path.exists() {
        return Err(ConverterError::FileNotFound(path.display().to_string()));
    }

    match InputFormat::from_path(path) {
        InputFormat::Csv => {
            let file = File::open(path)?;
            parse_csv(BufReader::new(file), has_headers)
                .map_err(|e| with_source(e, path))
        }
        InputFormat::Workbook => read_workbook(path, has_headers),
    }
}

fn with_source(err: ConverterError, path: &Path) -> ConverterError {
    match err {
        ConverterError::EmptyInput(_) => ConverterError::EmptyInput(path.display().to_string()),
        other => other,
    }
}

/// 行リストをヘッダーとデータ行に分割
///
/// 全セルが空の行は読み飛ばす。
pub(crate) fn split_rows(
    rows: Vec<Vec<String>>,
    has_headers: bool,
    source: &str,
) -> Result<Table> {
    let mut rows = rows
        .into_iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    if !has_headers {
        return Ok(Table::new(Vec::new(), rows.collect()));
    }

    let headers = rows
        .next()
        .ok_or_else(|| ConverterError::EmptyInput(source.to_string()))?;
    Ok(Table::new(headers, rows.collect()))
}
