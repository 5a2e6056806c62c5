//! 読み込み → 変換 → 固定データ結合

use crate::error::Result;
use crate::reader;
use std::path::Path;
use wine_converter_common::{build_app_data, convert_rows, AppData, HeaderMapping, Table};

/// 変換結果
#[derive(Debug, Clone)]
pub struct Conversion {
    /// 入力のデータ行数
    pub input_rows: usize,
    pub mapping: HeaderMapping,
    pub data: AppData,
}

/// 表のヘッダーから列マッピングを作成
pub fn mapping_for(table: &Table, has_headers: bool) -> HeaderMapping {
    if has_headers {
        HeaderMapping::from_headers(&table.headers)
    } else {
        HeaderMapping::positional()
    }
}

/// 読み込み済みの表を変換
pub fn convert_table(table: &Table, has_headers: bool) -> Conversion {
    let mapping = mapping_for(table, has_headers);
    let wines = convert_rows(table, &mapping);

    Conversion {
        input_rows: table.len(),
        mapping,
        data: build_app_data(wines),
    }
}

/// ファイルを読み込んで変換
pub fn convert_file(path: &Path, has_headers: bool) -> Result<Conversion> {
    let table = reader::read_table(path, has_headers)?;
    Ok(convert_table(&table, has_headers))
}
