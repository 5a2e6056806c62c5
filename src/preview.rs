//! 入力内容のプレビュー表示
//!
//! 列の対応付け、先頭行の表、変換後ワインのJSONサンプルを整形する。

use crate::error::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wine_converter_common::header::ColumnSource;
use wine_converter_common::{AppData, HeaderMapping, Table, WineField};

/// セルの最大表示幅
const MAX_CELL_WIDTH: usize = 24;

/// 列の対応付けを整形
pub fn format_mapping(mapping: &HeaderMapping, headers: &[String]) -> String {
    let mut lines = Vec::with_capacity(WineField::ALL.len());

    for field in WineField::ALL {
        let source = match mapping.source_for(field) {
            ColumnSource::Header(i) => {
                let name = headers.get(i).map(String::as_str).unwrap_or("");
                format!("列{} \"{}\"", i + 1, name)
            }
            ColumnSource::Fallback(i) => format!("列{} (位置で対応)", i + 1),
        };
        lines.push(format!("  {:<18} ← {}", field.key(), source));
    }

    lines.join("\n")
}

/// 表示幅で切り詰める（改行は記号に置換）
fn truncate_cell(cell: &str, max_width: usize) -> String {
    let flat = cell.replace("\r\n", "↵").replace(['\n', '\r'], "↵");
    if flat.width() <= max_width {
        return flat;
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

/// 先頭 `rows` 行を表形式に整形
pub fn format_table(table: &Table, rows: usize) -> String {
    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(rows)
        .map(|row| row.iter().map(|c| truncate_cell(c, MAX_CELL_WIDTH)).collect())
        .collect();
    let header: Vec<String> = table
        .headers
        .iter()
        .map(|h| truncate_cell(h, MAX_CELL_WIDTH))
        .collect();

    let columns = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for row in body.iter().chain(std::iter::once(&header)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let render = |row: &[String]| -> String {
        (0..columns)
            .map(|i| pad(row.get(i).map(String::as_str).unwrap_or(""), widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::new();
    if !header.is_empty() {
        lines.push(render(header.as_slice()));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
    }
    lines.extend(body.iter().map(|row| render(row.as_slice())));
    lines.join("\n")
}

/// 先頭 `count` 件のワインをJSONで整形
pub fn sample_json(data: &AppData, count: usize) -> Result<String> {
    let sample = &data.wine[..count.min(data.wine.len())];
    let value = serde_json::json!({ "wine": sample });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wine_converter_common::{build_app_data, Wine};

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("Malbec", 10), "Malbec");
        assert_eq!(truncate_cell("Carnes\nQueijos", 20), "Carnes↵Queijos");
        assert_eq!(truncate_cell("abcdefghij", 5), "abcd…");
        // 全角文字は幅2として数える
        assert_eq!(truncate_cell("赤ワイン辛口", 6), "赤ワ…");
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let table = Table::new(
            strings(&["id", "name"]),
            vec![strings(&["1", "Tannat"]), strings(&["22", "Rosé"]), strings(&["3", "x"])],
        );
        let text = format_table(&table, 2);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id | name");
        assert_eq!(lines[1], "---+-------");
        assert_eq!(lines[2], "1  | Tannat");
        assert_eq!(lines[3], "22 | Rosé");
    }

    #[test]
    fn test_format_table_without_headers() {
        let table = Table::new(Vec::new(), vec![strings(&["1", "Tannat"])]);
        assert_eq!(format_table(&table, 10), "1 | Tannat");
    }

    #[test]
    fn test_format_mapping() {
        let headers = strings(&["Name", "foo"]);
        let mapping = HeaderMapping::from_headers(&headers);
        let text = format_mapping(&mapping, &headers);

        assert!(text.contains("name               ← 列1 \"Name\""));
        assert!(text.contains("id                 ← 列1 (位置で対応)"));
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn test_sample_json_limits_count() {
        let wines = (1..=5)
            .map(|i| Wine { id: Some(i), ..Default::default() })
            .collect();
        let data = build_app_data(wines);

        let json = sample_json(&data, 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["wine"].as_array().unwrap().len(), 2);

        let json = sample_json(&build_app_data(Vec::new()), 2).unwrap();
        assert!(json.contains("\"wine\": []"));
    }
}
