//! 表データ → ワイン情報への変換
//!
//! ## 処理フロー
//! 1. ヘッダー行から列マッピングを作成
//! 2. 各行のセルをクリーニング・型変換
//! 3. 名前もIDもない行を除外
//! 4. 固定データ（ステーキ・おすすめ）と結合

use crate::catalog;
use crate::cleaning::{clean_multiline, clean_text, parse_percentage, parse_year};
use crate::error::Result;
use crate::header::{HeaderMapping, WineField};
use crate::types::{AppData, Table, Wine};

/// 1行をワイン情報に変換
pub fn convert_row<S: AsRef<str>>(row: &[S], mapping: &HeaderMapping) -> Wine {
    let text = |field| clean_text(mapping.cell(row, field));

    Wine {
        id: parse_year(mapping.cell(row, WineField::Id)),
        referral_id: parse_year(mapping.cell(row, WineField::ReferralId)),
        name: text(WineField::Name),
        producer: text(WineField::Producer),
        origin_country: text(WineField::OriginCountry),
        region: text(WineField::Region),
        grape_type: text(WineField::GrapeType),
        wine_type: text(WineField::WineType),
        harvest: parse_year(mapping.cell(row, WineField::Harvest)),
        alcohol_level: parse_percentage(mapping.cell(row, WineField::AlcoholLevel)),
        price: None,
        imported_by: None,
        aging_process: text(WineField::AgingProcess),
        harmonization: clean_multiline(mapping.cell(row, WineField::Harmonization)),
        taste_description: text(WineField::TasteDescription),
    }
}

/// 表全体を変換（名前もIDもない行は除外）
///
/// # Arguments
/// * `table` - 読み込んだ表
/// * `mapping` - 列マッピング
///
/// # Returns
/// 出力対象のワイン一覧（入力順）
pub fn convert_rows(table: &Table, mapping: &HeaderMapping) -> Vec<Wine> {
    let mut wines = Vec::with_capacity(table.len());

    for (index, row) in table.rows.iter().enumerate() {
        let wine = convert_row(row, mapping);
        if wine.is_identifiable() {
            wines.push(wine);
        } else {
            // ヘッダー行を1行目として数える
            tracing::debug!(row = index + 2, "名前・IDがないため行をスキップ");
        }
    }

    tracing::debug!(
        total = table.len(),
        converted = wines.len(),
        "ワイン変換完了"
    );
    wines
}

/// 出力ドキュメントを組み立てる
pub fn build_app_data(wines: Vec<Wine>) -> AppData {
    AppData {
        wine: wines,
        steak: catalog::steaks(),
        sommelier_suggestions: catalog::sommelier_suggestions(),
    }
}

/// JSON文字列に変換（2スペースインデント、非ASCIIはそのまま）
pub fn to_json(data: &AppData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
