//! カタログの型定義
//!
//! CLIと変換処理で共有される型:
//! - Table: 読み込んだ表（ヘッダー行 + データ行）
//! - Wine: 表の1行を正規化したワイン情報
//! - Steak / SommelierSuggestion: 固定の参照データ
//! - AppData: 最終出力（appData.json）

use serde::{Deserialize, Serialize};

/// 読み込んだ表データ
///
/// セルはすべて文字列。行ごとに列数が異なってもよい。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// データ行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// ワイン情報
///
/// フィールド順はそのままJSONのキー順になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    pub id: Option<i64>,              // バーコード/ID
    pub referral_id: Option<i64>,     // 参照ID
    pub name: String,
    pub producer: String,             // 生産者
    pub origin_country: String,       // 生産国
    pub region: String,               // 産地
    pub grape_type: String,           // ブドウ品種
    pub wine_type: String,            // 種類（赤/白など）
    pub harvest: Option<i64>,         // 収穫年
    pub alcohol_level: Option<f64>,   // アルコール度数（0.135 = 13.5%）

    /// 価格（後工程で付与するため常にnull）
    pub price: Option<f64>,

    /// 輸入元（後工程で付与するため常にnull）
    pub imported_by: Option<String>,

    pub aging_process: String,        // 熟成方法
    pub harmonization: String,        // ペアリング（改行保持）
    pub taste_description: String,    // テイスティングコメント
}

impl Wine {
    /// 出力対象か（名前かIDのどちらかがあること）
    pub fn is_identifiable(&self) -> bool {
        !self.name.is_empty() || self.id.is_some()
    }
}

/// ステーキ（固定データ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Steak {
    pub id: i64,
    pub name: String,
    pub producer: String,
    pub cut_type: String,
    pub origin_country: String,
    pub breed: String,
    pub taste_description: String,
    pub price: i64,
    pub referral_id: i64,
}

/// ソムリエのおすすめセット（固定データ）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SommelierSuggestion {
    pub name: String,
    pub wine_id: i64,
    pub steak_id: i64,
    pub id: String,
}

/// 出力ドキュメント全体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub wine: Vec<Wine>,
    pub steak: Vec<Steak>,
    pub sommelier_suggestions: Vec<SommelierSuggestion>,
}

impl AppData {
    /// 全アイテム数（ワイン + ステーキ + おすすめ）
    pub fn total_items(&self) -> usize {
        self.wine.len() + self.steak.len() + self.sommelier_suggestions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_json_key_order() {
        let wine = Wine {
            id: Some(1),
            name: "Malbec".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&wine).unwrap();
        let keys = [
            "\"id\"", "\"referralId\"", "\"name\"", "\"producer\"", "\"originCountry\"",
            "\"region\"", "\"grapeType\"", "\"wineType\"", "\"harvest\"", "\"alcoholLevel\"",
            "\"price\"", "\"importedBy\"", "\"agingProcess\"", "\"harmonization\"",
            "\"tasteDescription\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "キー順が不正: {}", json);
    }

    #[test]
    fn test_wine_reserved_fields_are_null() {
        let json = serde_json::to_value(Wine::default()).unwrap();
        assert!(json["price"].is_null());
        assert!(json["importedBy"].is_null());
        assert!(json["harvest"].is_null());
    }

    #[test]
    fn test_is_identifiable() {
        assert!(!Wine::default().is_identifiable());
        assert!(Wine { id: Some(0), ..Default::default() }.is_identifiable());
        assert!(Wine { name: "Rosé".into(), ..Default::default() }.is_identifiable());
    }

    #[test]
    fn test_table_len() {
        let table = Table::new(vec!["id".into()], vec![vec!["1".into()], vec!["2".into()]]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(Table::default().is_empty());
    }
}
