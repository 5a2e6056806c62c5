//! ヘッダー行と正規フィールドの対応付け
//!
//! 列名は大文字小文字・空白を無視して正規名と照合する。
//! 見つからないフィールドは固定の列位置にフォールバックする。

use crate::cleaning::clean_text;
use std::collections::HashSet;

/// 入力表の正規フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WineField {
    Id,
    ReferralId,
    Name,
    Producer,
    OriginCountry,
    Region,
    GrapeType,
    WineType,
    Harvest,
    AlcoholLevel,
    AgingProcess,
    Harmonization,
    TasteDescription,
}

impl WineField {
    /// 全フィールド（フォールバック列順）
    pub const ALL: [WineField; 13] = [
        WineField::Id,
        WineField::ReferralId,
        WineField::Name,
        WineField::Producer,
        WineField::OriginCountry,
        WineField::Region,
        WineField::GrapeType,
        WineField::WineType,
        WineField::Harvest,
        WineField::AlcoholLevel,
        WineField::AgingProcess,
        WineField::Harmonization,
        WineField::TasteDescription,
    ];

    /// 正規名（出力JSONのキー）
    pub fn key(&self) -> &'static str {
        match self {
            WineField::Id => "id",
            WineField::ReferralId => "referralId",
            WineField::Name => "name",
            WineField::Producer => "producer",
            WineField::OriginCountry => "originCountry",
            WineField::Region => "region",
            WineField::GrapeType => "grapeType",
            WineField::WineType => "wineType",
            WineField::Harvest => "harvest",
            WineField::AlcoholLevel => "alcoholLevel",
            WineField::AgingProcess => "agingProcess",
            WineField::Harmonization => "harmonization",
            WineField::TasteDescription => "tasteDescription",
        }
    }

    /// ヘッダーが見つからない場合の列位置
    pub fn fallback_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    /// 列名からフィールドを判定
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = clean_text(header).to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key().to_lowercase() == normalized)
    }

    /// 期待するヘッダー名の一覧（カンマ区切り）
    pub fn expected_headers() -> String {
        Self::ALL
            .iter()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for WineField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 列の対応付け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// ヘッダー名で一致した列
    Header(usize),
    /// 固定位置へのフォールバック
    Fallback(usize),
}

impl ColumnSource {
    pub fn index(&self) -> usize {
        match self {
            ColumnSource::Header(i) | ColumnSource::Fallback(i) => *i,
        }
    }
}

/// ヘッダー行から作った列マッピング
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: [Option<usize>; 13],
}

impl HeaderMapping {
    /// ヘッダー行からマッピングを作成
    ///
    /// 未知の列は無視する。同じフィールドに一致する列が複数あれば後の列を採用するが、
    /// 完全に同じ列名の重複は2つ目以降を別名扱いとし、最初の列を残す。
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut mapping = Self::default();
        let mut seen = HashSet::new();
        for (index, header) in headers.iter().enumerate() {
            if !seen.insert(header.as_ref()) {
                continue;
            }
            if let Some(field) = WineField::from_header(header.as_ref()) {
                mapping.columns[field.fallback_index()] = Some(index);
            }
        }
        mapping
    }

    /// ヘッダーなし（すべて固定位置）
    pub fn positional() -> Self {
        Self::default()
    }

    /// フィールドに対応する列
    pub fn source_for(&self, field: WineField) -> ColumnSource {
        match self.columns[field.fallback_index()] {
            Some(index) => ColumnSource::Header(index),
            None => ColumnSource::Fallback(field.fallback_index()),
        }
    }

    /// フィールドに対応する列番号
    pub fn column_for(&self, field: WineField) -> usize {
        self.source_for(field).index()
    }

    /// 行からフィールドのセルを取得（列が足りなければ空文字列）
    pub fn cell<'a, S: AsRef<str>>(&self, row: &'a [S], field: WineField) -> &'a str {
        row.get(self.column_for(field))
            .map(|cell| cell.as_ref())
            .unwrap_or("")
    }

    /// ヘッダーで一致したフィールド数
    pub fn matched_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }
}
