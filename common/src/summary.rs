//! 変換結果の集計

use crate::types::AppData;
use std::collections::HashSet;

/// データ集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// ワイン数
    pub wines: usize,
    /// 生産国数（空を除く）
    pub countries: usize,
    /// 生産者数（空を除く）
    pub producers: usize,
    /// ステーキ数
    pub steaks: usize,
    /// おすすめセット数
    pub suggestions: usize,
}

impl CatalogSummary {
    pub fn from_app_data(data: &AppData) -> Self {
        let countries: HashSet<&str> = data
            .wine
            .iter()
            .map(|w| w.origin_country.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        let producers: HashSet<&str> = data
            .wine
            .iter()
            .map(|w| w.producer.as_str())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            wines: data.wine.len(),
            countries: countries.len(),
            producers: producers.len(),
            steaks: data.steak.len(),
            suggestions: data.sommelier_suggestions.len(),
        }
    }

    /// 全アイテム数
    pub fn total_items(&self) -> usize {
        self.wines + self.steaks + self.suggestions
    }
}
