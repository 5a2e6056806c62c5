//! 固定の参照データ
//!
//! 入力表とは無関係に、毎回同じステーキ4件とおすすめセット3件を出力に含める。

use crate::types::{SommelierSuggestion, Steak};

const STEAK_PRODUCER: &str = "Puro Taglio";
const STEAK_ORIGIN: &str = "Brasil";
const STEAK_BREED: &str = "Angus";

/// (id, 名前, カット)
const STEAK_CUTS: [(i64, &str, &str); 4] = [
    (2009, "Short Rib Angus", "Short Rib"),
    (2026, "Prime Rib Angus", "Prime Rib"),
    (2013, "T-Bone Steak Angus", "T-Bone Steak"),
    (2004, "Flat Iron Angus", "Flat Iron"),
];

/// (名前, ワインID, ステーキID, id)
const SUGGESTIONS: [(&str, i64, i64, &str); 3] = [
    ("Kit Executivo - 10% OFF", 3760245210066, 2009, "executivo"),
    ("Kit Elegante - 15% OFF", 7798145140141, 2026, "elegante"),
    ("Kit Premium - 15% OFF", 8052080990001, 2013, "premium"),
];

/// ステーキ一覧
pub fn steaks() -> Vec<Steak> {
    STEAK_CUTS
        .iter()
        .map(|&(id, name, cut_type)| Steak {
            id,
            name: name.to_string(),
            producer: STEAK_PRODUCER.to_string(),
            cut_type: cut_type.to_string(),
            origin_country: STEAK_ORIGIN.to_string(),
            breed: STEAK_BREED.to_string(),
            taste_description: String::new(),
            price: 0,
            referral_id: id,
        })
        .collect()
}

/// ソムリエのおすすめセット一覧
pub fn sommelier_suggestions() -> Vec<SommelierSuggestion> {
    SUGGESTIONS
        .iter()
        .map(|&(name, wine_id, steak_id, id)| SommelierSuggestion {
            name: name.to_string(),
            wine_id,
            steak_id,
            id: id.to_string(),
        })
        .collect()
}
