//! Wine Converter Common Library
//!
//! ワインカタログ表の正規化とJSON出力で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod cleaning;
pub mod header;
pub mod catalog;
pub mod converter;
pub mod summary;

pub use types::{AppData, SommelierSuggestion, Steak, Table, Wine};
pub use error::{Error, Result};
pub use cleaning::{clean_multiline, clean_text, parse_percentage, parse_year};
pub use header::{HeaderMapping, WineField};
pub use converter::{build_app_data, convert_row, convert_rows, to_json};
pub use summary::CatalogSummary;
