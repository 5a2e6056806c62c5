//! セル値のクリーニングと型変換
//!
//! スプレッドシート由来の表記ゆれ（引用符、余分な空白、改行、"nan"）を正規化し、
//! 収穫年・アルコール度数などの数値を抽出する。
//!
//! 変換に失敗しても例外にはせず、空文字列または `None` を返す。

use regex::Regex;

lazy_static::lazy_static! {
    // 連続する空白（改行を含む）
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    // 単語境界で区切られた4桁の数字（年）
    static ref YEAR_RE: Regex = Regex::new(r"\b([0-9]{4})\b").unwrap();
    // 数字とドットの並び（末尾の%は任意）
    static ref PERCENT_RE: Regex = Regex::new(r"([0-9.]+)%?").unwrap();
}

/// 欠損値として扱う表記（pandas由来の "nan" を含む）
fn is_missing(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("nan")
}

/// 前後の空白と、全体を囲む二重引用符を取り除く
fn strip_wrapping_quotes(raw: &str) -> &str {
    let mut text = raw.trim();
    while text.starts_with('"') && text.ends_with('"') {
        text = if text.len() >= 2 {
            text[1..text.len() - 1].trim()
        } else {
            ""
        };
    }
    text
}

/// テキストを1行に正規化する
///
/// - 全体を囲む引用符を除去
/// - 改行を含む連続空白を半角スペース1つに圧縮
/// - 空・空白のみ・"nan"（大文字小文字問わず）は空文字列
///
/// # Examples
/// ```
/// use wine_converter_common::clean_text;
///
/// assert_eq!(clean_text("  \"Cabernet\n  Sauvignon\"  "), "Cabernet Sauvignon");
/// assert_eq!(clean_text("NaN"), "");
/// ```
pub fn clean_text(raw: &str) -> String {
    let text = strip_wrapping_quotes(raw);
    let cleaned = WHITESPACE_RE.replace_all(text, " ").into_owned();

    if is_missing(&cleaned) {
        String::new()
    } else {
        cleaned
    }
}

/// 改行を保持したままテキストを正規化する（ペアリング欄用）
///
/// CRLF/CRをLFに揃え、各行の前後空白を除去し、空行を取り除く。
pub fn clean_multiline(raw: &str) -> String {
    let text = strip_wrapping_quotes(raw);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let cleaned = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if is_missing(&cleaned) {
        String::new()
    } else {
        cleaned
    }
}

/// 年（またはID）を抽出する
///
/// 最初に現れる4桁の数字を優先し、見つからなければ全体を数値として解釈して
/// 整数部を返す。
///
/// # Examples
/// ```
/// use wine_converter_common::parse_year;
///
/// assert_eq!(parse_year("Harvest: 2018 vintage"), Some(2018));
/// assert_eq!(parse_year("7798145140141"), Some(7798145140141));
/// assert_eq!(parse_year("abc"), None);
/// ```
pub fn parse_year(raw: &str) -> Option<i64> {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(cap) = YEAR_RE.captures(&cleaned) {
        return cap[1].parse().ok();
    }

    parse_integer(&cleaned)
}

/// 数値として解釈し、小数部を切り捨てる
fn parse_integer(text: &str) -> Option<i64> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// パーセント表記を小数に変換する（"13.5%" → 0.135）
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        return None;
    }

    let cap = PERCENT_RE.captures(&cleaned)?;
    let value: f64 = cap[1].parse().ok()?;
    Some(value / 100.0)
}
