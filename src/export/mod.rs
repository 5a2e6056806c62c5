//! appData.json の出力

use crate::error::Result;
use std::path::{Path, PathBuf};
use wine_converter_common::{to_json, AppData};

/// 出力先パスを決定
///
/// - 未指定: カレントディレクトリ/ファイル名
/// - ディレクトリまたは拡張子なし: そのディレクトリ/ファイル名
/// - それ以外: 指定パスそのまま
pub fn output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        None => PathBuf::from(file_name),
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

/// JSONファイルとして書き出す
pub fn write_app_data(data: &AppData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = to_json(data)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "JSONを書き出し");
    Ok(())
}
