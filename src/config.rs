use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 出力ファイル名を上書きする環境変数
pub const OUTPUT_ENV: &str = "WINE_CONVERTER_OUTPUT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_file_name: String,
    pub preview_rows: usize,
    pub sample_wines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file_name: "appData.json".into(),
            preview_rows: 10,
            sample_wines: 2,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        if config.output_file_name.trim().is_empty() {
            return Err(ConverterError::Config("出力ファイル名が空です".into()));
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConverterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("wine-converter").join("config.json"))
    }

    /// 出力ファイル名（環境変数を優先）
    pub fn output_file_name(&self) -> String {
        match std::env::var(OUTPUT_ENV) {
            Ok(name) if !name.trim().is_empty() => name,
            _ => self.output_file_name.clone(),
        }
    }

    pub fn set_output_file_name(&mut self, name: String) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ConverterError::Config("出力ファイル名が空です".into()));
        }
        self.output_file_name = name;
        self.save()
    }

    pub fn set_preview_rows(&mut self, rows: usize) -> Result<()> {
        self.preview_rows = rows;
        self.save()
    }
}
