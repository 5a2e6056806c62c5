use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データ行がありません: {0}")]
    EmptyInput(String),

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] wine_converter_common::Error),
}

impl ConverterError {
    /// 入力ファイル起因のエラーか（ヘッダー案内を表示する対象）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConverterError::Csv(_)
                | ConverterError::Workbook(_)
                | ConverterError::EmptyInput(_)
                | ConverterError::FileNotFound(_)
        )
    }
}

impl From<calamine::Error> for ConverterError {
    fn from(err: calamine::Error) -> Self {
        ConverterError::Workbook(err.to_string())
    }
}

impl From<dialoguer::Error> for ConverterError {
    fn from(err: dialoguer::Error) -> Self {
        ConverterError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
