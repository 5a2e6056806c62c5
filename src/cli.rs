use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wine-converter")]
#[command(about = "ワインカタログCSVをappData.jsonに変換するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSV/ExcelをJSONに変換
    Convert {
        /// 入力ファイル（CSV/xlsx/xls/ods）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 設定の出力ファイル名）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 1行目をヘッダーとして扱わない（全列を位置で対応付け）
        #[arg(long)]
        no_headers: bool,

        /// 既存ファイルを確認なしで上書き
        #[arg(short, long)]
        force: bool,

        /// ファイルに書かず標準出力に出力
        #[arg(long, conflicts_with_all = ["output", "force"])]
        stdout: bool,
    },

    /// 入力内容と列の対応付けをプレビュー
    Preview {
        /// 入力ファイル（CSV/xlsx/xls/ods）
        #[arg(required = true)]
        input: PathBuf,

        /// 表示する行数（デフォルト: 設定値）
        #[arg(short = 'n', long)]
        rows: Option<usize>,

        /// 1行目をヘッダーとして扱わない
        #[arg(long)]
        no_headers: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 出力ファイル名を設定
        #[arg(long)]
        set_output: Option<String>,

        /// プレビュー行数を設定
        #[arg(long)]
        set_preview_rows: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
