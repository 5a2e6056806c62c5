use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wine_converter::{cli, config, error, export, pipeline, preview, reader};
use wine_converter_common::{to_json, CatalogSummary, WineField};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ ファイル処理エラー: {}", e);
        if e.is_input_error() {
            eprintln!(
                "ℹ CSVのヘッダーが正しいか確認してください: {}",
                WineField::expected_headers()
            );
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 既存ファイルの上書き確認
fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("{} は既に存在します。上書きしますか?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { input, output, no_headers, force, stdout } => {
            let has_headers = !no_headers;

            if stdout {
                let conversion = pipeline::convert_file(&input, has_headers)?;
                println!("{}", to_json(&conversion.data)?);
                return Ok(());
            }

            println!("🍷 wine-converter - JSON変換\n");

            // 1. 読み込み
            println!("[1/3] ファイルを読み込み中...");
            let pb = spinner(&format!("{} を読み込み中...", input.display()));
            let table = reader::read_table(&input, has_headers);
            pb.finish_and_clear();
            let table = table?;
            println!("✔ {}行を検出\n", table.len());

            // 2. 変換
            println!("[2/3] JSONに変換中...");
            let conversion = pipeline::convert_table(&table, has_headers);

            let data = &conversion.data;
            println!("✔ {}件のワインを変換", data.wine.len());
            println!(
                "✔ ステーキ{}件・おすすめセット{}件を追加\n",
                data.steak.len(),
                data.sommelier_suggestions.len()
            );

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            let output_path = export::output_path(output.as_deref(), &config.output_file_name());
            if !confirm_overwrite(&output_path, force)? {
                println!("- 保存を中止しました");
                return Ok(());
            }
            export::write_app_data(data, &output_path)?;
            println!("✔ 結果を保存: {}", output_path.display());

            let summary = CatalogSummary::from_app_data(data);
            println!("\n📊 データ概要");
            println!("  ワイン: {}件", summary.wines);
            println!("  生産国: {}", summary.countries);
            println!("  生産者: {}", summary.producers);
            println!("  全アイテム: {}件", summary.total_items());

            println!("\n✅ 変換完了");
        }

        Commands::Preview { input, rows, no_headers } => {
            let has_headers = !no_headers;
            println!("📋 wine-converter - プレビュー\n");

            let table = reader::read_table(&input, has_headers)?;
            println!("✔ {}行を検出\n", table.len());

            let conversion = pipeline::convert_table(&table, has_headers);
            println!("列の対応付け:");
            println!("{}\n", preview::format_mapping(&conversion.mapping, &table.headers));

            let rows = rows.unwrap_or(config.preview_rows);
            println!("先頭{}行:", rows.min(table.len()));
            println!("{}\n", preview::format_table(&table, rows));

            println!("変換サンプル:");
            println!("{}", preview::sample_json(&conversion.data, config.sample_wines)?);

            if conversion.data.wine.len() < conversion.input_rows {
                println!(
                    "\n⚠ 名前・IDがない{}行は出力されません",
                    conversion.input_rows - conversion.data.wine.len()
                );
            }
        }

        Commands::Config { set_output, set_preview_rows, show } => {
            let mut config = config;

            if let Some(name) = set_output {
                config.set_output_file_name(name)?;
                println!("✔ 出力ファイル名を設定しました");
            }

            if let Some(rows) = set_preview_rows {
                config.set_preview_rows(rows)?;
                println!("✔ プレビュー行数を設定しました");
            }

            if show {
                println!("設定:");
                println!("  出力ファイル名: {}", config.output_file_name());
                println!("  プレビュー行数: {}", config.preview_rows);
                println!("  サンプル件数: {}", config.sample_wines);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
