mod api;
mod cli;
mod commands;
mod config;
mod error_severity;
mod presentation;

use crate::api::error::InfraError;
use crate::config::APP_CONFIG;
use crate::config::error::ConfigError;
use anyhow::Result;
use std::env;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    // グローバルフラグ --machine を取り除いてからディスパッチする
    let machine_output = args.iter().any(|arg| arg == "--machine");
    let args: Vec<String> = args.into_iter().filter(|arg| arg != "--machine").collect();

    if let Err(e) = run(&args, machine_output).await {
        handle_error(e, machine_output);
    }
}

/// アプリケーションのメイン処理
async fn run(args: &[String], machine_output: bool) -> Result<()> {
    cli::parse_args(args, machine_output).await
}

/// トレーシングを初期化
///
/// RUST_LOG があればそれを使い、なければ埋め込み設定のレベルを使う。
/// ログはすべてstderrに出し、stdoutをURL出力用に空けておく。
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&APP_CONFIG.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    if machine_output {
        presentation::output::output_machine_error(&error, exit_code, hint);
    } else {
        // エラーメッセージのヘッダー
        eprintln!("Error: {}", error);

        // エラーチェーンを辿って詳細を表示
        let chain: Vec<_> = error.chain().skip(1).collect();
        if !chain.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in chain.iter().enumerate() {
                eprintln!("  {}: {}", i + 1, cause);
            }
        }

        // ユーザー向けのヒントを表示
        if let Some(hint) = hint {
            eprintln!("\nHint: {}", hint);
        }
    }

    // 適切な終了コードで終了
    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    // エラーチェーン全体を探索
    for cause in error.chain() {
        // InfraError の場合
        if let Some(infra_err) = cause.downcast_ref::<InfraError>() {
            return infra_err.severity().exit_code();
        }

        // ConfigError の場合
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 不明なエラー（不正なコマンドなど）はユーザーエラー扱い
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<&str> {
    for cause in error.chain() {
        // InfraError からヒントを取得
        if let Some(infra_err) = cause.downcast_ref::<InfraError>() {
            if let Some(hint) = infra_err.hint() {
                return Some(hint);
            }
        }

        // ConfigError からヒントを取得
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            if let Some(hint) = config_err.hint() {
                return Some(hint);
            }
        }
    }

    None
}
