/// ステータスコマンド
///
/// 現在の認証情報でVOD APIにアクセスできるかを確認します。
use crate::api::client::VodClient;
use crate::commands::result::{CommandResult, StatusResult};
use crate::config::Credentials;
use anyhow::{Context, Result};

/// ステータスコマンドを実行
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute() -> Result<CommandResult> {
    eprintln!("Checking credentials...\n");

    // 環境変数から認証情報を読み込み
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("✗ No credentials found");
            eprintln!("  {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("  {}", hint);
            }

            return Ok(CommandResult::Status(StatusResult {
                is_authenticated: false,
                access_key_id: None,
            }));
        }
    };

    let masked = credentials.masked_access_key_id();

    // 最小のリクエストで認証情報を検証（PageSize=1の一覧取得）
    let client = VodClient::production(credentials)
        .context("Failed to create API client")?;

    match client.get_video_list(1, 1).await {
        Ok(_) => Ok(CommandResult::Status(StatusResult {
            is_authenticated: true,
            access_key_id: Some(masked),
        })),
        Err(e) => {
            eprintln!("✗ Authentication failed");
            eprintln!("  AccessKey ID: {}", masked);
            eprintln!("  Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("\n  {}", hint);
            }

            Ok(CommandResult::Status(StatusResult {
                is_authenticated: false,
                access_key_id: Some(masked),
            }))
        }
    }
}
