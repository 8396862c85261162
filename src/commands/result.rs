/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層（main.rs/cli.rs）で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Urls(UrlsResult),
    Status(StatusResult),
    Help,
}

/// urlsコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UrlsResult {
    /// ライブラリが報告した動画の総数
    pub total: u64,

    /// 実際にURLを出力した件数
    pub printed: u64,
}

/// statusコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// 認証が通っているか
    pub is_authenticated: bool,

    /// マスキングされたAccessKey ID（認証情報がある場合）
    pub access_key_id: Option<String>,
}

impl CommandResult {
    /// 成功メッセージを取得（人間向け出力用）
    pub fn success_message(&self) -> String {
        match self {
            CommandResult::Urls(r) => {
                format!("Printed {} of {} mezzanine URLs.", r.printed, r.total)
            }
            CommandResult::Status(r) => {
                if r.is_authenticated {
                    "Authenticated".to_string()
                } else {
                    "Not authenticated".to_string()
                }
            }
            CommandResult::Help => "".to_string(),
        }
    }
}
