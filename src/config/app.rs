/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。
use serde::Deserialize;
use std::sync::LazyLock;

/// グローバルなアプリケーション設定
///
/// 初回アクセス時に埋め込み config.toml からパースされます。
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// VOD サービスのリージョナルエンドポイント
    pub endpoint: String,

    /// VOD API のバージョン（署名の共通パラメータ Version に使用）
    pub version: String,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// 動画一覧取得の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    /// GetVideoList の1ページあたりの取得件数
    pub page_size: u64,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// デフォルトのログレベル (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    /// これはビルド時設定なので、実行時エラーではなく
    /// ビルド時に直すべき不具合として扱います。
    pub fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        // ビルド時設定が正しく読み込まれることを確認
        let config = AppConfig::load();
        assert_eq!(config.api.endpoint, "https://vod.cn-shanghai.aliyuncs.com");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.list.page_size <= 100);
    }
}
