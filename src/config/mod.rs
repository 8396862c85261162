/// 設定管理モジュール
///
/// このモジュールは2種類の設定を提供します:
/// 1. AppConfig - ビルド時に config.toml から埋め込まれる静的設定（APP_CONFIG）
/// 2. Credentials - 実行時に環境変数から読み込まれるアクセスキー
///
/// # 使用例
///
/// ```rust
/// use crate::config::{APP_CONFIG, Credentials};
///
/// // AppConfig: グローバル定数として直接参照
/// let endpoint = &APP_CONFIG.api.endpoint;
///
/// // Credentials: 環境変数から読み込み
/// let credentials = Credentials::from_env()?;
/// ```
pub mod app;
pub mod credentials;
pub mod error;

pub use app::APP_CONFIG;
pub use credentials::Credentials;
