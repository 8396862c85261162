/// Config層のエラー定義
///
/// 環境変数からの認証情報読み込みに関するエラーを構造化して定義。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// 認証用の環境変数が未設定
    #[error("environment variable {name} is not set")]
    MissingCredential { name: String },

    /// 環境変数の値がUTF-8として不正
    #[error("environment variable {name} contains invalid UTF-8")]
    InvalidCredential { name: String },
}

impl ConfigError {
    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::ConfigError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingCredential { .. } | Self::InvalidCredential { .. } => Some(
                "Export ALIBABA_CLOUD_ACCESS_KEY_ID and ALIBABA_CLOUD_ACCESS_KEY_SECRET \
                 with a RAM user key that has VOD read permission.",
            ),
        }
    }
}
