/// インフラ層のエラー定義
///
/// 外部システム（ネットワーク、VOD API）とのやり取りで発生するエラーを
/// 構造化して定義。VODのエラーコードを保持し、深刻度の判定に使う。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// VOD API がエラーレスポンスを返した
    ///
    /// Code は Aliyun のエラーコード（例: InvalidAccessKeyId.NotFound）
    #[error("API error: {action} - {code}: {message}")]
    Api {
        action: String,
        code: String,
        message: String,
        status_code: u16,
    },

    /// レスポンスボディのデシリアライズ失敗
    ///
    /// フィールド欠落（例: Mezzanine.FileURL なし）もここに分類される
    #[error("malformed response from {action}: {message}")]
    MalformedResponse { action: String, message: String },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },
}

impl InfraError {
    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 認証系のAPIエラーは設定エラー（ユーザーのキーの問題）、
    /// それ以外は外部要因のシステムエラーとして扱う。
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Api { code, .. } if is_credential_error(code) => ErrorSeverity::ConfigError,
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } if is_credential_error(code) => Some(
                "Check that ALIBABA_CLOUD_ACCESS_KEY_ID and ALIBABA_CLOUD_ACCESS_KEY_SECRET \
                 hold a valid key pair for this account.",
            ),
            _ => None,
        }
    }
}

/// エラーコードが認証情報の問題を示すか
fn is_credential_error(code: &str) -> bool {
    code.starts_with("InvalidAccessKeyId")
        || code == "SignatureDoesNotMatch"
        || code == "Forbidden.RAM"
        || code == "MissingAccessKeyId"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_severity() {
        let err = InfraError::Api {
            action: "GetVideoList".to_string(),
            code: "InvalidAccessKeyId.NotFound".to_string(),
            message: "Specified access key is not found.".to_string(),
            status_code: 404,
        };
        assert_eq!(err.severity(), ErrorSeverity::ConfigError);
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_network_error_severity() {
        let err = InfraError::network("connection refused");
        assert_eq!(err.severity(), ErrorSeverity::SystemError);
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = InfraError::Api {
            action: "GetMezzanineInfo".to_string(),
            code: "InvalidVideo.NotFound".to_string(),
            message: "The video does not exist.".to_string(),
            status_code: 404,
        };
        let text = err.to_string();
        assert!(text.contains("GetMezzanineInfo"));
        assert!(text.contains("InvalidVideo.NotFound"));
    }
}
