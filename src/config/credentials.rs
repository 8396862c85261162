/// アクセスキー認証情報モジュール
///
/// 環境変数 ALIBABA_CLOUD_ACCESS_KEY_ID / ALIBABA_CLOUD_ACCESS_KEY_SECRET から
/// 認証情報を読み込みます。形式の検証は行いません。不正なキーは
/// リクエスト送信時に初めてエラーとして表面化します。
///
/// シークレットは Debug 出力を含め、いかなる出力にも表示してはいけません。
use crate::config::error::ConfigError;
use std::env;
use std::fmt;

/// AccessKey ID の環境変数名
pub const ENV_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";

/// AccessKey Secret の環境変数名
pub const ENV_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";

/// VOD サービスのアクセスキーペア
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    access_key_secret: String,
}

impl Credentials {
    /// 認証情報を作成
    ///
    /// 値の検証は行わない。空文字列でも構築は成功する。
    pub fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
        }
    }

    /// 環境変数から認証情報を読み込む
    ///
    /// # Errors
    /// どちらかの環境変数が未設定、またはUTF-8として不正な場合
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key_id = read_env_var(ENV_ACCESS_KEY_ID)?;
        let access_key_secret = read_env_var(ENV_ACCESS_KEY_SECRET)?;
        Ok(Self::new(access_key_id, access_key_secret))
    }

    /// AccessKey ID を取得（署名パラメータ用）
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// AccessKey Secret を取得（署名鍵の導出専用）
    pub fn access_key_secret(&self) -> &str {
        &self.access_key_secret
    }

    /// AccessKey ID をマスキングして返す（表示用）
    pub fn masked_access_key_id(&self) -> String {
        if self.access_key_id.len() <= 8 {
            "*".repeat(self.access_key_id.len())
        } else {
            format!(
                "{}***{}",
                &self.access_key_id[..4],
                &self.access_key_id[self.access_key_id.len() - 4..]
            )
        }
    }
}

/// Debug でもシークレットを出さない
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.masked_access_key_id())
            .field("access_key_secret", &"***")
            .finish()
    }
}

/// 環境変数を1つ読み込む
fn read_env_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(ConfigError::MissingCredential {
            name: name.to_string(),
        }),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidCredential {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_construct() {
        // 空文字列でも構築は失敗しない（検証はリクエスト時に委ねる）
        let credentials = Credentials::new(String::new(), String::new());
        assert_eq!(credentials.access_key_id(), "");
        assert_eq!(credentials.access_key_secret(), "");
    }

    #[test]
    fn test_masked_access_key_id() {
        let credentials = Credentials::new(
            "LTAI5tAbcdef12345678".to_string(),
            "secret".to_string(),
        );

        let masked = credentials.masked_access_key_id();
        assert!(masked.starts_with("LTAI"));
        assert!(masked.contains("***"));
        assert!(masked.ends_with("5678"));
        assert!(!masked.contains("Abcdef1234"));
    }

    #[test]
    fn test_short_access_key_id_masking() {
        let credentials = Credentials::new("short".to_string(), "secret".to_string());
        assert_eq!(credentials.masked_access_key_id(), "*****");
    }

    #[test]
    fn test_debug_never_reveals_secret() {
        let credentials = Credentials::new(
            "LTAI5tAbcdef12345678".to_string(),
            "top-secret-value".to_string(),
        );

        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("top-secret-value"));
        assert!(!debug.contains("Abcdef1234"));
    }
}
