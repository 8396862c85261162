//! プレゼンテーション層が使用するエラー深刻度
//!
//! 終了コードの決定に使用される、全レイヤー共通の最も抽象的なエラー分類。
//! 内側層（api, config）はこのモジュールに依存してよいが、
//! このモジュールは他のモジュールに依存しない。

use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// 不明なコマンド、不正な引数など、ユーザーが直せるもの。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// アクセスキーの環境変数が未設定、認証情報が無効など、
    /// 実行環境の設定に問題があるもの。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ネットワーク障害、VODサービス側のエラーなど、外部要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
