/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
///
/// stdoutはURLの行とJSON専用、診断メッセージはすべてstderrに送られます。
use crate::commands::result::CommandResult;
use anyhow::Result;
use serde::Serialize;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "vodmezz
List the mezzanine (source file) URLs of every video in an
Alibaba Cloud VOD media library, one URL per line on stdout.

Usage:
  vodmezz [--machine] <command>

Environment:
  ALIBABA_CLOUD_ACCESS_KEY_ID       - RAM access key id
  ALIBABA_CLOUD_ACCESS_KEY_SECRET   - RAM access key secret

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  urls             - Print the mezzanine file URL of every video
                     (stdout: one URL per line; diagnostics on stderr)
  status           - Check whether the configured credentials work
  help             - Display this help message

Error Output:
  Normal mode:   Human-readable error messages to stderr
  --machine:     JSON error object with exit_code and hint fields";

/// 機械可読エラー出力のボディ
#[derive(Debug, Serialize)]
struct MachineError<'a> {
    error: String,
    exit_code: i32,
    hint: Option<&'a str>,
}

/// コマンド使用方法を表示する
///
/// CLI引数が不正な場合や、ヘルプが必要な場合に呼び出されます。
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
///
/// # Output
/// * `machine_output = false`: 人間向けのメッセージ（stderr）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        output_machine_readable(result)?;
    } else {
        output_human_readable(result);
    }

    Ok(())
}

/// 人間向けのメッセージを出力（stderr）
///
/// urlsコマンドのURL行は列挙中に直接stdoutへ書かれているため、
/// ここではまとめのメッセージだけを出す。
fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Urls(_) => {
            eprintln!();
            eprintln!("{}", result.success_message());
        }
        CommandResult::Status(r) => {
            eprintln!();
            if r.is_authenticated {
                eprintln!("Authenticated");
                if let Some(access_key_id) = &r.access_key_id {
                    eprintln!("AccessKey ID: {}", access_key_id);
                }
                eprintln!();
                eprintln!("Your credentials are valid and working.");
            } else if let Some(access_key_id) = &r.access_key_id {
                // 認証情報はあるが検証失敗
                eprintln!("Not authenticated");
                eprintln!("AccessKey ID: {}", access_key_id);
            } else {
                // 認証情報が存在しない
                eprintln!("Not authenticated");
                eprintln!("No credentials found in the environment.");
            }
        }
        CommandResult::Help => {}
    }
}

/// 機械可読JSONを出力（stdout）
fn output_machine_readable(result: &CommandResult) -> Result<()> {
    let json = serde_json::to_string(result)?;
    println!("{}", json);
    Ok(())
}

/// エラーを機械可読JSONで出力（stdout）
///
/// # Arguments
/// * `error` - 発生したエラー（チェーンは':'区切りで展開される）
/// * `exit_code` - 決定済みの終了コード
/// * `hint` - ユーザー向けヒント（あれば）
pub fn output_machine_error(error: &anyhow::Error, exit_code: i32, hint: Option<&str>) {
    let body = MachineError {
        error: format!("{:#}", error),
        exit_code,
        hint,
    };

    // エラー出力のシリアライズ失敗時は素のメッセージで代替する
    match serde_json::to_string(&body) {
        Ok(json) => println!("{}", json),
        Err(_) => println!(r#"{{"error":"{}","exit_code":{}}}"#, body.error, exit_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::result::UrlsResult;

    #[test]
    fn test_help_text_lists_commands() {
        assert!(HELP_TEXT.contains("urls"));
        assert!(HELP_TEXT.contains("status"));
        assert!(HELP_TEXT.contains("help"));
        assert!(HELP_TEXT.contains("ALIBABA_CLOUD_ACCESS_KEY_ID"));
    }

    #[test]
    fn test_output_result_does_not_fail() {
        let result = CommandResult::Urls(UrlsResult {
            total: 1,
            printed: 1,
        });
        assert!(output_result(&result, false).is_ok());
        assert!(output_result(&result, true).is_ok());
    }
}
