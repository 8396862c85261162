use crate::commands;
use crate::presentation::output;
use anyhow::{Context, Result, bail};

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// # Arguments
/// * `args` - `--machine` フラグを取り除いた後の引数（argv[0]を含む）
/// * `machine_output` - 機械可読出力フラグ
pub async fn parse_args(args: &[String], machine_output: bool) -> Result<()> {
    if args.len() < 2 {
        output::print_usage();
        return Ok(());
    }

    let command = &args[1];

    let result = match command.as_str() {
        "urls" => commands::urls::execute()
            .await
            .context("Urls command failed")?,
        "status" => commands::status::execute()
            .await
            .context("Status command failed")?,
        "help" => commands::help::execute(),
        _ => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            command
        ),
    };

    output::output_result(&result, machine_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_command_is_rejected() {
        let args = vec!["vodmezz".to_string(), "frobnicate".to_string()];
        let error = parse_args(&args, false)
            .await
            .expect_err("unknown command should fail");
        assert!(error.to_string().contains("frobnicate"));
    }

    #[tokio::test]
    async fn test_no_arguments_prints_usage() {
        let args = vec!["vodmezz".to_string()];
        assert!(parse_args(&args, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_help_command_succeeds() {
        let args = vec!["vodmezz".to_string(), "help".to_string()];
        assert!(parse_args(&args, false).await.is_ok());
    }
}
