/// ヘルプコマンド
use crate::commands::result::CommandResult;
use crate::presentation::output;

/// ヘルプコマンドを実行（使用方法を表示）
pub fn execute() -> CommandResult {
    output::print_usage();
    CommandResult::Help
}
