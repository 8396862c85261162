/// プレゼンテーション層
///
/// コマンド結果とエラーの出力形式（人間向け/機械向け）を担当します。
pub mod output;
