/// urlsコマンド（列挙ドライバ）
///
/// メディアライブラリ内の全動画をページングで列挙し、各動画の
/// メザニン（ソース品質ファイル）のURLを1行ずつ出力ストリームに書き出します。
///
/// ページングは各ページのレスポンスを実際に使用します。元のスクリプトには
/// ページを取得しても最初のレスポンスを使い続けるバグがありましたが、
/// ここでは修正済みの挙動を採用しています（DESIGN.md参照）。
///
/// エラーポリシー: 列挙中のどの失敗も残りの列挙を中断させる。
/// 既に書き出したURLはそのまま残り、リトライも動画単位の隔離も行わない。
use crate::api::client::VodClient;
use crate::commands::result::{CommandResult, UrlsResult};
use crate::config::{APP_CONFIG, Credentials};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// urlsコマンドを実行する
///
/// 環境変数から認証情報を読み込み、全動画のメザニンURLをstdoutに出力します。
///
/// # 戻り値
/// 成功・失敗を示すResult<CommandResult>
///
/// # エラー
/// アプリケーション層としてanyhow::Resultを返し、
/// 設定・認証・インフラ層のエラーを集約します。
pub async fn execute() -> Result<CommandResult> {
    // 環境変数から認証情報を取得
    let credentials = Credentials::from_env()
        .context("Failed to load credentials from the environment")?;

    // APIクライアントを初期化（ネットワークアクセスなし）
    let client = VodClient::production(credentials)
        .context("Failed to create API client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = enumerate_mezzanine_urls(&client, APP_CONFIG.list.page_size, &mut out).await?;

    Ok(CommandResult::Urls(result))
}

/// 全動画のメザニンURLを列挙して書き出す
///
/// 1. GetVideoList の最初のページで総数を知る
/// 2. ページ内の各動画について GetMezzanineInfo を呼び、FileURL を1行書く
/// 3. 総数に達するまで次のページを取得する（空ページでも停止する）
///
/// FileURLはサービスが返した文字列をそのまま書き出す（変換なし）。
///
/// # Arguments
/// * `client` - APIクライアント
/// * `page_size` - GetVideoList の1ページあたりの件数
/// * `out` - URLの出力先
///
/// # 戻り値
/// 総数と出力件数
pub async fn enumerate_mezzanine_urls(
    client: &VodClient,
    page_size: u64,
    out: &mut impl Write,
) -> Result<UrlsResult> {
    let mut page_no: u64 = 1;
    let mut page = client
        .get_video_list(page_no, page_size)
        .await
        .context("Failed to fetch the video list")?;

    let total = page.total;
    tracing::info!(total, "enumerating video library");

    let mut printed: u64 = 0;
    loop {
        // サービスが総数より少ない件数しか返さない場合の停止条件
        if page.video_list.video.is_empty() {
            break;
        }

        for video in &page.video_list.video {
            let info = client
                .get_mezzanine_info(&video.video_id)
                .await
                .with_context(|| {
                    format!("Failed to fetch mezzanine info for video {}", video.video_id)
                })?;

            writeln!(out, "{}", info.mezzanine.file_url)
                .context("Failed to write URL to output")?;
            printed += 1;
        }

        if printed >= total {
            break;
        }

        page_no += 1;
        page = client
            .get_video_list(page_no, page_size)
            .await
            .with_context(|| format!("Failed to fetch video list page {}", page_no))?;
    }

    out.flush().context("Failed to flush output")?;

    tracing::info!(printed, "enumeration finished");
    Ok(UrlsResult { total, printed })
}
