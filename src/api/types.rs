/// API通信用の型定義
///
/// VOD APIのレスポンスをデシリアライズするための構造体を定義します。
/// フィールド名はワイヤーフォーマット（PascalCase）に合わせます。
/// 必須フィールド（Total, VideoId, FileURL）が欠けたレスポンスは
/// デシリアライズエラーになり、暗黙のnullにはなりません。
use serde::Deserialize;

/// GetVideoList のレスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetVideoListResponse {
    /// リクエストID（トラブルシュート用）
    pub request_id: Option<String>,

    /// メディアライブラリ内の動画の総数
    pub total: u64,

    /// このページの動画一覧
    #[serde(default)]
    pub video_list: VideoList,
}

/// 動画サマリのリストを包むラッパー
///
/// ワイヤー上は { "VideoList": { "Video": [...] } } の二重構造
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoList {
    #[serde(default)]
    pub video: Vec<VideoSummary>,
}

/// 動画1件のサマリ
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoSummary {
    /// 動画ID（GetMezzanineInfo の引数になる）
    pub video_id: String,

    /// タイトル
    pub title: Option<String>,

    /// ステータス（Normal, Transcoding など）
    pub status: Option<String>,

    /// 再生時間（秒）
    pub duration: Option<f64>,

    /// アップロード日時
    pub creation_time: Option<String>,
}

/// GetMezzanineInfo のレスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMezzanineInfoResponse {
    /// リクエストID（トラブルシュート用）
    pub request_id: Option<String>,

    /// メザニン（ソース品質ファイル）のメタデータ
    pub mezzanine: Mezzanine,
}

/// メザニンファイルのメタデータ
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mezzanine {
    /// ソースファイルのURL。サービスが返した文字列をそのまま保持する
    #[serde(rename = "FileURL")]
    pub file_url: String,

    /// 元ファイル名
    pub file_name: Option<String>,

    /// ファイルサイズ（bytes）
    pub size: Option<u64>,

    /// 再生時間（秒、文字列表現）
    pub duration: Option<String>,

    /// メザニンのステータス
    pub status: Option<String>,

    /// 対応する動画ID
    pub video_id: Option<String>,
}

/// VOD API のエラーレスポンスボディ
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_list_deserialization() {
        let json = r#"{
            "RequestId": "25818875-5F78-4A13-BEF6-D7393642CA58",
            "Total": 2,
            "VideoList": {
                "Video": [
                    {
                        "VideoId": "93ab850b4f6f44eab54b6e91d24d81d4",
                        "Title": "holiday.mp4",
                        "Status": "Normal",
                        "Duration": 12.4,
                        "CreationTime": "2023-11-14T09:15:50Z"
                    },
                    {
                        "VideoId": "f45cf4eba5c8458d9e7f5b2c9d3a1e02",
                        "Title": "intro.mov"
                    }
                ]
            }
        }"#;

        let response: GetVideoListResponse =
            serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(
            response.request_id.as_deref(),
            Some("25818875-5F78-4A13-BEF6-D7393642CA58")
        );
        assert_eq!(response.total, 2);
        assert_eq!(response.video_list.video.len(), 2);

        let first = &response.video_list.video[0];
        assert_eq!(first.video_id, "93ab850b4f6f44eab54b6e91d24d81d4");
        assert_eq!(first.status.as_deref(), Some("Normal"));
        assert_eq!(first.duration, Some(12.4));
        assert_eq!(first.creation_time.as_deref(), Some("2023-11-14T09:15:50Z"));

        let second = &response.video_list.video[1];
        assert_eq!(second.title.as_deref(), Some("intro.mov"));
        assert!(second.status.is_none());
    }

    #[test]
    fn test_empty_library_omits_video_list() {
        // 空のライブラリでは VideoList が省略されることがある
        let json = r#"{ "RequestId": "abc", "Total": 0 }"#;

        let response: GetVideoListResponse =
            serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(response.total, 0);
        assert!(response.video_list.video.is_empty());
    }

    #[test]
    fn test_missing_total_is_an_error() {
        let json = r#"{ "RequestId": "abc" }"#;
        let result: Result<GetVideoListResponse, _> = serde_json::from_str(json);
        let err = result.expect_err("Total is required");
        assert!(err.to_string().contains("Total"));
    }

    #[test]
    fn test_mezzanine_deserialization_preserves_url() {
        // FileURL はそのまま保持される（トリムもデコードもしない）
        let json = r#"{
            "RequestId": "def",
            "Mezzanine": {
                "FileURL": "https://outin-xxx.oss-cn-shanghai.aliyuncs.com/a%20b.mp4?Expires=1700000000&Signature=x%2By ",
                "FileName": "a b.mp4",
                "Size": 10485760,
                "Duration": "12.4000",
                "Status": "Normal",
                "VideoId": "93ab850b4f6f44eab54b6e91d24d81d4"
            }
        }"#;

        let response: GetMezzanineInfoResponse =
            serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(
            response.mezzanine.file_url,
            "https://outin-xxx.oss-cn-shanghai.aliyuncs.com/a%20b.mp4?Expires=1700000000&Signature=x%2By "
        );
        assert_eq!(response.mezzanine.file_name.as_deref(), Some("a b.mp4"));
        assert_eq!(response.mezzanine.size, Some(10485760));
        assert_eq!(response.mezzanine.duration.as_deref(), Some("12.4000"));
        assert_eq!(response.mezzanine.status.as_deref(), Some("Normal"));
        assert_eq!(
            response.mezzanine.video_id.as_deref(),
            Some("93ab850b4f6f44eab54b6e91d24d81d4")
        );
    }

    #[test]
    fn test_missing_file_url_is_an_error() {
        let json = r#"{ "Mezzanine": { "FileName": "a.mp4" } }"#;
        let result: Result<GetMezzanineInfoResponse, _> = serde_json::from_str(json);
        let err = result.expect_err("FileURL is required");
        assert!(err.to_string().contains("FileURL"));
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{
            "Code": "InvalidAccessKeyId.NotFound",
            "Message": "Specified access key is not found.",
            "RequestId": "ghi"
        }"#;

        let body: ApiErrorBody = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(body.code, "InvalidAccessKeyId.NotFound");
        assert_eq!(body.request_id.as_deref(), Some("ghi"));
    }
}
