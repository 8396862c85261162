/// VOD APIクライアント
///
/// VODサービスとの通信を担当するHTTPクライアント。
/// リクエストごとにRPC署名を付加し、タイムアウトとエラーハンドリングを含みます。
/// 構築時にはネットワークアクセスも認証情報の検証も行いません。
use crate::api::auth::RpcSigner;
use crate::api::error::InfraError;
use crate::api::types::{ApiErrorBody, GetMezzanineInfoResponse, GetVideoListResponse};
use crate::config::{APP_CONFIG, Credentials};
use reqwest::{Client, Response};
use std::time::Duration;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, InfraError>;

/// VOD APIクライアント
pub struct VodClient {
    client: Client,
    base_url: String,
    signer: RpcSigner,
}

impl VodClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://vod.cn-shanghai.aliyuncs.com"）
    /// * `credentials` - アクセスキーペア（空でも構築は成功する）
    ///
    /// # Returns
    /// 設定済みのAPIクライアント
    pub fn new(base_url: String, credentials: Credentials) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        let signer = RpcSigner::new(credentials, APP_CONFIG.api.version.clone());

        Ok(Self {
            client,
            base_url,
            signer,
        })
    }

    /// 本番の上海リージョンエンドポイントに向けたクライアントを作成
    pub fn production(credentials: Credentials) -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint.to_string(), credentials)
    }

    /// GetVideoList を呼び出す
    ///
    /// # Arguments
    /// * `page_no` - 取得するページ番号（1始まり）
    /// * `page_size` - 1ページあたりの件数
    pub async fn get_video_list(
        &self,
        page_no: u64,
        page_size: u64,
    ) -> ApiResult<GetVideoListResponse> {
        let params = [
            ("PageNo", page_no.to_string()),
            ("PageSize", page_size.to_string()),
        ];
        self.request("GetVideoList", &params).await
    }

    /// GetMezzanineInfo を呼び出す
    ///
    /// # Arguments
    /// * `video_id` - 動画ID
    pub async fn get_mezzanine_info(
        &self,
        video_id: &str,
    ) -> ApiResult<GetMezzanineInfoResponse> {
        let params = [("VideoId", video_id.to_string())];
        self.request("GetMezzanineInfo", &params).await
    }

    /// 署名付きGETリクエストを送信し、レスポンスをデシリアライズする
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let query = self.signer.signed_query(action, params);
        let url = format!("{}/?{}", self.base_url, query);

        tracing::debug!(action, "sending VOD API request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                InfraError::Timeout {
                    operation: format!("GET {}", action),
                }
            } else if e.is_connect() {
                InfraError::network(format!("Connection failed for {}: {}", action, e))
            } else {
                InfraError::network(format!("Request failed for {}: {}", action, e))
            }
        })?;

        let response = Self::check_response(response, action).await?;
        Self::parse_json(response, action).await
    }

    /// レスポンスのステータスをチェックし、APIエラーを構造化する
    async fn check_response(response: Response, action: &str) -> ApiResult<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        // VODのエラーボディは { "Code": ..., "Message": ..., "RequestId": ... }
        let error = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => {
                // RequestId はサポート問い合わせに必要なのでメッセージに残す
                let message = match parsed.request_id {
                    Some(request_id) => format!("{} (RequestId: {})", parsed.message, request_id),
                    None => parsed.message,
                };
                InfraError::Api {
                    action: action.to_string(),
                    code: parsed.code,
                    message,
                    status_code,
                }
            }
            Err(_) => InfraError::Api {
                action: action.to_string(),
                code: format!("HTTP{}", status_code),
                message: body,
                status_code,
            },
        };

        Err(error)
    }

    /// JSONレスポンスをデシリアライズ
    ///
    /// 必須フィールドの欠落はここで MalformedResponse として表面化する
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
        action: &str,
    ) -> ApiResult<T> {
        response.json().await.map_err(|e| InfraError::MalformedResponse {
            action: action.to_string(),
            message: e.to_string(),
        })
    }
}
