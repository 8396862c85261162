/// RPC署名モジュール
///
/// VOD APIのRPCスタイル署名（Signature Version 1.0）を実装します。
/// 共通パラメータとアクション固有パラメータをソートして正規化クエリを作り、
/// `GET&%2F&<エンコード済みクエリ>` を HMAC-SHA1 で署名して
/// Base64 エンコードした値を Signature パラメータとして付加します。
///
/// タイムスタンプとノンスを固定すれば決定的なので、単体テストできます。
use crate::config::Credentials;
use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;
use std::collections::BTreeMap;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

/// RPC署名用のエンコードセット
///
/// RFC 3986 の unreserved 文字（A-Z a-z 0-9 - _ . ~）以外をすべて
/// パーセントエンコードする。スペースは `+` ではなく `%20` になる。
const RPC_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// RPC署名器
///
/// アクセスキーとAPIバージョンを保持し、署名済みクエリ文字列を生成する。
pub struct RpcSigner {
    credentials: Credentials,
    version: String,
}

impl RpcSigner {
    /// 新しい署名器を作成
    ///
    /// # Arguments
    /// * `credentials` - アクセスキーペア（検証はしない）
    /// * `version` - API バージョン（例: "2017-03-21"）
    pub fn new(credentials: Credentials, version: String) -> Self {
        Self {
            credentials,
            version,
        }
    }

    /// 現在時刻と新規ノンスで署名済みクエリを生成
    ///
    /// # Arguments
    /// * `action` - API アクション名（例: "GetVideoList"）
    /// * `params` - アクション固有パラメータ
    pub fn signed_query(&self, action: &str, params: &[(&str, String)]) -> String {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = Uuid::new_v4().to_string();
        self.signed_query_at(action, params, &timestamp, &nonce)
    }

    /// タイムスタンプとノンスを指定して署名済みクエリを生成
    ///
    /// 入力が同じなら出力も同じになる（テスト用の決定的エントリポイント）。
    pub fn signed_query_at(
        &self,
        action: &str,
        params: &[(&str, String)],
        timestamp: &str,
        nonce: &str,
    ) -> String {
        // BTreeMap で辞書順ソートを保証する
        let mut all_params: BTreeMap<&str, &str> = BTreeMap::new();
        all_params.insert("Action", action);
        all_params.insert("Format", "JSON");
        all_params.insert("Version", &self.version);
        all_params.insert("AccessKeyId", self.credentials.access_key_id());
        all_params.insert("SignatureMethod", "HMAC-SHA1");
        all_params.insert("SignatureVersion", "1.0");
        all_params.insert("SignatureNonce", nonce);
        all_params.insert("Timestamp", timestamp);
        for (key, value) in params {
            all_params.insert(*key, value.as_str());
        }

        let canonical_query = canonicalize(&all_params);
        let signature = self.sign(&canonical_query);

        format!("{}&Signature={}", canonical_query, rpc_encode(&signature))
    }

    /// 正規化クエリから署名値を計算
    fn sign(&self, canonical_query: &str) -> String {
        let string_to_sign = format!("GET&{}&{}", rpc_encode("/"), rpc_encode(canonical_query));

        // 署名鍵はシークレットに "&" を連結したもの。HMACの鍵長制限はない
        let key = format!("{}&", self.credentials.access_key_secret());
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .expect("HMAC-SHA1 accepts keys of any length");
        mac.update(string_to_sign.as_bytes());

        general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

/// ソート済みパラメータを `key=value&...` 形式の正規化クエリにする
fn canonicalize(params: &BTreeMap<&str, &str>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", rpc_encode(key), rpc_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// RPC署名規約でパーセントエンコードする
fn rpc_encode(value: &str) -> String {
    utf8_percent_encode(value, RPC_ENCODE_SET).to_string()
}
