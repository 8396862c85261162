// VOD API client module
//
// This module handles all API communication with the cloud VOD service:
// - RPC request signing (HMAC-SHA1, Signature Version 1.0)
// - GetVideoList / GetMezzanineInfo calls
// - Typed response deserialization

pub mod auth;
pub mod client;
pub mod error;
pub mod types;
