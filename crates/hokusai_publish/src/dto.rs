//! Wire types for the bitable open API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub app_id: String,
    pub app_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub tenant_access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<UploadData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadData {
    pub file_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub code: i64,
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub items: Vec<RecordItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordItem {
    pub record_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriteResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<WriteData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteData {
    #[serde(default)]
    pub record: Option<RecordItem>,
}

/// Attachment reference stored in an attachment column cell.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokenRef {
    pub file_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_parses() {
        let raw = r#"{"code": 0, "msg": "ok", "tenant_access_token": "t-abc", "expire": 7200}"#;
        let parsed: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.code, 0);
        assert_eq!(parsed.tenant_access_token.as_deref(), Some("t-abc"));
    }

    #[test]
    fn search_response_with_hit_parses() {
        let raw = r#"{"code": 0, "data": {"items": [{"record_id": "recXYZ", "fields": {}}]}}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let items = parsed.data.unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].record_id, "recXYZ");
    }

    #[test]
    fn empty_search_response_parses() {
        let raw = r#"{"code": 0, "data": {}}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.unwrap().items.is_empty());
    }

    #[test]
    fn create_response_carries_the_new_record_id() {
        let raw = r#"{"code": 0, "msg": "success", "data": {"record": {"record_id": "recNEW"}}}"#;
        let parsed: WriteResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.data.unwrap().record.unwrap().record_id,
            "recNEW"
        );
    }
}
