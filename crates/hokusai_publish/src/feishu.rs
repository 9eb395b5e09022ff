//! Feishu bitable client.

use crate::dto::{
    FileTokenRef, SearchResponse, TokenRequest, TokenResponse, UploadResponse, WriteResponse,
};
use crate::FeishuConfig;
use async_trait::async_trait;
use hokusai_core::ExtractedNote;
use hokusai_error::{HokusaiResult, PublishError, PublishErrorKind};
use hokusai_interface::{PublishReceipt, RecordPublisher};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Table column keyed by the note id; record lookup filters on it.
const FIELD_NOTE_ID: &str = "Note ID";
const FIELD_TITLE: &str = "Title";
const FIELD_BODY: &str = "Content";
const FIELD_TAGS: &str = "Topics";
const FIELD_ATTACHMENTS: &str = "Generated Images";
const FIELD_IMAGE_SUMMARY: &str = "Image Summary";

/// Client for the Feishu bitable open API.
///
/// Publishing a note authenticates as the tenant application, uploads the
/// generated images as bitable attachments, then creates or updates the
/// record whose note-id column matches.
#[derive(Debug, Clone)]
pub struct FeishuClient {
    client: Client,
    config: FeishuConfig,
}

impl FeishuClient {
    /// Create a client over a configuration.
    pub fn new(config: FeishuConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client from the `FEISHU_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> HokusaiResult<Self> {
        Ok(Self::new(FeishuConfig::from_env()?))
    }

    /// Obtain a tenant access token.
    #[instrument(skip(self))]
    async fn tenant_access_token(&self) -> HokusaiResult<String> {
        let url = format!(
            "{}/open-apis/auth/v3/tenant_access_token/internal",
            self.config.base_url()
        );
        let payload = TokenRequest {
            app_id: self.config.app_id().clone(),
            app_secret: self.config.app_secret().clone(),
        };

        let response: TokenResponse = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Auth(e.to_string())))?;

        if response.code != 0 {
            return Err(PublishError::new(PublishErrorKind::Auth(format!(
                "code {}: {}",
                response.code, response.msg
            ))))?;
        }
        response.tenant_access_token.ok_or_else(|| {
            PublishError::new(PublishErrorKind::Auth("no token in response".to_string())).into()
        })
    }

    /// Upload one image file as a bitable attachment.
    #[instrument(skip(self, token), fields(path = %path.display()))]
    async fn upload_image(&self, token: &str, path: &Path) -> HokusaiResult<FileTokenRef> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("attachment.png")
            .to_string();
        let bytes = std::fs::read(path)
            .map_err(|e| PublishError::new(PublishErrorKind::UploadFailed(e.to_string())))?;
        let size = bytes.len();

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name.clone()),
            )
            .text("file_name", file_name.clone())
            .text("parent_type", "bitable_image")
            .text("parent_node", self.config.app_token().clone())
            .text("size", size.to_string());

        let url = format!(
            "{}/open-apis/drive/v1/medias/upload_all",
            self.config.base_url()
        );
        let response: UploadResponse = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::UploadFailed(e.to_string())))?;

        if response.code != 0 {
            return Err(PublishError::new(PublishErrorKind::UploadFailed(format!(
                "{}: code {}: {}",
                file_name, response.code, response.msg
            ))))?;
        }
        let data = response.data.ok_or_else(|| {
            PublishError::new(PublishErrorKind::UploadFailed(format!(
                "{}: no file token in response",
                file_name
            )))
        })?;

        debug!(file = %file_name, "Uploaded attachment");
        Ok(FileTokenRef {
            file_token: data.file_token,
        })
    }

    /// Find an existing record for the note, if any.
    #[instrument(skip(self, token))]
    async fn find_record(&self, token: &str, note_id: &str) -> HokusaiResult<Option<String>> {
        let url = format!(
            "{}/open-apis/bitable/v1/apps/{}/tables/{}/records/search",
            self.config.base_url(),
            self.config.app_token(),
            self.config.table_id()
        );
        let payload = serde_json::json!({
            "filter": {
                "conjunction": "and",
                "conditions": [{
                    "field_name": FIELD_NOTE_ID,
                    "operator": "is",
                    "value": [note_id],
                }],
            },
        });

        let response: SearchResponse = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;

        Ok(response
            .data
            .unwrap_or_default()
            .items
            .into_iter()
            .next()
            .map(|item| item.record_id))
    }

    async fn write_record(
        &self,
        token: &str,
        existing: Option<&str>,
        fields: serde_json::Value,
    ) -> HokusaiResult<WriteResponse> {
        let records_url = format!(
            "{}/open-apis/bitable/v1/apps/{}/tables/{}/records",
            self.config.base_url(),
            self.config.app_token(),
            self.config.table_id()
        );
        let payload = serde_json::json!({ "fields": fields });

        let request = match existing {
            Some(record_id) => self.client.put(format!("{}/{}", records_url, record_id)),
            None => self.client.post(&records_url),
        };

        request
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())).into())
    }
}

fn record_fields(note: &ExtractedNote, attachments: &[FileTokenRef]) -> serde_json::Value {
    serde_json::json!({
        FIELD_NOTE_ID: note.id().as_str(),
        FIELD_TITLE: note.title(),
        FIELD_BODY: note.body(),
        FIELD_TAGS: note.tags(),
        FIELD_ATTACHMENTS: attachments,
        FIELD_IMAGE_SUMMARY: format!("Uploaded {} images as attachments", attachments.len()),
    })
}

#[async_trait]
impl RecordPublisher for FeishuClient {
    #[instrument(skip(self, note, images), fields(note = %note.id(), images = images.len()))]
    async fn publish(
        &self,
        note: &ExtractedNote,
        images: &[PathBuf],
    ) -> HokusaiResult<PublishReceipt> {
        let token = self.tenant_access_token().await?;

        let mut attachments = Vec::with_capacity(images.len());
        for image in images {
            match self.upload_image(&token, image).await {
                Ok(reference) => attachments.push(reference),
                Err(e) => {
                    warn!(image = %image.display(), error = %e, "Attachment upload failed, skipping");
                }
            }
        }

        let existing = self.find_record(&token, note.id().as_str()).await?;
        let updating = existing.is_some();
        let fields = record_fields(note, &attachments);
        let response = self.write_record(&token, existing.as_deref(), fields).await?;

        if response.code != 0 {
            return Err(PublishError::new(PublishErrorKind::Api {
                code: response.code,
                message: response.msg,
            }))?;
        }

        let record_id = response.data.and_then(|data| data.record.map(|r| r.record_id));
        info!(
            note = %note.id(),
            updated = updating,
            attachments = attachments.len(),
            "Published note record"
        );
        Ok(PublishReceipt::new(
            record_id,
            !updating,
            attachments.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hokusai_core::{NoteId, PageCaption};

    #[test]
    fn record_fields_carry_every_column() {
        let id: NoteId = "001".parse().unwrap();
        let note = ExtractedNote::new(
            id,
            "Exam Tips",
            "Three habits.",
            vec!["exam".to_string(), "study".to_string()],
            vec![PageCaption::new("1", "Cover with title")],
        );
        let attachments = vec![FileTokenRef {
            file_token: "tokA".to_string(),
        }];

        let fields = record_fields(&note, &attachments);
        assert_eq!(fields[FIELD_NOTE_ID], "001");
        assert_eq!(fields[FIELD_TITLE], "Exam Tips");
        assert_eq!(fields[FIELD_BODY], "Three habits.");
        assert_eq!(fields[FIELD_TAGS][1], "study");
        assert_eq!(fields[FIELD_ATTACHMENTS][0]["file_token"], "tokA");
        assert!(fields[FIELD_IMAGE_SUMMARY]
            .as_str()
            .unwrap()
            .contains("1 images"));
    }

    #[test]
    fn record_fields_with_no_attachments_still_write_text() {
        let id: NoteId = "002".parse().unwrap();
        let note = ExtractedNote::new(id, "Bare", "", vec![], vec![]);

        let fields = record_fields(&note, &[]);
        assert_eq!(fields[FIELD_NOTE_ID], "002");
        assert_eq!(fields[FIELD_ATTACHMENTS].as_array().unwrap().len(), 0);
    }
}
