//! Shared types for the collaborator seams.

/// Outcome of publishing a note to the hosted table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_getters::Getters)]
pub struct PublishReceipt {
    /// Identifier of the created or updated record, when the service
    /// reports one
    record_id: Option<String>,
    /// Whether a new record was created (false means an existing record
    /// was updated)
    created: bool,
    /// How many image attachments made it onto the record
    attachment_count: usize,
}

impl PublishReceipt {
    /// Build a receipt from the publish outcome.
    pub fn new(record_id: Option<String>, created: bool, attachment_count: usize) -> Self {
        Self {
            record_id,
            created,
            attachment_count,
        }
    }
}
