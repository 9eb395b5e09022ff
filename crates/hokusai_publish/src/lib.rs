//! Hosted-table publishing for Hokusai.
//!
//! Pushes a finished note — title, body, tags, and the generated images as
//! attachments — into a Feishu bitable, creating or updating the record
//! keyed by the note id. The pipeline core only sees the
//! [`RecordPublisher`] trait; this crate is the concrete collaborator.
//!
//! [`RecordPublisher`]: hokusai_interface::RecordPublisher

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dto;
mod feishu;

pub use config::{FeishuConfig, FeishuConfigBuilder};
pub use feishu::FeishuClient;
