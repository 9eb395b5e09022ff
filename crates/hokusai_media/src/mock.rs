//! Deterministic generator for tests and dry runs.

use async_trait::async_trait;
use hokusai_core::PromptRecord;
use hokusai_error::HokusaiResult;
use hokusai_interface::ImageGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// PNG signature, enough for collaborators that sniff file types.
const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// An [`ImageGenerator`] that returns fixed bytes without any I/O.
#[derive(Debug)]
pub struct MockGenerator {
    bytes: Vec<u8>,
    calls: AtomicUsize,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(PNG_MAGIC.to_vec())
    }
}

impl MockGenerator {
    /// Create a mock returning the given bytes for every prompt.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many prompts have been rendered.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for MockGenerator {
    async fn generate(&self, _record: &PromptRecord) -> HokusaiResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bytes.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image-v1"
    }
}
