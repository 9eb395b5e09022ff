//! Backend selection.

use crate::{AllApiClient, ReplicateClient};
use hokusai_error::HokusaiResult;
use hokusai_interface::ImageGenerator;

/// Which image-generation provider to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BackendKind {
    /// AllAPI hosted Gemini image model
    AllApi,
    /// Replicate predictions API
    Replicate,
}

/// Construct the configured backend from its environment credentials.
///
/// # Errors
///
/// Returns an error when the selected backend's credentials are missing.
pub fn generator_from_env(kind: BackendKind) -> HokusaiResult<Box<dyn ImageGenerator>> {
    match kind {
        BackendKind::AllApi => Ok(Box::new(AllApiClient::from_env()?)),
        BackendKind::Replicate => Ok(Box::new(ReplicateClient::from_env()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn backend_names_round_trip() {
        assert_eq!(BackendKind::from_str("allapi").unwrap(), BackendKind::AllApi);
        assert_eq!(
            BackendKind::from_str("replicate").unwrap(),
            BackendKind::Replicate
        );
        assert_eq!(BackendKind::AllApi.to_string(), "allapi");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(BackendKind::from_str("dalle").is_err());
    }
}
