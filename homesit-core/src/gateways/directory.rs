use thiserror::Error;

use crate::entities::{PendingVerification, Profile};

/// Privileged access to the managed profile directory.
///
/// Implementations authenticate with a service credential, never with
/// the credential of the calling user.
pub trait ProfileDirectoryGateway {
    fn all_profiles(&self) -> Result<Vec<Profile>, Error>;

    /// Profiles awaiting identity verification, newest first.
    fn pending_verifications(&self) -> Result<Vec<PendingVerification>, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile directory is not configured")]
    NotConfigured,
    #[error("Profile directory error (status {0})")]
    UpstreamStatus(u16),
    #[error("Profile directory unreachable: {0}")]
    Unreachable(String),
    #[error("Unexpected response from profile directory: {0}")]
    UnexpectedResponse(String),
}
