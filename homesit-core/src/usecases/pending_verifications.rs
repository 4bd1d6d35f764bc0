use super::prelude::*;

/// Privileged listing of profiles awaiting identity verification.
///
/// The ordering (newest first) is provided by the directory service.
pub fn pending_verifications<D>(directory: &D) -> Result<Vec<PendingVerification>>
where
    D: ProfileDirectoryGateway + ?Sized,
{
    Ok(directory.pending_verifications()?)
}
