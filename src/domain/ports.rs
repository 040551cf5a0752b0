use crate::domain::model::{Credential, Identity};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the signed-in user's identity.
///
/// Implementations issue one credentialed, uncached request per call and
/// return an error for any non-success status or payload without a user.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn fetch_identity(&self, credential: &Credential) -> Result<Identity>;
}
