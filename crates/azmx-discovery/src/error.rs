use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("subscription listing failed: {0}")]
    ListFailed(String),

    #[error("internal discovery error: {0}")]
    Internal(String),
}
