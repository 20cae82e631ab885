use thiserror::Error;

/// Failures surfaced by the auth forms and the profile view.
///
/// Every variant renders as the inline message the user sees, so the
/// `Display` text is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Client-side check failed before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Backend refused the request, or the request never got a response.
    #[error("{0}")]
    Rejected(String),

    /// Profile fetch failed; the credential cookie is missing or stale.
    #[error("Not authenticated")]
    NotAuthenticated,
}

pub type AuthResult<T> = Result<T, AuthError>;
