use gloo_net::http::{Request, RequestBuilder};
use shared::api::{
    self, AuthEndpoints, LoginRequest, RegisterRequest, LOGIN_FAILED, REGISTRATION_FAILED,
};
use shared::error::{AuthError, AuthResult};
use shared::models::Profile;
use web_sys::RequestCredentials;

use crate::config::AppConfig;

/// Client for the backend's `/api/v1/auth` routes.
///
/// Every request includes credentials so the browser sends and stores the
/// backend's session cookie. Interpreting a response is left to
/// `shared::api`; this type only does the I/O.
pub struct AuthApi;

impl AuthApi {
    fn endpoints() -> AuthEndpoints {
        AuthEndpoints::new(AppConfig::load().api_base_url)
    }

    /// `Ok(Some(token))` once the backend has set the session cookie.
    pub async fn login(request: &LoginRequest) -> AuthResult<Option<String>> {
        request.check()?;

        let builder = Request::post(&Self::endpoints().login());
        let (status, body) = send_json(builder, request, LOGIN_FAILED).await?;
        api::interpret_login(status, &body)
    }

    /// `Ok(Some(email))` when the backend echoes the new account.
    pub async fn register(request: &RegisterRequest) -> AuthResult<Option<String>> {
        request.check()?;

        let builder = Request::post(&Self::endpoints().register());
        let (status, body) = send_json(builder, request, REGISTRATION_FAILED).await?;
        api::interpret_register(status, &body)
    }

    /// Leaves the app; the backend runs the OAuth exchange and redirects
    /// back with the cookie set.
    pub fn redirect_to_google_login() {
        let url = Self::endpoints().google_login();
        tracing::info!("redirecting to google login");
        if let Err(e) = gloo::utils::window().location().set_href(&url) {
            tracing::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }

    pub async fn fetch_profile() -> AuthResult<Profile> {
        let response = Request::get(&Self::endpoints().profile())
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("profile request failed: {}", e);
                AuthError::NotAuthenticated
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        api::interpret_profile(status, &body)
    }
}

/// Sends a credentialed JSON body and hands back status and raw text.
/// Anything that stops a response from arriving maps to `fallback`.
async fn send_json<T: serde::Serialize>(
    builder: RequestBuilder,
    body: &T,
    fallback: &str,
) -> AuthResult<(u16, String)> {
    let response = builder
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| transport_failure(e, fallback))?
        .send()
        .await
        .map_err(|e| transport_failure(e, fallback))?;

    let status = response.status();
    if !api::is_success(status) {
        tracing::warn!(status, "auth request rejected");
    }
    let text = response
        .text()
        .await
        .map_err(|e| transport_failure(e, fallback))?;
    Ok((status, text))
}

fn transport_failure(err: gloo_net::Error, fallback: &str) -> AuthError {
    tracing::warn!("auth request did not complete: {}", err);
    AuthError::Rejected(fallback.to_string())
}
