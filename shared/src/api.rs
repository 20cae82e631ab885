use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{AuthError, AuthResult};
use crate::models::Profile;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
const MISSING_FIELDS: &str = "Please fill in all required fields";

// ============================================================================
// Endpoints
// ============================================================================

/// URLs of the backend auth routes, all under one base such as
/// `https://host/api/v1/auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    base_url: String,
}

impl AuthEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn register(&self) -> String {
        format!("{}/register", self.base_url)
    }

    /// Target of a full-page navigation, not an XHR.
    pub fn google_login(&self) -> String {
        format!("{}/google/login", self.base_url)
    }

    pub fn profile(&self) -> String {
        format!("{}/me", self.base_url)
    }
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> AuthResult<()> {
        self.validate()
            .map_err(|errors| validation_error(&errors, &["email", "password"]))
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
}

impl RegisterRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }

    pub fn check(&self) -> AuthResult<()> {
        self.validate().map_err(|errors| {
            validation_error(&errors, &["full_name", "email", "password"])
        })
    }
}

/// First message in form field order, so the user sees the topmost problem.
fn validation_error(errors: &ValidationErrors, fields: &[&'static str]) -> AuthError {
    let by_field = errors.field_errors();
    let message = fields
        .iter()
        .filter_map(|field| by_field.get(field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| MISSING_FIELDS.to_string());
    AuthError::Validation(message)
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct LoginAcknowledgement {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RegisterAcknowledgement {
    #[serde(default)]
    email: Option<String>,
}

/// Error body as the backend sends it. `detail` is usually a string, but
/// request validation failures send a list of objects instead.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: serde_json::Value,
}

impl ErrorBody {
    fn detail(&self) -> Option<&str> {
        self.detail.as_str().filter(|s| !s.is_empty())
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn rejection(body: &str, fallback: &str) -> AuthError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail().map(str::to_string));
    AuthError::Rejected(detail.unwrap_or_else(|| fallback.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Reads a `POST /login` response.
///
/// `Ok(Some(token))` means signed in. `Ok(None)` is a 2xx body without an
/// `access_token`; the backend never sends one, and the form treats it as
/// a no-op.
pub fn interpret_login(status: u16, body: &str) -> AuthResult<Option<String>> {
    if !is_success(status) {
        return Err(rejection(body, LOGIN_FAILED));
    }
    let ack: LoginAcknowledgement = serde_json::from_str(body).unwrap_or_default();
    Ok(non_empty(ack.access_token))
}

/// Reads a `POST /register` response. Success is the echoed email.
pub fn interpret_register(status: u16, body: &str) -> AuthResult<Option<String>> {
    if !is_success(status) {
        return Err(rejection(body, REGISTRATION_FAILED));
    }
    let ack: RegisterAcknowledgement = serde_json::from_str(body).unwrap_or_default();
    Ok(non_empty(ack.email))
}

/// Reads a `GET /me` response.
pub fn interpret_profile(status: u16, body: &str) -> AuthResult<Profile> {
    if !is_success(status) {
        return Err(AuthError::NotAuthenticated);
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!("profile response did not parse: {}", e);
        AuthError::NotAuthenticated
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_base_url() {
        let endpoints = AuthEndpoints::new("https://auth.example.com/api/v1/auth/");
        assert_eq!(endpoints.login(), "https://auth.example.com/api/v1/auth/login");
        assert_eq!(endpoints.register(), "https://auth.example.com/api/v1/auth/register");
        assert_eq!(
            endpoints.google_login(),
            "https://auth.example.com/api/v1/auth/google/login"
        );
        assert_eq!(endpoints.profile(), "https://auth.example.com/api/v1/auth/me");
    }

    #[test]
    fn test_login_with_token_signs_in() {
        let result = interpret_login(200, r#"{"access_token":"t1","token_type":"bearer"}"#);
        assert_eq!(result, Ok(Some("t1".to_string())));
    }

    #[test]
    fn test_login_without_token_is_not_an_error() {
        assert_eq!(interpret_login(200, r#"{"message":"ok"}"#), Ok(None));
        assert_eq!(interpret_login(200, r#"{"access_token":""}"#), Ok(None));
        assert_eq!(interpret_login(204, ""), Ok(None));
    }

    #[test]
    fn test_login_rejection_uses_detail() {
        let result = interpret_login(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(result, Err(AuthError::Rejected("Invalid credentials".to_string())));
    }

    #[test]
    fn test_login_rejection_falls_back() {
        for body in ["", "not json", "{}", r#"{"detail":""}"#, r#"{"detail":null}"#] {
            assert_eq!(
                interpret_login(500, body),
                Err(AuthError::Rejected(LOGIN_FAILED.to_string())),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_list_detail_falls_back() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
        assert_eq!(
            interpret_register(422, body),
            Err(AuthError::Rejected(REGISTRATION_FAILED.to_string()))
        );
    }

    #[test]
    fn test_register_echo_signals_success() {
        let result = interpret_register(201, r#"{"email":"a@b.com","id":7}"#);
        assert_eq!(result, Ok(Some("a@b.com".to_string())));
        assert_eq!(interpret_register(200, "{}"), Ok(None));
    }

    #[test]
    fn test_register_rejection_uses_detail() {
        let result = interpret_register(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            result,
            Err(AuthError::Rejected("Email already registered".to_string()))
        );
    }

    #[test]
    fn test_profile_unauthorized() {
        let result = interpret_profile(401, r#"{"detail":"Not authenticated"}"#);
        assert_eq!(result, Err(AuthError::NotAuthenticated));
        assert_eq!(
            AuthError::NotAuthenticated.to_string(),
            "Not authenticated"
        );
    }

    #[test]
    fn test_profile_success_and_garbage() {
        let profile =
            interpret_profile(200, r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(profile.email, "ada@example.com");

        assert_eq!(
            interpret_profile(200, "<html></html>"),
            Err(AuthError::NotAuthenticated)
        );
    }

    #[test]
    fn test_login_request_validation() {
        assert!(LoginRequest::new("a@b.com", "x").check().is_ok());

        assert_eq!(
            LoginRequest::new("a@b.com", "").check(),
            Err(AuthError::Validation("Password is required".to_string()))
        );
        assert_eq!(
            LoginRequest::new("not-an-email", "x").check(),
            Err(AuthError::Validation(
                "Please enter a valid email address".to_string()
            ))
        );
        assert!(matches!(
            LoginRequest::new("", "").check(),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_register_request_validation() {
        assert!(RegisterRequest::new("a@b.com", "x", "A B").check().is_ok());
        assert_eq!(
            RegisterRequest::new("a@b.com", "x", "").check(),
            Err(AuthError::Validation("Full name is required".to_string()))
        );
    }

    #[test]
    fn test_register_request_wire_shape() {
        let json = serde_json::to_value(RegisterRequest::new("a@b.com", "x", "A B")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "x", "full_name": "A B"})
        );
    }
}
