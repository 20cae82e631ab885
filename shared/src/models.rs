use serde::{Deserialize, Serialize};

/// Authenticated user as reported by `GET /me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Profile {
    /// Profile known after a password login. The login response only carries
    /// a token, so the email stands in for the name.
    pub fn from_login_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            name: email.clone(),
            email,
            picture: None,
            full_name: None,
        }
    }

    /// Name shown to the user: full name, then name, then email.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| Some(self.name.as_str()).filter(|s| !s.is_empty()))
            .unwrap_or(&self.email)
    }
}

/// Inline message rendered under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Error(String),
    Success(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
