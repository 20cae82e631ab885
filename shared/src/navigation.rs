//! Route guard and the state transitions that follow each auth call.
//!
//! The frontend maps [`Page`] onto its router and applies a [`Transition`]
//! verbatim. Only the functions here produce a [`SessionAction`], so the
//! login, logout and profile handlers are the only session writers.

use std::time::Duration;

use crate::error::AuthResult;
use crate::models::{FormMessage, Profile};
use crate::session::{Session, SessionAction};

pub const REGISTER_REDIRECT_DELAY_MS: u64 = 1000;
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Please log in.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Render,
    Redirect(Page),
}

/// Decides what a page does with the current session before rendering.
///
/// Only home is guarded up front. The profile page checks the session
/// through its own fetch, see [`on_profile`].
pub fn guard(page: Page, session: &Session) -> Guard {
    match page {
        Page::Home if !session.is_present() => Guard::Redirect(Page::Login),
        _ => Guard::Render,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigate {
    Now(Page),
    After(Duration, Page),
}

impl Navigate {
    pub fn page(self) -> Page {
        match self {
            Self::Now(page) | Self::After(_, page) => page,
        }
    }

    /// `None` means navigate immediately.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Now(_) => None,
            Self::After(delay, _) => Some(delay),
        }
    }
}

/// What a view does after an auth call settles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub session: Option<SessionAction>,
    pub message: Option<FormMessage>,
    pub navigate: Option<Navigate>,
}

impl Transition {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            message: Some(FormMessage::Error(message.into())),
            ..Self::default()
        }
    }
}

pub fn on_login(email: &str, result: AuthResult<Option<String>>) -> Transition {
    match result {
        Ok(Some(_token)) => Transition {
            session: Some(SessionAction::SignedIn(Profile::from_login_email(email))),
            message: None,
            navigate: Some(Navigate::Now(Page::Home)),
        },
        Ok(None) => {
            tracing::warn!("login response carried no access token");
            Transition::default()
        }
        Err(err) => Transition::failed(err.to_string()),
    }
}

pub fn on_register(result: AuthResult<Option<String>>, delay: Duration) -> Transition {
    match result {
        Ok(Some(_email)) => Transition {
            session: None,
            message: Some(FormMessage::Success(REGISTRATION_SUCCEEDED.to_string())),
            navigate: Some(Navigate::After(delay, Page::Login)),
        },
        Ok(None) => {
            tracing::warn!("registration response did not echo an email");
            Transition::default()
        }
        Err(err) => Transition::failed(err.to_string()),
    }
}

/// Failure clears whatever session the client believed it had.
pub fn on_profile(result: &AuthResult<Profile>) -> Transition {
    match result {
        Ok(profile) => Transition {
            session: Some(SessionAction::SignedIn(profile.clone())),
            ..Transition::default()
        },
        Err(err) => Transition {
            session: Some(SessionAction::SignedOut),
            message: Some(FormMessage::Error(err.to_string())),
            navigate: Some(Navigate::Now(Page::Login)),
        },
    }
}

/// Logout is local only; the server-side cookie is left alone. No explicit
/// navigation: the home guard sends the now-anonymous user to login.
pub fn on_logout() -> Transition {
    Transition {
        session: Some(SessionAction::SignedOut),
        ..Transition::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{interpret_login, interpret_profile, interpret_register};
    use crate::error::AuthError;

    fn signed_in() -> Session {
        Session::Present(Profile::from_login_email("a@b.com"))
    }

    fn apply(session: Session, transition: &Transition) -> Session {
        match &transition.session {
            Some(action) => session.apply(action.clone()),
            None => session,
        }
    }

    #[test]
    fn test_home_requires_session() {
        assert_eq!(guard(Page::Home, &Session::Absent), Guard::Redirect(Page::Login));
        assert_eq!(guard(Page::Home, &signed_in()), Guard::Render);
    }

    #[test]
    fn test_login_and_register_always_render() {
        for session in [Session::Absent, signed_in()] {
            assert_eq!(guard(Page::Login, &session), Guard::Render);
            assert_eq!(guard(Page::Register, &session), Guard::Render);
        }
    }

    #[test]
    fn test_successful_login_signs_in_and_goes_home() {
        let result = interpret_login(200, r#"{"access_token":"t1"}"#);
        let transition = on_login("a@b.com", result);
        assert_eq!(transition.navigate, Some(Navigate::Now(Page::Home)));
        assert_eq!(transition.message, None);

        let session = apply(Session::Absent, &transition);
        assert_eq!(session, signed_in());
        assert_eq!(guard(Page::Home, &session), Guard::Render);
    }

    #[test]
    fn test_rejected_login_shows_detail_only() {
        let result = interpret_login(401, r#"{"detail":"Incorrect email or password"}"#);
        let transition = on_login("a@b.com", result);
        assert_eq!(
            transition,
            Transition {
                session: None,
                message: Some(FormMessage::Error("Incorrect email or password".to_string())),
                navigate: None,
            }
        );
    }

    #[test]
    fn test_login_without_token_does_nothing() {
        let transition = on_login("a@b.com", Ok(None));
        assert_eq!(transition, Transition::default());
    }

    #[test]
    fn test_validation_failure_is_shown() {
        let transition = on_login(
            "",
            Err(AuthError::Validation("Email is required".to_string())),
        );
        assert_eq!(
            transition.message,
            Some(FormMessage::Error("Email is required".to_string()))
        );
        assert_eq!(transition.navigate, None);
    }

    #[test]
    fn test_registration_success_redirects_after_delay() {
        let delay = Duration::from_millis(REGISTER_REDIRECT_DELAY_MS);
        let result = interpret_register(200, r#"{"email":"a@b.com"}"#);
        let transition = on_register(result, delay);
        assert_eq!(
            transition.message,
            Some(FormMessage::Success(REGISTRATION_SUCCEEDED.to_string()))
        );
        assert_eq!(transition.navigate, Some(Navigate::After(delay, Page::Login)));
        assert_eq!(transition.session, None);
    }

    #[test]
    fn test_only_registration_navigates_late() {
        let delay = Duration::from_millis(REGISTER_REDIRECT_DELAY_MS);
        let register = on_register(Ok(Some("a@b.com".to_string())), delay)
            .navigate
            .unwrap();
        assert_eq!(register.delay(), Some(delay));
        assert_eq!(register.page(), Page::Login);

        let login = on_login("a@b.com", Ok(Some("t1".to_string()))).navigate.unwrap();
        assert_eq!(login.delay(), None);
        assert_eq!(login.page(), Page::Home);

        let profile = on_profile(&Err(AuthError::NotAuthenticated)).navigate.unwrap();
        assert_eq!(profile.delay(), None);
        assert_eq!(profile.page(), Page::Login);
    }

    #[test]
    fn test_registration_failure_falls_back() {
        let result = interpret_register(500, "");
        let transition = on_register(result, Duration::from_millis(REGISTER_REDIRECT_DELAY_MS));
        assert_eq!(
            transition.message,
            Some(FormMessage::Error("Registration failed".to_string()))
        );
        assert_eq!(transition.navigate, None);
    }

    #[test]
    fn test_unauthenticated_profile_goes_to_login() {
        let result = interpret_profile(401, "");
        let transition = on_profile(&result);
        assert_eq!(
            transition.message,
            Some(FormMessage::Error("Not authenticated".to_string()))
        );
        assert_eq!(transition.navigate, Some(Navigate::Now(Page::Login)));

        // Repeating the visit lands in the same place.
        let once = apply(signed_in(), &transition);
        let twice = apply(once.clone(), &on_profile(&result));
        assert_eq!(once, Session::Absent);
        assert_eq!(twice, Session::Absent);
        assert_eq!(on_profile(&result), transition);
    }

    #[test]
    fn test_profile_fetch_populates_session() {
        let result = interpret_profile(
            200,
            r#"{"name":"Ada","email":"ada@example.com","picture":"https://example.com/a.png"}"#,
        );
        let session = apply(Session::Absent, &on_profile(&result));
        assert_eq!(session.get().map(|p| p.name.as_str()), Some("Ada"));
        assert_eq!(on_profile(&result).navigate, None);
    }

    #[test]
    fn test_logout_always_clears() {
        let google = Session::Present(Profile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            picture: None,
            full_name: None,
        });
        for session in [google, signed_in(), Session::Absent] {
            let after = apply(session, &on_logout());
            assert_eq!(after, Session::Absent);
            assert_eq!(on_logout().navigate, None);
            assert_eq!(guard(Page::Home, &after), Guard::Redirect(Page::Login));
        }
    }
}
