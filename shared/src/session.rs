use crate::models::Profile;

/// Local-storage keys from an older token-in-storage login. Nothing writes
/// them any more; logout still clears them.
pub const LEGACY_STORAGE_KEYS: [&str; 2] = ["access_token", "user_email"];

/// Key-value storage the legacy keys may live in.
pub trait KeyStore {
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Best-effort removal of [`LEGACY_STORAGE_KEYS`]. Logout must not fail, so
/// missing or refusing storage is logged and skipped. Returns how many keys
/// could not be removed.
pub fn clear_legacy_keys(store: Option<&dyn KeyStore>) -> usize {
    let Some(store) = store else {
        tracing::warn!("local storage unavailable, legacy auth keys left as they are");
        return LEGACY_STORAGE_KEYS.len();
    };

    LEGACY_STORAGE_KEYS
        .into_iter()
        .filter(|key| match store.remove(key) {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(key = *key, "failed to remove legacy auth key: {}", e);
                true
            }
        })
        .count()
}

/// The client's belief about who is signed in.
///
/// Lives in memory only. The backend's credential cookie is the real source
/// of truth across reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Absent,
    Present(Profile),
}

/// The only ways a session changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignedIn(Profile),
    SignedOut,
}

impl Session {
    pub fn get(&self) -> Option<&Profile> {
        match self {
            Self::Absent => None,
            Self::Present(profile) => Some(profile),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn set(&mut self, profile: Option<Profile>) {
        *self = match profile {
            Some(profile) => Self::Present(profile),
            None => Self::Absent,
        };
    }

    pub fn apply(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::SignedIn(profile) => {
                tracing::info!(email = %profile.email, "session started");
                self.set(Some(profile));
            }
            SessionAction::SignedOut => {
                if self.is_present() {
                    tracing::info!("session cleared");
                }
                self.set(None);
            }
        }
        self
    }
}

#[cfg(feature = "yew")]
impl yew::Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        std::rc::Rc::new((*self).clone().apply(action))
    }
}
