use shared::session::{self, KeyStore};

/// `window.localStorage`, when the browser lets us have it.
struct BrowserStorage(web_sys::Storage);

impl KeyStore for BrowserStorage {
    fn remove(&self, key: &str) -> Result<(), String> {
        self.0.remove_item(key).map_err(|e| format!("{:?}", e))
    }
}

/// Local storage is blocked in sandboxed frames and when site data is
/// disabled; accessing it then throws instead of returning `None`.
fn local_storage() -> Option<BrowserStorage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage.map(BrowserStorage),
        Err(e) => {
            tracing::warn!("local storage access refused: {:?}", e);
            None
        }
    }
}

/// Removes auth artifacts an older build kept in local storage.
pub fn clear_legacy_auth_keys() {
    let storage = local_storage();
    session::clear_legacy_keys(storage.as_ref().map(|s| s as &dyn KeyStore));
}
