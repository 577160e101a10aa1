use gloo::storage::{LocalStorage, Storage as _};
use tracing::warn;

use super::Storage;

/// The page origin's `window.localStorage`
///
/// Values are stored as raw strings rather than through gloo's json helpers so
/// that keys written by older non-Rust pages stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("localStorage.getItem({key}) failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        // Quota exceeded and private browsing both end up here
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            warn!("localStorage.setItem({key}) failed: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            warn!("localStorage.removeItem({key}) failed: {e:?}");
        }
    }
}
