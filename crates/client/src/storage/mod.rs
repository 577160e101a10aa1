use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(feature = "wasm")]
mod browser;
#[cfg(feature = "wasm")]
pub use browser::*;

/// String keyed, string valued persistent store
///
/// Mirrors the browser's `localStorage`: synchronous, last write wins, and
/// writes that the backing store refuses are dropped rather than reported.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In memory storage
///
/// Clones share the same map, so a second client built from a clone sees
/// exactly what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStorage {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let items = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { items: Rc::new(RefCell::new(items)) }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
