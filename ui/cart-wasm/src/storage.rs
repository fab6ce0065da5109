//! `localStorage` behind the cart storage port.

use cart_core::{CartStorage, StorageError};

/// Browser local storage. `None` when the page has no usable storage
/// (private mode, sandboxed frames); every access then reports
/// [`StorageError::Unavailable`].
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            inner: gloo_utils::window().local_storage().ok().flatten(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl CartStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }
}
