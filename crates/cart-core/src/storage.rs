use crate::error::StorageError;
use std::collections::HashMap;

/// Synchronous string key/value storage, shaped like browser `localStorage`.
///
/// Values are always read and written whole.
pub trait CartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. An optional byte quota (keys plus values, like the
/// browser's) makes writes fail once exceeded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Pre-populate `key`, bypassing the quota.
    pub fn seeded(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl CartStorage for InMemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_excluding(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::Write {
                    key: key.to_owned(),
                    reason: format!("quota of {quota} bytes exceeded"),
                });
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() -> anyhow::Result<()> {
        let mut storage = InMemoryStorage::new();
        storage.write("cartItems", "[]")?;
        assert_eq!(storage.read("cartItems")?.as_deref(), Some("[]"));
        assert_eq!(storage.read("missing")?, None);
        Ok(())
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() -> anyhow::Result<()> {
        let mut storage = InMemoryStorage::with_quota(16);
        storage.write("k", "short")?;

        let err = storage.write("k", "this value is far too long").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "k"));
        assert_eq!(storage.get("k"), Some("short"));
        Ok(())
    }

    #[test]
    fn quota_counts_replaced_entry_once() -> anyhow::Result<()> {
        let mut storage = InMemoryStorage::with_quota(10);
        storage.write("k", "123456789")?;
        storage.write("k", "987654321")?;
        assert_eq!(storage.get("k"), Some("987654321"));
        Ok(())
    }
}
