use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

/// Identifies a cached query by its key segments, e.g.
/// `["lessons", "single", "fractions"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryKey {
    parts: Vec<String>,
    hash: String,
}

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts = parts.into_iter().map(Into::into).collect::<Vec<_>>();
        let hash = Self::hash_parts(&parts);

        Self { parts, hash }
    }

    fn hash_parts(parts: &[String]) -> String {
        let mut hasher = blake3::Hasher::new();

        for part in parts {
            hasher.update(part.as_bytes());
            // Keeps ["ab", "c"] and ["a", "bc"] apart.
            hasher.update(&[0]);
        }

        hasher.finalize().to_string()
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parts.join(", "))
    }
}

/// Raw query results shared between loaders.
pub trait QueryCache: Send + Sync {
    fn get(&self, key: &QueryKey) -> Option<Value>;

    fn set(&self, key: &QueryKey, value: Value);
}

#[derive(Default, Debug)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryCache for MemoryCache {
    fn get(&self, key: &QueryKey) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key.hash())
            .cloned()
    }

    fn set(&self, key: &QueryKey, value: Value) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.hash().to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn equal_parts_hash_equally() {
        let first = QueryKey::new(["lessons", "single", "fractions"]);
        let second = QueryKey::new(vec![
            "lessons".to_owned(),
            "single".to_owned(),
            "fractions".to_owned(),
        ]);

        assert_eq!(first.hash(), second.hash());
        assert_eq!(first.to_string(), "[lessons, single, fractions]");
    }

    #[test]
    fn segment_boundaries_change_the_hash() {
        let first = QueryKey::new(["ab", "c"]);
        let second = QueryKey::new(["a", "bc"]);

        assert_ne!(first.hash(), second.hash());
    }

    #[test]
    fn memory_cache_get_and_set() {
        let cache = MemoryCache::new();
        let key = QueryKey::new(["users", "current-user"]);

        assert_eq!(cache.get(&key), None);

        cache.set(&key, json!({ "id": 1 }));
        cache.set(&key, json!({ "id": 2 }));

        assert_eq!(cache.get(&key), Some(json!({ "id": 2 })));
        assert_eq!(cache.get(&QueryKey::new(["users"])), None);
    }
}
