use std::collections::HashMap;

/// Key-value view keyed by word text. Implementations need no eviction.
pub trait Cache<V>: Send + Sync {
    fn get(&self, key: &str) -> Option<&V>;

    fn set(&mut self, key: String, value: V);

    /// Drop one key, returning what it held
    fn invalidate(&mut self, key: &str) -> Option<V>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// HashMap-backed cache
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    map: HashMap<String, V>,
}

impl<V> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Send + Sync> Cache<V> for MemoryCache<V> {
    fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    fn set(&mut self, key: String, value: V) {
        self.map.insert(key, value);
    }

    fn invalidate(&mut self, key: &str) -> Option<V> {
        self.map.remove(key)
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.map.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
