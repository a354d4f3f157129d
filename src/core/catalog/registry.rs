use std::collections::HashMap;

/// Name-keyed storage that remembers insertion order for listing.
#[derive(Debug, Clone)]
pub struct OrderedRegistry<V> {
    entries: HashMap<String, V>,
    order: Vec<String>,
}

impl<V> Default for OrderedRegistry<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<V> OrderedRegistry<V> {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Appends `value` under `key`. Returns `false` and leaves the registry untouched if the key is taken.
    pub fn insert(&mut self, key: String, value: V) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.entries.insert(key, value);
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.order
            .iter()
            .filter_map(move |k| self.entries.get(k).map(|v| (k.as_str(), v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    // unordered
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_insertion_order_across_removals() {
        let mut reg = OrderedRegistry::default();
        assert!(reg.insert("b".to_string(), 2));
        assert!(reg.insert("a".to_string(), 1));
        assert!(reg.insert("c".to_string(), 3));
        assert_eq!(reg.remove("a"), Some(1));
        assert!(reg.insert("a".to_string(), 10));

        let keys: Vec<&str> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn rejects_taken_keys_without_overwriting() {
        let mut reg = OrderedRegistry::default();
        assert!(reg.insert("x".to_string(), "first"));
        assert!(!reg.insert("x".to_string(), "second"));
        assert_eq!(reg.get("x"), Some(&"first"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.remove("missing"), None);
    }
}
