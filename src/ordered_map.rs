use std::collections::HashMap;

/// Map keyed by a caller-supplied integer that also remembers insertion
/// order. Category indices are semantic keys and are not guaranteed to match
/// list positions, so the catalog needs both views of the same entries.
#[derive(Debug, Clone)]
pub struct OrderedMap<T> {
    entries: HashMap<usize, T>,
    order: Vec<usize>,
}

impl <T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserting an existing key replaces the value but keeps the original
    /// position.
    pub fn insert(&mut self, key: usize, value: T) -> Option<T> {
        if !self.entries.contains_key(&key) {
            self.order.push(key);
        }
        self.entries.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.order.iter().filter_map(|&key| {
            self.entries.get(&key).map(|value| (key, value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T> FromIterator<(usize, T)> for OrderedMap<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(entries: I) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_insertion_order() {
        let map: OrderedMap<&str> = [(7, "seven"), (0, "zero"), (3, "three")]
            .into_iter()
            .collect();

        let keys: Vec<usize> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![7, 0, 3]);
    }

    #[test]
    fn get_uses_the_semantic_key_not_the_position() {
        let map: OrderedMap<&str> = [(7, "seven"), (0, "zero")].into_iter().collect();

        assert_eq!(map.get(7), Some(&"seven"));
        assert_eq!(map.get(1), None);
    }

    #[test]
    fn reinserting_a_key_replaces_the_value_in_place() {
        let mut map = OrderedMap::new();
        map.insert(1, "first");
        map.insert(2, "second");

        assert_eq!(map.insert(1, "replaced"), Some("first"));
        assert_eq!(map.len(), 2);

        let values: Vec<&str> = map.values().copied().collect();
        assert_eq!(values, vec!["replaced", "second"]);
    }
}
