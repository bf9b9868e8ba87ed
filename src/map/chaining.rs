use crate::list::List;
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::iter::repeat_with;

const INITIAL_BUCKETS: usize = 10;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// A hash map with separate chaining: a bucket array of [`List`] chains,
/// one chain per hash slot.
///
/// The table starts with [`INITIAL_BUCKETS`] buckets and doubles when the
/// load factor (entries per bucket) reaches 1. Doubling rehashes every
/// entry into the new table; an entry's bucket depends on the table size,
/// so entries placed under the old size would otherwise become
/// unreachable.
///
/// # Examples
///
/// ```
/// use sentinel_list::SeparateChainingMap;
///
/// let mut map = SeparateChainingMap::new();
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.put("a", 10), Some(1));
///
/// assert_eq!(map.get("a"), Some(&10));
/// assert_eq!(map.get("b"), None);
/// ```
pub struct SeparateChainingMap<K, V> {
    buckets: Vec<List<Entry<K, V>>>,
    len: usize,
}

impl<K: Hash + Eq, V> Default for SeparateChainingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> SeparateChainingMap<K, V> {
    /// Creates an empty map with the initial bucket count.
    pub fn new() -> Self {
        Self {
            buckets: new_buckets(INITIAL_BUCKETS),
            len: 0,
        }
    }

    /// Returns the number of key/value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Inserts a key/value pair. If the key is already present its value
    /// is replaced in place and the previous value returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.len >= self.buckets.len() {
            self.grow();
        }
        let index = self.bucket_index(&key);
        for entry in self.buckets[index].iter_mut() {
            if entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }
        self.buckets[index].push_front(Entry { key, value });
        self.len += 1;
        None
    }

    /// Returns a reference to the value for `key`, or `None` if the key is
    /// absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` if the map holds a pair for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Doubles the bucket array and rehashes every entry into it.
    fn grow(&mut self) {
        let doubled = new_buckets(self.buckets.len() * 2);
        let old = std::mem::replace(&mut self.buckets, doubled);
        for chain in old {
            for entry in chain {
                let index = self.bucket_index(&entry.key);
                self.buckets[index].push_front(entry);
            }
        }
    }
}

fn new_buckets<K, V>(count: usize) -> Vec<List<Entry<K, V>>> {
    repeat_with(List::new).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::{SeparateChainingMap, INITIAL_BUCKETS};
    use pretty_assertions::assert_eq;

    #[test]
    fn chaining_put_and_get() {
        let mut map = SeparateChainingMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);

        for i in 0..5 {
            assert_eq!(map.put(i, i * 10), None);
        }
        assert_eq!(map.len(), 5);
        for i in 0..5 {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }
        assert_eq!(map.get(&99), None);
        assert!(map.contains_key(&3));
        assert!(!map.contains_key(&99));
    }

    #[test]
    fn chaining_put_replaces_existing_key() {
        let mut map = SeparateChainingMap::new();
        assert_eq!(map.put("k", 1), None);
        assert_eq!(map.put("k", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some(&2));
    }

    #[test]
    fn chaining_get_mut() {
        let mut map = SeparateChainingMap::new();
        map.put(String::from("count"), 0);
        *map.get_mut("count").unwrap() += 7;
        assert_eq!(map.get("count"), Some(&7));
        assert_eq!(map.get_mut("missing"), None);
    }

    #[test]
    fn chaining_grows_and_stays_correct() {
        let mut map = SeparateChainingMap::new();
        // well past the initial capacity, forcing several doublings
        let count = INITIAL_BUCKETS * 8;
        for i in 0..count {
            map.put(i, i + 1000);
        }
        assert_eq!(map.len(), count);
        assert!(map.buckets.len() > INITIAL_BUCKETS);
        // every entry is still reachable after rehashing
        for i in 0..count {
            assert_eq!(map.get(&i), Some(&(i + 1000)));
        }
        assert_eq!(map.get(&count), None);
    }

    #[test]
    fn chaining_growth_keeps_load_factor_bounded() {
        let mut map = SeparateChainingMap::new();
        for i in 0..1000 {
            map.put(i, ());
            assert!(map.len <= map.buckets.len());
        }
    }

    #[test]
    fn chaining_string_keys_with_borrowed_lookup() {
        let mut map = SeparateChainingMap::new();
        map.put(String::from("alpha"), 1);
        map.put(String::from("beta"), 2);
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert_eq!(map.get("gamma"), None);
    }
}
