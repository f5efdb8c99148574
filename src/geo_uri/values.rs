use std::collections::HashMap;

/// A multimap from keys to an ordered list of values.
///
/// Values keep the order in which they were added for their key. Keys have no
/// order of their own: [`Values::sorted`] is the only way to iterate them and
/// always yields keys in lexicographic order, so every serialization built on
/// top of it is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Values {
    inner: HashMap<String, Vec<String>>,
}

impl Values {
    pub fn new() -> Self {
        Values::default()
    }

    /// Returns all values for `key`, or `None` if the key is absent.
    /// A key present as a flag returns an empty slice.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Returns the first value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.inner.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// Adds `value` after any existing values for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces all values for `key`.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.inner.insert(key.into(), values)
    }

    /// Records `key` as a flag: present, with no values. Earlier values for `key` are discarded.
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        self.inner.insert(key.into(), Vec::new());
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the entries ordered by key.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &[String])> {
        let mut entries = self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice())).collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}
