use bytes::Bytes;
use std::collections::{btree_map, BTreeMap};

use super::Value;

/// A bencode dictionary.
///
/// Keys are byte strings kept in lexicographic byte order, so iteration (and
/// therefore encoding) always yields strictly increasing keys. The order is
/// part of the format, not a preference: it is what makes the encoding of a
/// dictionary unique.
///
/// [`insert`](Self::insert) never overwrites; the first value stored under a
/// key wins. Use [`replace`](Self::replace) to overwrite.
///
/// A key may also map to an empty slot ([`insert_slot`](Self::insert_slot)).
/// Such entries are skipped by iteration, [`len`](Self::len), equality and
/// the encoder.
///
/// # Examples
///
/// ```
/// use rbencode::{Dict, Value};
///
/// let mut dict = Dict::new();
/// assert!(dict.insert("spam", Value::string("eggs")));
/// assert!(dict.insert("cow", Value::string("moo")));
/// assert!(!dict.insert("cow", Value::string("oink")));
///
/// let keys: Vec<&[u8]> = dict.keys().map(|k| k.as_ref()).collect();
/// assert_eq!(keys, vec![b"cow".as_slice(), b"spam".as_slice()]);
/// assert_eq!(dict.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dict {
    entries: BTreeMap<Bytes, Option<Value>>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key` unless the key already holds a value.
    ///
    /// Returns `true` if the value was stored. An empty slot counts as
    /// absent and is filled.
    pub fn insert(&mut self, key: impl Into<Bytes>, value: Value) -> bool {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(Some(value));
                true
            }
            btree_map::Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                if slot.is_some() {
                    return false;
                }
                *slot = Some(value);
                true
            }
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn replace(&mut self, key: impl Into<Bytes>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), Some(value)).flatten()
    }

    /// Reserves `key` with an empty slot. Returns `false` if the key exists.
    pub fn insert_slot(&mut self, key: impl Into<Bytes>) -> bool {
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(None);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        self.entries.get_mut(key).and_then(Option::as_mut)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, slot included.
    pub fn remove(&mut self, key: &[u8]) -> Option<Value> {
        self.entries.remove(key).flatten()
    }

    /// Number of entries holding a value.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Option::is_none)
    }

    /// Iterates over entries in increasing key order, skipping empty slots.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Bytes> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

/// Borrowing iterator over the filled entries of a [`Dict`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Bytes, Option<Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Bytes, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(key, slot)| slot.as_ref().map(|value| (key, value)))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((key, slot)) = self.inner.next_back() {
            if let Some(value) = slot {
                return Some((key, value));
            }
        }
        None
    }
}

/// Owning iterator over the filled entries of a [`Dict`].
pub struct IntoIter {
    inner: btree_map::IntoIter<Bytes, Option<Value>>,
}

impl Iterator for IntoIter {
    type Item = (Bytes, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(key, slot)| slot.map(|value| (key, value)))
    }
}

impl IntoIterator for Dict {
    type Item = (Bytes, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Bytes, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Dict {}

impl From<BTreeMap<Bytes, Value>> for Dict {
    fn from(map: BTreeMap<Bytes, Value>) -> Self {
        Self {
            entries: map.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

impl<K: Into<Bytes>> FromIterator<(K, Value)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut dict = Dict::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<Bytes>> Extend<(K, Value)> for Dict {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
