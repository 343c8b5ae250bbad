use super::Value;

/// An ordered list of bencode values.
///
/// Besides plain elements a list may hold empty slots, reserved with
/// [`with_slots`](Self::with_slots) or [`push_slot`](Self::push_slot) and
/// filled later with [`set`](Self::set). Empty slots are invisible: they are
/// skipped by iteration, by [`len`](Self::len), by equality and by the
/// encoder.
///
/// # Examples
///
/// ```
/// use rbencode::{encode, List, Value};
///
/// let mut list = List::with_slots(3);
/// list.set(0, Value::string("screwdriver"));
/// list.set(2, Value::string("racketeering"));
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(encode(&Value::List(list)).unwrap(), b"l11:screwdriver12:racketeeringe");
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Option<Value>>,
}

pub type Iter<'a> = std::iter::Flatten<std::slice::Iter<'a, Option<Value>>>;

pub type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<Value>>>;

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list with `slots` empty slots.
    pub fn with_slots(slots: usize) -> Self {
        Self {
            items: vec![None; slots],
        }
    }

    pub fn push(&mut self, value: Value) {
        self.items.push(Some(value));
    }

    /// Appends an empty slot and returns its index.
    pub fn push_slot(&mut self) -> usize {
        self.items.push(None);
        self.items.len() - 1
    }

    /// Stores `value` in the slot at `index`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`slots`](Self::slots).
    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        self.items[index].replace(value)
    }

    /// Empties the slot at `index` and returns what it held.
    pub fn take(&mut self, index: usize) -> Option<Value> {
        self.items.get_mut(index).and_then(Option::take)
    }

    /// Returns the value in the slot at `index`.
    ///
    /// Slot indices equal element indices unless empty slots are present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of values, not counting empty slots.
    pub fn len(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of slots, empty or not.
    pub fn slots(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Option::is_none)
    }

    /// Iterates over the values in order, skipping empty slots.
    pub fn iter(&self) -> Iter<'_> {
        self.items.iter().flatten()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self {
            items: values.into_iter().map(Some).collect(),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Some).collect(),
        }
    }
}

impl Extend<Value> for List {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Some));
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().flatten()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
