use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Keys which map onto consecutive indices, such as variable and propagator ids.
pub trait StorageKey: Clone {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

/// A vector which is indexed by a typed key instead of a `usize`, so that e.g. a set variable id
/// cannot be used to look up a propagator.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    key: PhantomData<Key>,
    elements: Vec<Value>,
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        KeyedVec {
            key: PhantomData,
            elements: vec![],
        }
    }
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        KeyedVec {
            key: PhantomData,
            elements: self.elements.clone(),
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `value` and returns its key.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.elements.len());
        self.elements.push(value);
        key
    }

    /// The value under `key`, or `None` if the vector does not reach that far.
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.elements.iter_mut()
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// Grows the vector so that `key` is a valid index; new positions hold `default_value`.
    pub fn accomodate(&mut self, key: Key, default_value: Value) {
        let required_len = key.index() + 1;
        if required_len > self.elements.len() {
            self.elements.resize(required_len, default_value);
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: Key) -> &Value {
        &self.elements[key.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, key: Key) -> &mut Value {
        &mut self.elements[key.index()]
    }
}
