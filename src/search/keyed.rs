//! Definition of the [`Keyed`] capability and its implementations for the standard maps.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::search::{Collection, KeyedCapability, SearchBy, SearchMutBy};


/// Map-like collections: lookup of a stored value by key.
pub trait Keyed<Q: ?Sized> {
    type Value;

    fn find_key(&self, key: &Q) -> Option<&Self::Value>;

    fn find_key_mut(&mut self, key: &Q) -> Option<&mut Self::Value>;

    /// Removes the entry under `key` and returns its value.
    fn take_key(&mut self, key: &Q) -> Option<Self::Value>;
}


impl<K, V, S, Q> Keyed<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn find_key(&self, key: &Q) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn find_key_mut(&mut self, key: &Q) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    fn take_key(&mut self, key: &Q) -> Option<V> {
        HashMap::remove(self, key)
    }
}


impl<K, V, Q> Keyed<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn find_key(&self, key: &Q) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn find_key_mut(&mut self, key: &Q) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    fn take_key(&mut self, key: &Q) -> Option<V> {
        BTreeMap::remove(self, key)
    }
}


impl<K, V, S> Collection for HashMap<K, V, S> {
    type Capability = KeyedCapability;
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Capability = KeyedCapability;
}


impl<'q, C, Q> SearchBy<KeyedCapability, &'q Q> for C
where
    C: Keyed<Q>,
    Q: ?Sized,
{
    type Element = C::Value;

    fn search_by(&self, key: &'q Q) -> Option<&C::Value> {
        self.find_key(key)
    }

    fn take_by(&mut self, key: &'q Q) -> Option<C::Value> {
        self.take_key(key)
    }
}


impl<'q, C, Q> SearchMutBy<KeyedCapability, &'q Q> for C
where
    C: Keyed<Q>,
    Q: ?Sized,
{
    fn search_mut_by(&mut self, key: &'q Q) -> Option<&mut C::Value> {
        self.find_key_mut(key)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map() {
        let mut map = HashMap::from([("key".to_owned(), vec![1])]);
        assert_eq!(map.find_key("key"), Some(&vec![1]));
        map.find_key_mut("key").unwrap().push(2);
        assert_eq!(map.find_key("missing"), None);
        assert_eq!(map.take_key("key"), Some(vec![1, 2]));
        assert!(map.is_empty());
    }

    #[test]
    fn test_btree_map() {
        let mut map = BTreeMap::from([(1_u8, 'a'), (2, 'b')]);
        let stored = map.get(&2).unwrap() as *const char;
        assert!(std::ptr::eq(map.find_key(&2).unwrap(), stored));
        assert_eq!(map.take_key(&1), Some('a'));
        assert_eq!(map.take_key(&1), None);
        assert_eq!(map.len(), 1);
    }
}
