//! Capability-based search over collections.
//!
//! A collection exposes one or more of three capabilities:
//! - [`Keyed`]: lookup of a stored value by key (maps),
//! - [`Membership`]: lookup of a stored member by equality (sets),
//! - [`PredicateSearchable`]: first element matching a predicate (sequences).
//!
//! [`Search`] and [`SearchMut`] are the uniform entry points. Reference probes (`&Q`) are routed
//! through the capability named by [`Collection::Capability`], so a type that could be scanned as
//! a sequence but also supports keyed lookup is always searched by key. [`Matching`] probes always
//! go to [`PredicateSearchable`].

pub mod keyed;
pub mod membership;
pub mod sequence;

use std::any::type_name;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::binding::{Binding, MutableKind, ReadOnlyKind};

pub use keyed::Keyed;
pub use membership::Membership;
pub use sequence::{matching, Matching, PredicateSearchable};


/// Search capabilities, declared in priority order: `Keyed < Membership < Predicate`.
///
/// A collection offering several capabilities is searched with the smallest one. That choice is
/// made once per type in [`Collection::Capability`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Keyed,
    Membership,
    Predicate,
}


impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Keyed => "keyed",
            Capability::Membership => "membership",
            Capability::Predicate => "predicate",
        })
    }
}


/// Type-level capability.
pub trait CapabilityMarker {
    const CAPABILITY: Capability;
}


#[derive(Clone, Copy, Debug, Default)]
pub struct KeyedCapability;

#[derive(Clone, Copy, Debug, Default)]
pub struct MembershipCapability;

#[derive(Clone, Copy, Debug, Default)]
pub struct PredicateCapability;


impl CapabilityMarker for KeyedCapability {
    const CAPABILITY: Capability = Capability::Keyed;
}

impl CapabilityMarker for MembershipCapability {
    const CAPABILITY: Capability = Capability::Membership;
}

impl CapabilityMarker for PredicateCapability {
    const CAPABILITY: Capability = Capability::Predicate;
}


/// Collections that can be searched with reference probes.
///
/// `Capability` must be the smallest (most specific) [`Capability`] the type implements.
pub trait Collection {
    type Capability: CapabilityMarker;
}


/// Capability `C` is searched with.
pub fn capability_of<C: Collection>() -> Capability {
    <C::Capability as CapabilityMarker>::CAPABILITY
}


/// Search through one specific capability.
///
/// Implemented generically for every capability trait. Users should go through [`Search`].
pub trait SearchBy<Cap, P> {
    type Element;

    fn search_by(&self, probe: P) -> Option<&Self::Element>;

    fn take_by(&mut self, probe: P) -> Option<Self::Element>;
}


/// Mutable search through one specific capability.
pub trait SearchMutBy<Cap, P>: SearchBy<Cap, P> {
    fn search_mut_by(&mut self, probe: P) -> Option<&mut Self::Element>;
}


/// Search behind an exclusive binding through one specific capability.
pub trait SearchExclusiveBy<'a, Cap, P> {
    type Kind: Binding;
    type Handle;

    fn search_exclusive_by(&'a mut self, probe: P) -> Option<Self::Handle>;
}


impl<'a, C, P> SearchExclusiveBy<'a, KeyedCapability, P> for C
where
    C: SearchMutBy<KeyedCapability, P>,
    <C as SearchBy<KeyedCapability, P>>::Element: 'a,
{
    type Kind = MutableKind;
    type Handle = &'a mut <C as SearchBy<KeyedCapability, P>>::Element;

    fn search_exclusive_by(&'a mut self, probe: P) -> Option<Self::Handle> {
        <C as SearchMutBy<KeyedCapability, P>>::search_mut_by(self, probe)
    }
}


/// Set members stay read-only even behind `&mut`.
impl<'a, C, P> SearchExclusiveBy<'a, MembershipCapability, P> for C
where
    C: SearchBy<MembershipCapability, P>,
    <C as SearchBy<MembershipCapability, P>>::Element: 'a,
{
    type Kind = ReadOnlyKind;
    type Handle = &'a <C as SearchBy<MembershipCapability, P>>::Element;

    fn search_exclusive_by(&'a mut self, probe: P) -> Option<Self::Handle> {
        <C as SearchBy<MembershipCapability, P>>::search_by(self, probe)
    }
}


impl<'a, C, P> SearchExclusiveBy<'a, PredicateCapability, P> for C
where
    C: SearchMutBy<PredicateCapability, P>,
    <C as SearchBy<PredicateCapability, P>>::Element: 'a,
{
    type Kind = MutableKind;
    type Handle = &'a mut <C as SearchBy<PredicateCapability, P>>::Element;

    fn search_exclusive_by(&'a mut self, probe: P) -> Option<Self::Handle> {
        <C as SearchMutBy<PredicateCapability, P>>::search_mut_by(self, probe)
    }
}


/// Uniform present/absent query.
pub trait Search<P> {
    type Element;

    /// Looks up the element matching `probe` in a single traversal.
    ///
    /// # Returns
    /// Reference to the stored element or [`None`] if nothing matches.
    fn search(&self, probe: P) -> Option<&Self::Element>;

    /// Moves the element matching `probe` out of the collection.
    ///
    /// The collection stays valid, but which elements remain (and in which order) is unspecified.
    fn take(&mut self, probe: P) -> Option<Self::Element>;
}


/// Uniform present/absent query that hands out mutable references.
///
/// Not implemented for [`Membership`] collections, since set members must not change in place.
pub trait SearchMut<P>: Search<P> {
    fn search_mut(&mut self, probe: P) -> Option<&mut Self::Element>;
}


impl<'q, C, Q> Search<&'q Q> for C
where
    C: Collection + SearchBy<<C as Collection>::Capability, &'q Q>,
    Q: ?Sized,
{
    type Element = <C as SearchBy<<C as Collection>::Capability, &'q Q>>::Element;

    fn search(&self, probe: &'q Q) -> Option<&Self::Element> {
        trace!("{} search in {}", capability_of::<C>(), type_name::<C>());
        <C as SearchBy<C::Capability, &'q Q>>::search_by(self, probe)
    }

    fn take(&mut self, probe: &'q Q) -> Option<Self::Element> {
        trace!("{} take from {}", capability_of::<C>(), type_name::<C>());
        <C as SearchBy<C::Capability, &'q Q>>::take_by(self, probe)
    }
}


impl<'q, C, Q> SearchMut<&'q Q> for C
where
    C: Collection + SearchMutBy<<C as Collection>::Capability, &'q Q>,
    Q: ?Sized,
{
    fn search_mut(&mut self, probe: &'q Q) -> Option<&mut Self::Element> {
        trace!("{} mutable search in {}", capability_of::<C>(), type_name::<C>());
        <C as SearchMutBy<C::Capability, &'q Q>>::search_mut_by(self, probe)
    }
}


/// Search behind an exclusive (`&mut`) binding.
///
/// Hands out `&mut` handles and reports a [`MutableKind`] binding, except for [`Membership`]
/// collections: their members are handed out as `&` and the binding counts as read-only.
pub trait SearchExclusive<'a, P> {
    type Kind: Binding;
    type Handle;

    fn search_exclusive(&'a mut self, probe: P) -> Option<Self::Handle>;
}


impl<'a, 'q, C, Q> SearchExclusive<'a, &'q Q> for C
where
    C: Collection + SearchExclusiveBy<'a, <C as Collection>::Capability, &'q Q>,
    Q: ?Sized,
{
    type Kind = <C as SearchExclusiveBy<'a, C::Capability, &'q Q>>::Kind;
    type Handle = <C as SearchExclusiveBy<'a, C::Capability, &'q Q>>::Handle;

    fn search_exclusive(&'a mut self, probe: &'q Q) -> Option<Self::Handle> {
        trace!("{} exclusive search in {}", capability_of::<C>(), type_name::<C>());
        <C as SearchExclusiveBy<'a, C::Capability, &'q Q>>::search_exclusive_by(self, probe)
    }
}


impl<C, F> Search<Matching<F>> for C
where
    C: PredicateSearchable,
    F: FnMut(&C::Item) -> bool,
{
    type Element = C::Item;

    fn search(&self, probe: Matching<F>) -> Option<&Self::Element> {
        trace!("predicate search in {}", type_name::<C>());
        self.find_first(probe.0)
    }

    fn take(&mut self, probe: Matching<F>) -> Option<Self::Element> {
        trace!("predicate take from {}", type_name::<C>());
        self.take_first(probe.0)
    }
}


impl<C, F> SearchMut<Matching<F>> for C
where
    C: PredicateSearchable,
    F: FnMut(&C::Item) -> bool,
{
    fn search_mut(&mut self, probe: Matching<F>) -> Option<&mut Self::Element> {
        trace!("predicate mutable search in {}", type_name::<C>());
        self.find_first_mut(probe.0)
    }
}


impl<'a, C, F> SearchExclusive<'a, Matching<F>> for C
where
    C: PredicateSearchable,
    C::Item: 'a,
    F: FnMut(&C::Item) -> bool,
{
    type Kind = MutableKind;
    type Handle = &'a mut C::Item;

    fn search_exclusive(&'a mut self, probe: Matching<F>) -> Option<Self::Handle> {
        trace!("predicate exclusive search in {}", type_name::<C>());
        self.find_first_mut(probe.0)
    }
}


#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

    use super::*;

    /// Association list that supports both keyed lookup and predicate scans over its pairs.
    struct PairList<K, V>(Vec<(K, V)>);

    impl<K: PartialEq, V> Keyed<K> for PairList<K, V> {
        type Value = V;

        fn find_key(&self, key: &K) -> Option<&V> {
            self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn find_key_mut(&mut self, key: &K) -> Option<&mut V> {
            self.0.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
        }

        fn take_key(&mut self, key: &K) -> Option<V> {
            let index = self.0.iter().position(|(k, _)| k == key)?;
            Some(self.0.swap_remove(index).1)
        }
    }

    impl<K, V> PredicateSearchable for PairList<K, V> {
        type Item = (K, V);

        fn find_first<F>(&self, predicate: F) -> Option<&(K, V)>
        where F: FnMut(&(K, V)) -> bool
        {
            self.0.find_first(predicate)
        }

        fn find_first_mut<F>(&mut self, predicate: F) -> Option<&mut (K, V)>
        where F: FnMut(&(K, V)) -> bool
        {
            self.0.find_first_mut(predicate)
        }

        fn take_first<F>(&mut self, predicate: F) -> Option<(K, V)>
        where F: FnMut(&(K, V)) -> bool
        {
            self.0.take_first(predicate)
        }
    }

    impl<K, V> Collection for PairList<K, V> {
        type Capability = KeyedCapability;
    }

    fn most_specific<const N: usize>(capabilities: [Capability; N]) -> Option<Capability> {
        capabilities.into_iter().min()
    }

    #[test]
    fn test_capability_priority() {
        assert!(Capability::Keyed < Capability::Membership);
        assert!(Capability::Membership < Capability::Predicate);
        assert_eq!(most_specific([]), None);
    }

    #[test]
    fn test_capability_of() {
        assert_eq!(
            Some(capability_of::<PairList<u8, u8>>()),
            most_specific([Capability::Predicate, Capability::Keyed]),
        );
        assert_eq!(capability_of::<HashMap<u8, u8>>(), Capability::Keyed);
        assert_eq!(capability_of::<BTreeSet<u8>>(), Capability::Membership);
        assert_eq!(capability_of::<VecDeque<u8>>(), Capability::Predicate);
    }

    #[test]
    fn test_keyed_preferred_over_predicate() {
        let mut pairs = PairList(vec![("a", 1), ("b", 2)]);
        let found: Option<&i32> = pairs.search(&"b");
        assert_eq!(found, Some(&2));
        assert!(std::ptr::eq(found.unwrap(), &pairs.0[1].1));

        let scanned = pairs.search(matching(|pair: &(&'static str, i32)| pair.1 == 1));
        assert_eq!(scanned, Some(&("a", 1)));

        *pairs.search_mut(&"a").unwrap() = 10;
        assert_eq!(pairs.take(&"a"), Some(10));
        assert_eq!(pairs.search(&"a"), None);
    }

    #[test]
    fn test_search_map() {
        let mut hash_map = HashMap::from([("x".to_owned(), 1), ("y".to_owned(), 2)]);
        assert_eq!(hash_map.search("x"), Some(&1));
        assert_eq!(hash_map.search("z"), None);
        *hash_map.search_mut("y").unwrap() += 40;
        assert_eq!(hash_map.take("y"), Some(42));
        assert_eq!(hash_map.len(), 1);

        let btree_map = BTreeMap::from([(3, 'c'), (1, 'a')]);
        assert_eq!(btree_map.search(&1), Some(&'a'));
        assert_eq!(btree_map.search(&2), None);
    }

    #[test]
    fn test_search_set() {
        let mut hash_set = HashSet::from(["one".to_owned(), "two".to_owned()]);
        let stored = hash_set.get("two").unwrap() as *const String;
        assert!(std::ptr::eq(hash_set.search("two").unwrap(), stored));
        assert_eq!(hash_set.search("three"), None);
        assert_eq!(hash_set.take("one"), Some("one".to_owned()));
        assert_eq!(hash_set.len(), 1);

        let btree_set = BTreeSet::from([5, 7]);
        assert_eq!(btree_set.search(&7), Some(&7));
        assert_eq!(btree_set.search(&6), None);
    }

    #[test]
    fn test_search_sequence() {
        let mut vec = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        assert!(std::ptr::eq(vec.search("b").unwrap(), &vec[1]));
        assert_eq!(vec.search("d"), None);
        vec.search_mut("c").unwrap().push('!');
        assert_eq!(vec.take(matching(|s: &String| s.ends_with('!'))), Some("c!".to_owned()));
        assert_eq!(vec.len(), 2);

        let deque = VecDeque::from([1, 2, 3]);
        assert_eq!(deque.search(matching(|n: &i32| n % 2 == 0)), Some(&2));
        assert_eq!(deque.search(&4), None);
    }
}
