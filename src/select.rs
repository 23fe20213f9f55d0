//! Lookup operations: plain [`select`], predicate [`select_if`] and the lookup-or-default
//! combinators [`select_or`], [`select_or_into`] and [`select_or_default`].
//!
//! How the collection is passed decides what comes back:
//! `&collection` borrows, `&mut collection` borrows mutably (sets: read-only) and an owned
//! collection gives up the matching element by move.

use std::any::type_name;

use log::trace;

use crate::binding::{KindPair, ReadOnlyKind, TemporaryKind};
use crate::resolve::{DefaultArg, Resolve};
use crate::search::Matching;
use crate::source::Source;
use crate::utils::default_registry::{default_of, StaticDefault};


/// Selects the element matching `probe` from `collection`.
///
/// # Arguments
/// - `collection` - `&C`, `&mut C` or an owned collection.
/// - `probe` - Key, value or [`Matching`] predicate, depending on the collection.
///
/// # Returns
/// [`None`] if nothing matches. Otherwise `&E`, `&mut E` or `E` according to how `collection`
/// was passed.
pub fn select<C, P>(collection: C, probe: P) -> Option<C::Found>
where
    C: Source<P>,
{
    collection.select(probe)
}


/// Selects the first element of a sequence satisfying `predicate`.
///
/// # Example
/// ```rust
/// use select_default::select_if;
///
/// let mut numbers = vec![1, 4, 9];
/// if let Some(square) = select_if(&mut numbers, |n: &i32| *n > 3) {
///     *square += 1;
/// }
/// assert_eq!(numbers, [1, 5, 9]);
/// assert_eq!(select_if(&numbers, |n: &i32| *n > 10), None);
/// ```
pub fn select_if<C, F>(collection: C, predicate: F) -> Option<C::Found>
where
    C: Source<Matching<F>>,
{
    collection.select(Matching(predicate))
}


/// Selects the element matching `probe` from `collection`, or falls back to `default`.
///
/// The result is a reference if both `collection` and `default` are references, and a shared
/// reference as soon as either of them is one. In every other case an owned value is returned:
/// - an element found in an owned collection is moved out of it,
/// - an element found in a borrowed collection is cloned,
/// - an owned default is moved,
/// - a borrowed default is cloned.
///
/// # Arguments
/// - `collection` - `&C`, `&mut C` or an owned collection.
/// - `probe` - Key, value or [`Matching`] predicate, depending on the collection.
/// - `default` - `E`, `&mut E` or `&E` for element type `E`.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use select_default::select_or;
///
/// let mut ports = HashMap::from([("http", 80_u16)]);
/// let mut fallback = 0_u16;
/// *select_or(&mut ports, "http", &mut fallback) += 8000;
/// assert_eq!(ports["http"], 8080);
///
/// let owned: u16 = select_or(ports, "ssh", 22);
/// assert_eq!(owned, 22);
/// ```
///
/// A shared reference on either side makes the result read-only:
/// ```compile_fail
/// use std::collections::HashMap;
/// use select_default::select_or;
///
/// let ports = HashMap::from([("http", 80)]);
/// let mut fallback = 0;
/// *select_or(&ports, "http", &mut fallback) += 1;
/// ```
///
/// Defaults of any other type than the element type are rejected:
/// ```compile_fail
/// use std::collections::HashMap;
/// use select_default::select_or;
///
/// let names: HashMap<u8, String> = HashMap::new();
/// let _ = select_or(&names, &0, 42_u32);
/// ```
pub fn select_or<C, P, D>(
    collection: C,
    probe: P,
    default: D,
) -> <(C::Kind, D::Kind) as Resolve<C::Element, C::Found, D>>::Output
where
    C: Source<P>,
    D: DefaultArg<C::Element>,
    (C::Kind, D::Kind): Resolve<C::Element, C::Found, D>,
{
    let shape = <(C::Kind, D::Kind) as KindPair>::SHAPE;
    match collection.select(probe) {
        Some(found) => {
            trace!("select_or hit in {}, result {}", type_name::<C>(), shape);
            return <(C::Kind, D::Kind) as Resolve<C::Element, C::Found, D>>::found(found);
        }
        None => {
            trace!("select_or miss in {}, result {}", type_name::<C>(), shape);
            return <(C::Kind, D::Kind) as Resolve<C::Element, C::Found, D>>::fallback(default);
        }
    }
}


/// Selects the element matching `probe` from `collection`, or falls back to a default of any
/// type convertible into the element type.
///
/// [`select_or`] only takes `E`, `&E` or `&mut E` as a default. This variant takes anything that
/// is `Into<E>` and always returns an owned `E`, as [`select_or`] does for a temporary default.
/// The conversion only runs on a miss.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use select_default::select_or_into;
///
/// let hosts = HashMap::from([("local".to_owned(), "127.0.0.1".to_owned())]);
/// let remote: String = select_or_into(&hosts, "remote", "0.0.0.0");
/// assert_eq!(remote, "0.0.0.0");
/// let local: String = select_or_into(hosts, "local", "0.0.0.0");
/// assert_eq!(local, "127.0.0.1");
/// ```
pub fn select_or_into<C, P, D>(collection: C, probe: P, default: D) -> C::Element
where
    C: Source<P>,
    D: Into<C::Element>,
    (C::Kind, TemporaryKind): Resolve<C::Element, C::Found, C::Element, Output = C::Element>,
{
    match collection.select(probe) {
        Some(found) => {
            trace!("select_or_into hit in {}", type_name::<C>());
            return <(C::Kind, TemporaryKind) as Resolve<C::Element, C::Found, C::Element>>
                ::found(found);
        }
        None => {
            trace!("select_or_into miss in {}", type_name::<C>());
            return default.into();
        }
    }
}


/// Selects the element matching `probe` from `collection`, or falls back to the shared default
/// of the element type.
///
/// The shared default takes the place of a `&E` default in [`select_or`]. Hence, the result is
/// always a shared reference if `collection` is a reference, and an owned value otherwise.
///
/// # Example
/// ```rust
/// use std::collections::BTreeMap;
/// use select_default::select_or_default;
///
/// let names = BTreeMap::from([(1, "one".to_owned())]);
/// assert_eq!(select_or_default(&names, &1), "one");
/// let first = select_or_default(&names, &2) as *const String;
/// let second = select_or_default(&names, &3) as *const String;
/// assert_eq!(first, second);
/// ```
pub fn select_or_default<C, P>(
    collection: C,
    probe: P,
) -> <(C::Kind, ReadOnlyKind) as Resolve<C::Element, C::Found, &'static C::Element>>::Output
where
    C: Source<P>,
    C::Element: StaticDefault,
    (C::Kind, ReadOnlyKind): Resolve<C::Element, C::Found, &'static C::Element>,
{
    let shape = <(C::Kind, ReadOnlyKind) as KindPair>::SHAPE;
    match collection.select(probe) {
        Some(found) => {
            trace!("select_or_default hit in {}, result {}", type_name::<C>(), shape);
            return <(C::Kind, ReadOnlyKind) as Resolve<C::Element, C::Found, &'static C::Element>>
                ::found(found);
        }
        None => {
            trace!("select_or_default miss in {}, result {}", type_name::<C>(), shape);
            return <(C::Kind, ReadOnlyKind) as Resolve<C::Element, C::Found, &'static C::Element>>
                ::fallback(default_of::<C::Element>());
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap, VecDeque};

    use super::*;
    use crate::search::matching;

    #[test]
    fn test_select_binding_forms() {
        let mut map = HashMap::from([(1, 'a')]);
        assert_eq!(select(&map, &1), Some(&'a'));
        assert_eq!(select(&map, &2), None);
        *select(&mut map, &1).unwrap() = 'b';
        assert_eq!(select(map, &1), Some('b'));
    }

    #[test]
    fn test_select_if_first_match() {
        let deque = VecDeque::from([3, 8, 10]);
        let found = select_if(&deque, |n: &i32| n % 2 == 0).unwrap();
        assert!(std::ptr::eq(found, &deque[1]));
        assert_eq!(select_if(deque, |n: &i32| *n > 9), Some(10));
    }

    #[test]
    fn test_select_or_presence_absence() {
        let words = vec!["alpha".to_owned(), "beta".to_owned()];
        let fallback = "none".to_owned();
        assert_eq!(select_or(&words, "beta", &fallback), "beta");
        assert!(std::ptr::eq(select_or(&words, "gamma", &fallback), &fallback));
        assert_eq!(select_or(&words, matching(|w: &String| w.len() == 5), &fallback), "alpha");
    }

    #[test]
    fn test_select_or_owned_results() {
        let set = BTreeSet::from([1, 2]);
        let owned: i32 = select_or(&set, &3, 7);
        assert_eq!(owned, 7);
        let owned: i32 = select_or(&set, &2, 7);
        assert_eq!(owned, 2);
        let owned: i32 = select_or(set, &9, &5);
        assert_eq!(owned, 5);
    }

    #[test]
    fn test_select_or_into_converts_on_miss() {
        let mut names = vec!["ada".to_owned()];
        let found: String = select_or_into(&mut names, "ada", "nobody");
        assert_eq!(found, "ada");
        let missing: String = select_or_into(&names, "grace", "nobody");
        assert_eq!(missing, "nobody");
        let widened: u64 = select_or_into(BTreeSet::from([7_u64]), &8, 9_u32);
        assert_eq!(widened, 9);
    }

    #[test]
    fn test_select_or_default_temporary() {
        let map = HashMap::from([("k", vec![1, 2])]);
        let missing: Vec<i32> = select_or_default(map.clone(), "x");
        assert!(missing.is_empty());
        let found: Vec<i32> = select_or_default(map, "k");
        assert_eq!(found, [1, 2]);
    }
}
