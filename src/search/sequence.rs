//! Definition of the [`PredicateSearchable`] capability, the [`Matching`] probe and the
//! implementations for the standard sequences.

use std::collections::VecDeque;

use crate::search::{Collection, PredicateCapability, SearchBy, SearchMutBy};


/// Sequence-like collections: the first element satisfying a predicate, found in one linear pass.
pub trait PredicateSearchable {
    type Item;

    fn find_first<F>(&self, predicate: F) -> Option<&Self::Item>
    where F: FnMut(&Self::Item) -> bool;

    fn find_first_mut<F>(&mut self, predicate: F) -> Option<&mut Self::Item>
    where F: FnMut(&Self::Item) -> bool;

    /// Removes the first matching element and returns it. The order of the remaining elements
    /// is unspecified afterwards.
    fn take_first<F>(&mut self, predicate: F) -> Option<Self::Item>
    where F: FnMut(&Self::Item) -> bool;
}


/// Predicate probe for [`Search`](crate::search::Search).
#[derive(Clone, Copy, Debug)]
pub struct Matching<F>(pub F);


/// Wraps `predicate` into a [`Matching`] probe.
pub fn matching<F>(predicate: F) -> Matching<F> {
    Matching(predicate)
}


impl<T> PredicateSearchable for Vec<T> {
    type Item = T;

    fn find_first<F>(&self, predicate: F) -> Option<&T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        self.get(index)
    }

    fn find_first_mut<F>(&mut self, predicate: F) -> Option<&mut T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        self.get_mut(index)
    }

    fn take_first<F>(&mut self, predicate: F) -> Option<T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        Some(self.swap_remove(index))
    }
}


impl<T> PredicateSearchable for VecDeque<T> {
    type Item = T;

    fn find_first<F>(&self, predicate: F) -> Option<&T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        self.get(index)
    }

    fn find_first_mut<F>(&mut self, predicate: F) -> Option<&mut T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        self.get_mut(index)
    }

    fn take_first<F>(&mut self, predicate: F) -> Option<T>
    where F: FnMut(&T) -> bool
    {
        let index = self.iter().position(predicate)?;
        self.swap_remove_back(index)
    }
}


impl<T> Collection for Vec<T> {
    type Capability = PredicateCapability;
}

impl<T> Collection for VecDeque<T> {
    type Capability = PredicateCapability;
}


/// A reference probe on a sequence searches for the first element equal to it.
impl<'q, C, Q> SearchBy<PredicateCapability, &'q Q> for C
where
    C: PredicateSearchable,
    C::Item: PartialEq<Q>,
    Q: ?Sized,
{
    type Element = C::Item;

    fn search_by(&self, value: &'q Q) -> Option<&C::Item> {
        self.find_first(|item| item == value)
    }

    fn take_by(&mut self, value: &'q Q) -> Option<C::Item> {
        self.take_first(|item| item == value)
    }
}


impl<'q, C, Q> SearchMutBy<PredicateCapability, &'q Q> for C
where
    C: PredicateSearchable,
    C::Item: PartialEq<Q>,
    Q: ?Sized,
{
    fn search_mut_by(&mut self, value: &'q Q) -> Option<&mut C::Item> {
        self.find_first_mut(|item| item == value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_single_pass() {
        let vec = vec![3, 4, 5, 6];
        let mut calls = 0;
        let found = vec.find_first(|n| {
            calls += 1;
            n % 2 == 0
        });
        assert_eq!(found, Some(&4));
        assert_eq!(calls, 2);

        let mut calls = 0;
        assert_eq!(vec.find_first(|_| { calls += 1; false }), None);
        assert_eq!(calls, vec.len());
    }

    #[test]
    fn test_find_first_mut() {
        let mut deque = VecDeque::from(["a".to_owned(), "b".to_owned()]);
        deque.find_first_mut(|s| s == "b").unwrap().push('b');
        assert_eq!(deque, ["a", "bb"]);
    }

    #[test]
    fn test_take_first_leaves_valid_remnant() {
        let mut vec = vec![1, 2, 3, 4];
        assert_eq!(vec.take_first(|n| *n == 2), Some(2));
        assert_eq!(vec.len(), 3);
        let mut remaining = vec.clone();
        remaining.sort();
        assert_eq!(remaining, [1, 3, 4]);

        let mut deque = VecDeque::from([1, 2, 3]);
        assert_eq!(deque.take_first(|n| *n == 1), Some(1));
        assert_eq!(deque.take_first(|n| *n == 1), None);
        assert_eq!(deque.len(), 2);
    }
}
