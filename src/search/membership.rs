//! Definition of the [`Membership`] capability and its implementations for the standard sets.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::search::{Collection, MembershipCapability, SearchBy};


/// Set-like collections: lookup of the stored member equal to a probe value.
///
/// Members are only ever handed out by shared reference. Changing a member in place could break
/// the ordering or hashing invariants of the set.
pub trait Membership<Q: ?Sized> {
    type Member;

    fn find_member(&self, value: &Q) -> Option<&Self::Member>;

    fn take_member(&mut self, value: &Q) -> Option<Self::Member>;
}


impl<T, S, Q> Membership<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Member = T;

    fn find_member(&self, value: &Q) -> Option<&T> {
        HashSet::get(self, value)
    }

    fn take_member(&mut self, value: &Q) -> Option<T> {
        HashSet::take(self, value)
    }
}


impl<T, Q> Membership<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Member = T;

    fn find_member(&self, value: &Q) -> Option<&T> {
        BTreeSet::get(self, value)
    }

    fn take_member(&mut self, value: &Q) -> Option<T> {
        BTreeSet::take(self, value)
    }
}


impl<T, S> Collection for HashSet<T, S> {
    type Capability = MembershipCapability;
}

impl<T> Collection for BTreeSet<T> {
    type Capability = MembershipCapability;
}


impl<'q, C, Q> SearchBy<MembershipCapability, &'q Q> for C
where
    C: Membership<Q>,
    Q: ?Sized,
{
    type Element = C::Member;

    fn search_by(&self, value: &'q Q) -> Option<&C::Member> {
        self.find_member(value)
    }

    fn take_by(&mut self, value: &'q Q) -> Option<C::Member> {
        self.take_member(value)
    }
}
