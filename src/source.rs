//! Definition of the [`Source`] trait, which classifies the collection argument of a lookup.
//!
//! - `&C` is a named read-only binding and yields `&E` handles,
//! - `&mut C` is a named mutable binding and yields `&mut E` handles. Sets are the exception:
//!   their members are only ever handed out as `&E`, so a `&mut` set counts as read-only,
//! - an owned standard collection is a temporary and yields `E`, moved out of it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::binding::{Binding, ReadOnlyKind, TemporaryKind};
use crate::search::{Search, SearchExclusive};


/// Collection argument of a lookup, together with its binding kind.
pub trait Source<P> {
    /// Element type stored in the collection.
    type Element;

    /// Binding kind marker of the argument.
    type Kind: Binding;

    /// Handle produced on a hit: `&Element`, `&mut Element` or `Element`.
    type Found;

    /// Searches the collection for `probe`, consuming the binding.
    ///
    /// For a temporary the matching element is moved out first and the rest of the collection
    /// is dropped afterwards.
    fn select(self, probe: P) -> Option<Self::Found>;
}


impl<'a, M, P> Source<P> for &'a M
where
    M: Search<P>,
    <M as Search<P>>::Element: 'a,
{
    type Element = <M as Search<P>>::Element;
    type Kind = ReadOnlyKind;
    type Found = &'a <M as Search<P>>::Element;

    fn select(self, probe: P) -> Option<Self::Found> {
        self.search(probe)
    }
}


impl<'a, M, P> Source<P> for &'a mut M
where
    M: Search<P> + SearchExclusive<'a, P>,
{
    type Element = <M as Search<P>>::Element;
    type Kind = <M as SearchExclusive<'a, P>>::Kind;
    type Found = <M as SearchExclusive<'a, P>>::Handle;

    fn select(self, probe: P) -> Option<Self::Found> {
        self.search_exclusive(probe)
    }
}


macro_rules! temporary_source {
    ($($collection:ident<$($param:ident),+>),+ $(,)?) => {$(
        impl<P, $($param),+> Source<P> for $collection<$($param),+>
        where
            Self: Search<P>,
        {
            type Element = <Self as Search<P>>::Element;
            type Kind = TemporaryKind;
            type Found = <Self as Search<P>>::Element;

            fn select(mut self, probe: P) -> Option<Self::Found> {
                <Self as Search<P>>::take(&mut self, probe)
            }
        }
    )+};
}

temporary_source!(
    HashMap<K, V, S>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    BTreeSet<T>,
    Vec<T>,
    VecDeque<T>,
);
