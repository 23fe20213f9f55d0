//! Type-level return-shape deduction.
//!
//! [`Resolve`] is implemented once for each of the nine `(collection, default)` pairs of binding
//! markers. Each implementation fixes the output type of
//! [`select_or`](crate::select::select_or) and how a found handle or the default turns into it:
//!
//! | collection \ default | `E` | `&mut E` | `&E` |
//! |---|---|---|---|
//! | `C` (moved in) | `E` | `E` | `E` |
//! | `&mut C` | `E` | `&mut E` | `&E` |
//! | `&C` | `E` | `&E` | `&E` |
//!
//! Values are cloned only where the table asks for `E` and the source is borrowed.

use crate::binding::{Binding, KindPair, MutableKind, ReadOnlyKind, TemporaryKind};


/// Default argument of a lookup for elements of type `E`.
///
/// Only `E` itself (a temporary), `&mut E` and `&E` qualify. Anything else is rejected at
/// compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as the default for elements of type `{E}`",
    label = "incompatible default",
    note = "a default must be `{E}`, `&{E}` or `&mut {E}`"
)]
pub trait DefaultArg<E> {
    type Kind: Binding;
}


impl<E> DefaultArg<E> for E {
    type Kind = TemporaryKind;
}

impl<'d, E> DefaultArg<E> for &'d mut E {
    type Kind = MutableKind;
}

impl<'d, E> DefaultArg<E> for &'d E {
    type Kind = ReadOnlyKind;
}


/// Output type of a lookup, resolved from the binding markers of its arguments.
///
/// # Type parameters
/// - `E` - Element type of the collection.
/// - `Found` - Handle type produced by the collection on a hit.
/// - `Default` - Type of the default argument.
pub trait Resolve<E, Found, Default>: KindPair {
    type Output;

    /// Turns the handle of a found element into the output.
    fn found(found: Found) -> Self::Output;

    /// Turns the default into the output.
    fn fallback(default: Default) -> Self::Output;
}


impl<E> Resolve<E, E, E> for (TemporaryKind, TemporaryKind) {
    type Output = E;

    fn found(found: E) -> E {
        found
    }

    fn fallback(default: E) -> E {
        default
    }
}


impl<'d, E: Clone> Resolve<E, E, &'d mut E> for (TemporaryKind, MutableKind) {
    type Output = E;

    fn found(found: E) -> E {
        found
    }

    fn fallback(default: &'d mut E) -> E {
        E::clone(default)
    }
}


impl<'d, E: Clone> Resolve<E, E, &'d E> for (TemporaryKind, ReadOnlyKind) {
    type Output = E;

    fn found(found: E) -> E {
        found
    }

    fn fallback(default: &'d E) -> E {
        E::clone(default)
    }
}


impl<'a, E: Clone> Resolve<E, &'a mut E, E> for (MutableKind, TemporaryKind) {
    type Output = E;

    fn found(found: &'a mut E) -> E {
        E::clone(found)
    }

    fn fallback(default: E) -> E {
        default
    }
}


impl<'a, 'd: 'a, E: 'a> Resolve<E, &'a mut E, &'d mut E> for (MutableKind, MutableKind) {
    type Output = &'a mut E;

    fn found(found: &'a mut E) -> &'a mut E {
        found
    }

    fn fallback(default: &'d mut E) -> &'a mut E {
        default
    }
}


impl<'a, 'd: 'a, E: 'a> Resolve<E, &'a mut E, &'d E> for (MutableKind, ReadOnlyKind) {
    type Output = &'a E;

    fn found(found: &'a mut E) -> &'a E {
        found
    }

    fn fallback(default: &'d E) -> &'a E {
        default
    }
}


impl<'a, E: Clone> Resolve<E, &'a E, E> for (ReadOnlyKind, TemporaryKind) {
    type Output = E;

    fn found(found: &'a E) -> E {
        E::clone(found)
    }

    fn fallback(default: E) -> E {
        default
    }
}


impl<'a, 'd: 'a, E: 'a> Resolve<E, &'a E, &'d mut E> for (ReadOnlyKind, MutableKind) {
    type Output = &'a E;

    fn found(found: &'a E) -> &'a E {
        found
    }

    fn fallback(default: &'d mut E) -> &'a E {
        default
    }
}


impl<'a, 'd: 'a, E: 'a> Resolve<E, &'a E, &'d E> for (ReadOnlyKind, ReadOnlyKind) {
    type Output = &'a E;

    fn found(found: &'a E) -> &'a E {
        found
    }

    fn fallback(default: &'d E) -> &'a E {
        default
    }
}
