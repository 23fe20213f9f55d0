//! Binding kinds of call-site arguments and the result shape deduced from them.
//!
//! The [`ResultShape::resolve`] table is the runtime mirror of what the type-level
//! [`Resolve`](crate::resolve::Resolve) implementations pick as output types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// How an argument was handed to a lookup.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// Passed by value. The callee may take ownership of parts of it.
    Temporary,
    /// Passed as `&mut`.
    NamedMutable,
    /// Passed as `&`.
    NamedReadOnly,
}


impl BindingKind {
    pub const ALL: [BindingKind; 3] = [
        BindingKind::Temporary,
        BindingKind::NamedMutable,
        BindingKind::NamedReadOnly,
    ];

    /// Whether the caller keeps the argument after the call.
    pub const fn is_named(self) -> bool {
        return !matches!(self, BindingKind::Temporary);
    }

    pub const fn is_read_only(self) -> bool {
        return matches!(self, BindingKind::NamedReadOnly);
    }

    fn as_str(&self) -> &'static str {
        match self {
            BindingKind::Temporary => "temporary",
            BindingKind::NamedMutable => "named_mutable",
            BindingKind::NamedReadOnly => "named_read_only",
        }
    }
}


impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl FromStr for BindingKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BindingKind::ALL.into_iter()
                        .find(|kind| kind.as_str() == s)
                        .ok_or_else(|| ParseError::UnknownBindingKind(s.to_owned()))
    }
}


/// Output contract of a lookup-or-default call.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// `&E`
    BorrowReadOnly,
    /// `&mut E`
    BorrowMutable,
    /// `E`
    Owned,
}


impl ResultShape {
    pub const ALL: [ResultShape; 3] = [
        ResultShape::BorrowReadOnly,
        ResultShape::BorrowMutable,
        ResultShape::Owned,
    ];

    /// Deduces the result shape from the binding kinds of the collection and the default.
    ///
    /// The result is owned unless both arguments are named. If both are named, the result is a
    /// borrow, read-only as soon as either of them is read-only.
    ///
    /// # Arguments
    /// - `collection` - Binding kind of the collection argument.
    /// - `default` - Binding kind of the default argument.
    ///
    /// # Returns
    /// One of the three shapes. Never depends on whether the lookup hits.
    pub const fn resolve(collection: BindingKind, default: BindingKind) -> Self {
        use BindingKind::*;

        match (collection, default) {
            (Temporary, _) | (_, Temporary) => ResultShape::Owned,
            (NamedMutable, NamedMutable) => ResultShape::BorrowMutable,
            (NamedReadOnly, NamedMutable)
            | (NamedMutable, NamedReadOnly)
            | (NamedReadOnly, NamedReadOnly) => ResultShape::BorrowReadOnly,
        }
    }

    /// All nine rows of the [`ResultShape::resolve`] table, collection kind major.
    pub fn table() -> Vec<ShapeRule> {
        let mut rules = Vec::with_capacity(9);
        for collection in BindingKind::ALL {
            for default in BindingKind::ALL {
                rules.push(ShapeRule { collection, default, shape: Self::resolve(collection, default) });
            }
        }
        return rules;
    }

    pub const fn is_borrow(self) -> bool {
        return !matches!(self, ResultShape::Owned);
    }

    pub const fn is_read_only(self) -> bool {
        return matches!(self, ResultShape::BorrowReadOnly);
    }

    fn as_str(&self) -> &'static str {
        match self {
            ResultShape::BorrowReadOnly => "borrow_read_only",
            ResultShape::BorrowMutable => "borrow_mutable",
            ResultShape::Owned => "owned",
        }
    }
}


impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl FromStr for ResultShape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultShape::ALL.into_iter()
                        .find(|shape| shape.as_str() == s)
                        .ok_or_else(|| ParseError::UnknownResultShape(s.to_owned()))
    }
}


/// One row of the shape table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShapeRule {
    pub collection: BindingKind,
    pub default: BindingKind,
    pub shape: ResultShape,
}


/// Error that may occur when parsing a [`BindingKind`] or a [`ResultShape`] from its name.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("unknown binding kind `{0}`")]
    UnknownBindingKind(String),
    #[error("unknown result shape `{0}`")]
    UnknownResultShape(String),
}


/// Type-level binding kind.
pub trait Binding {
    const KIND: BindingKind;
}


/// Marker for [`BindingKind::Temporary`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TemporaryKind;

/// Marker for [`BindingKind::NamedMutable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MutableKind;

/// Marker for [`BindingKind::NamedReadOnly`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadOnlyKind;


impl Binding for TemporaryKind {
    const KIND: BindingKind = BindingKind::Temporary;
}

impl Binding for MutableKind {
    const KIND: BindingKind = BindingKind::NamedMutable;
}

impl Binding for ReadOnlyKind {
    const KIND: BindingKind = BindingKind::NamedReadOnly;
}


/// A `(collection, default)` pair of binding markers and the shape it resolves to.
pub trait KindPair {
    const SHAPE: ResultShape;
}


impl<C: Binding, D: Binding> KindPair for (C, D) {
    const SHAPE: ResultShape = ResultShape::resolve(C::KIND, D::KIND);
}
