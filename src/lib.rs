//! Rust library for selecting elements from collections, or falling back to a default, without
//! copying more than necessary.
//!
//! ```rust
//! use std::collections::HashMap;
//! use select_default::{select_or, select_or_default};
//!
//! let mut config = HashMap::from([("retries", 3_i32)]);
//! let mut fallback = 1_i32;
//!
//! // Both arguments borrowed mutably: the result is a mutable borrow into the map.
//! *select_or(&mut config, "retries", &mut fallback) += 1;
//! assert_eq!(config["retries"], 4);
//!
//! // No explicit default: the shared default of the element type is borrowed.
//! assert_eq!(*select_or_default(&config, "timeout"), 0);
//!
//! // A moved-in collection gives up the element.
//! let retries: i32 = select_or_default(config, "retries");
//! assert_eq!(retries, 4);
//! ```

pub mod binding;
pub mod resolve;
pub mod search;
pub mod select;
pub mod source;
pub mod utils;

pub use binding::{BindingKind, ResultShape};
pub use search::{matching, Search, SearchMut};
pub use select::{select, select_if, select_or, select_or_default, select_or_into};
pub use utils::default_registry::default_of;
