//! Operations over sequences and mappings.
//!
//! Every operation here is a free function over the [`Collection`] trait
//! (or over plain slices where only sequences make sense). Inputs are never
//! mutated, with the deliberate exception of the merge targets of
//! [`extend`] and [`defaults`].
//!
//! # Overview
//!
//! - **Iteration**: [`each`], [`Collection::try_fold`]
//! - **Reduction**: [`reduce`], [`reduce_from`], [`contains`], [`index_of`]
//! - **Predicates**: [`filter`], [`reject`], [`every`], [`some`],
//!   [`every_truthy`], [`some_truthy`]
//! - **Transformations**: [`map`], [`uniq`], [`uniq_by`], [`sort_by`],
//!   [`zip`], [`zip_pair`], [`flatten`], [`flatten_deep`], [`shuffle`],
//!   [`first`], [`first_n`], [`last`], [`last_n`]
//! - **Sets**: [`intersection`], [`difference`]
//! - **Records**: [`pluck`], [`sort_by_field`]
//! - **Merging**: [`extend`], [`defaults`]
//!
//! # Examples
//!
//! ```rust
//! use foldkit::collection::{filter, map, reduce_from, uniq};
//!
//! let values = vec![3, 1, 3, 2, 1];
//! let distinct = uniq(&values, false);
//! let doubled = map(&distinct, |value| value * 2);
//! let large = filter(&doubled, |value| *value > 2);
//! let total = reduce_from(&large, 0, |sum, value| sum + value);
//!
//! assert_eq!(distinct, vec![3, 1, 2]);
//! assert_eq!(large, vec![6, 4]);
//! assert_eq!(total, 10);
//! ```

mod error;
mod iteration;
mod merge;
mod nested;
mod predicate;
mod record;
mod reduction;
mod set;
mod shuffle;
mod transform;

pub use error::{CollectionError, Result};
pub use iteration::{Collection, each};
pub use merge::{Mapping, defaults, extend};
pub use nested::{Nested, flatten, flatten_deep};
pub use predicate::{Truthy, every, every_truthy, filter, reject, some, some_truthy};
pub use record::{Record, pluck, sort_by_field};
pub use reduction::{contains, index_of, reduce, reduce_from};
pub use set::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use transform::{first, first_n, last, last_n, map, sort_by, uniq, uniq_by, zip, zip_pair};
