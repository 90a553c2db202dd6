//! # foldkit
//!
//! Collection operations and function decorators built on a single
//! iteration core.
//!
//! ## Overview
//!
//! - **Collections**: one traversal contract ([`collection::Collection`])
//!   over sequences and mappings, with reduction, predicates,
//!   transformations, set operations and merging expressed on top of it
//! - **Function decorators**: `once`, `memoize`, `delay` and `throttle`,
//!   with the timed ones driven by a pluggable scheduler
//!
//! ## Feature Flags
//!
//! - `collection`: Collection operations
//! - `function`: Function decorators and the virtual scheduler
//! - `async`: A scheduler backed by `tokio::time`
//! - `fxhash`: Use `rustc-hash` for the `memoize` cache
//! - `ahash`: Use `ahash` for the `memoize` cache
//! - `full`: Enable all features except the hasher choices
//!
//! ## Example
//!
//! ```rust
//! use foldkit::prelude::*;
//!
//! let words = vec!["pear", "fig", "apple", "fig"];
//! let distinct = uniq(&words, false);
//! let lengths = map(&distinct, |word| word.len());
//!
//! assert_eq!(distinct, vec!["pear", "fig", "apple"]);
//! assert_eq!(reduce_from(&lengths, 0, |total, length| total + length), 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports everything from the enabled modules.
///
/// # Usage
///
/// ```rust
/// use foldkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;
