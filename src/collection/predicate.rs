//! Truth-test operations: [`filter`], [`reject`], [`every`], [`some`].
//!
//! `filter` and `reject` are complements: for any predicate every value
//! lands in exactly one of the two results, in its original order.
//!
//! The `_truthy` variants use the value's own [`Truthy`] interpretation as
//! the default predicate.

use std::ops::ControlFlow;

use super::iteration::{Collection, settle};
use super::reduction::reduce_from;

/// Values that have a boolean reading of their own.
///
/// Zero numbers, `false`, `None`, empty strings and empty vectors read as
/// false; everything else reads as true.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(false).is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns the boolean reading of `self`.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Returns the values that pass `test`, in collection order.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<C, P>(collection: &C, mut test: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    reduce_from(collection, Vec::new(), |mut results, value| {
        if test(value) {
            results.push(value.clone());
        }
        results
    })
}

/// Returns the values that fail `test`, in collection order.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P>(collection: &C, mut test: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    filter(collection, |value| !test(value))
}

/// Returns whether `predicate` holds for every value.
///
/// Vacuously true for an empty collection. Stops at the first failure.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[2, 3], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    settle(collection.try_fold(true, |_, value, _, _| {
        if predicate(value) {
            ControlFlow::Continue(true)
        } else {
            ControlFlow::Break(false)
        }
    }))
}

/// Returns whether `predicate` holds for at least one value.
///
/// Vacuously false for an empty collection. Stops at the first success.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::some;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    settle(collection.try_fold(false, |_, value, _, _| {
        if predicate(value) {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(false)
        }
    }))
}

/// [`every`] with each value's own truthiness as the predicate.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// [`some`] with each value's own truthiness as the predicate.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::some_truthy;
///
/// assert!(some_truthy(&[0, 0, 3]));
/// assert!(!some_truthy(&["", ""]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, Truthy::is_truthy)
}
