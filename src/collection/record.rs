//! Named-field access for string-keyed records.
//!
//! [`pluck`] and [`sort_by_field`] are the field-name forms of [`map`] and
//! [`sort_by`]: instead of a callback they take the name of a field to read
//! from every record.
//!
//! [`map`]: super::map
//! [`sort_by`]: super::sort_by

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::iteration::Collection;
use super::transform::{map, sort_by};

/// A value whose fields can be looked up by name.
pub trait Record {
    /// The type of every field.
    type Field;

    /// Returns the field called `name`, if present.
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Field = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Field = V;

    #[inline]
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Reads the field called `name` from every record.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", 1), ("age", 30)]),
///     HashMap::from([("name", 2)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(30), None]);
/// ```
pub fn pluck<C>(records: &C, name: &str) -> Vec<Option<<C::Value as Record>::Field>>
where
    C: Collection + ?Sized,
    C::Value: Record,
    <C::Value as Record>::Field: Clone,
{
    map(records, |record| record.field(name).cloned())
}

/// Sorts records ascending by the field called `name`.
///
/// Records without the field sort before all others. The sort is stable.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::sort_by_field;
/// use std::collections::BTreeMap;
///
/// let rows = vec![
///     BTreeMap::from([("k", 2), ("id", 0)]),
///     BTreeMap::from([("k", 1), ("id", 1)]),
///     BTreeMap::from([("id", 2)]),
/// ];
/// let sorted = sort_by_field(&rows, "k");
/// let ids: Vec<_> = sorted.iter().map(|row| row["id"]).collect();
/// assert_eq!(ids, vec![2, 1, 0]);
/// ```
pub fn sort_by_field<C>(records: &C, name: &str) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Record + Clone,
    <C::Value as Record>::Field: Ord + Clone,
{
    sort_by(records, |record| record.field(name).cloned())
}
