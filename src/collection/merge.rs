//! Merging mappings into a target: [`extend`] and [`defaults`].
//!
//! These are the only operations in the crate that mutate an argument. The
//! target is updated in place and handed back for chaining.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::iteration::Collection;

/// A mapping that can be read entry by entry and written to.
pub trait Mapping: Collection {
    /// The owned key type.
    type MapKey;

    /// Returns every `(key, value)` entry in enumeration order.
    fn entries(&self) -> impl Iterator<Item = (&Self::MapKey, &Self::Value)>;

    /// Returns whether `key` is present.
    fn contains_key(&self, key: &Self::MapKey) -> bool;

    /// Stores `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: Self::MapKey, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type MapKey = K;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type MapKey = K;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }
}

/// Copies every entry of each source into `target`, left to right.
///
/// Later sources overwrite earlier ones and any entry already in `target`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::extend;
/// use std::collections::BTreeMap;
///
/// let mut settings = BTreeMap::from([("key1", "something")]);
/// let update = BTreeMap::from([("key2", "something new"), ("key1", "replaced")]);
/// let more = BTreeMap::from([("bla", "even more stuff")]);
///
/// extend(&mut settings, &[&update, &more]);
/// assert_eq!(settings["key1"], "replaced");
/// assert_eq!(settings.len(), 3);
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::MapKey: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.entries() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fills in entries of `target` that are still missing, from each source
/// left to right.
///
/// A key already present never changes: keys that `target` had before the
/// call win over all sources, and among sources the first to supply a key
/// wins.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::defaults;
/// use std::collections::BTreeMap;
///
/// let mut options = BTreeMap::from([("flavor", "chocolate")]);
/// let first = BTreeMap::from([("flavor", "vanilla"), ("sprinkles", "lots")]);
/// let second = BTreeMap::from([("sprinkles", "none"), ("cone", "waffle")]);
///
/// defaults(&mut options, &[&first, &second]);
/// assert_eq!(options["flavor"], "chocolate");
/// assert_eq!(options["sprinkles"], "lots");
/// assert_eq!(options["cone"], "waffle");
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::MapKey: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.entries() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_with_no_sources_leaves_target() {
        let mut target = HashMap::from([(1, "a")]);
        extend(&mut target, &[]);
        assert_eq!(target, HashMap::from([(1, "a")]));
    }

    #[test]
    fn test_extend_later_source_wins() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        let first = HashMap::from([("a", 1)]);
        let second = HashMap::from([("a", 2)]);
        extend(&mut target, &[&first, &second]);
        assert_eq!(target["a"], 2);
    }

    #[test]
    fn test_defaults_returns_target_for_chaining() {
        let mut target = BTreeMap::from([("a", 1)]);
        let source = BTreeMap::from([("b", 2)]);
        let length = defaults(&mut target, &[&source]).len();
        assert_eq!(length, 2);
    }
}
