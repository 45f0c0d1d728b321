use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::pin::pin;

use futures::{Stream, StreamExt};
use hashbrown::hash_table::{self, Entry, HashTable};
use hashbrown::DefaultHashBuilder;

use crate::counted::Counted;
use crate::utils;

/// A frequency table: a set of [`Counted`] values, looked up by the value they wrap.
///
/// Each distinct value is stored once, in the first form it was added. Later
/// additions of an equal value only move its count.
#[derive(Clone)]
pub struct Tally<T, S = DefaultHashBuilder> {
    table: HashTable<Counted<T>>,
    hash_builder: S,
}

fn make_hash<Q, S>(hash_builder: &S, value: &Q) -> u64
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    hash_builder.hash_one(value)
}

impl<T> Tally<T> {
    /// Creates an empty [`Tally`].
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<T, S> Default for Tally<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<T, S> Tally<T, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { table: HashTable::new(), hash_builder }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self { table: HashTable::with_capacity(capacity), hash_builder }
    }

    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// The number of distinct values.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The sum of all counts.
    ///
    /// Widened to `i64` so that summing many `i32` counts cannot overflow.
    pub fn total(&self) -> i64 {
        self.iter().map(|counted| i64::from(counted.count())).sum()
    }

    pub fn iter(&self) -> hash_table::Iter<'_, Counted<T>> {
        self.table.iter()
    }

    /// Iterates over the entries with their counts open for update.
    pub fn iter_mut(&mut self) -> hash_table::IterMut<'_, Counted<T>> {
        self.table.iter_mut()
    }

    /// The entries sorted by descending count. Ties come out in no particular order.
    pub fn most_common(&self) -> Vec<&Counted<T>> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.count().cmp(&a.count()));
        entries
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&mut Counted<T>) -> bool,
    {
        self.table.retain(f)
    }

    /// Drops every entry whose count is zero or below. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let before = self.len();
        self.retain(|counted| counted.count() > 0);
        let pruned = before - self.len();
        utils::trace!(pruned, remaining = self.len(), "pruned entries");
        pruned
    }

    pub fn clear(&mut self) {
        self.table.clear()
    }
}

impl<T, S> Tally<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Counts one more occurrence of `value`.
    ///
    /// If an equal value is already present its count goes up and `value` is
    /// dropped; otherwise `value` is stored with a count of 1.
    pub fn add(&mut self, value: T) -> &mut Counted<T> {
        self.add_count(value, 1)
    }

    /// Counts `n` more occurrences of `value`. A new entry starts at `n`.
    pub fn add_count(&mut self, value: T, n: i32) -> &mut Counted<T> {
        let hash_builder = &self.hash_builder;
        let hash = make_hash(hash_builder, &value);
        match self.table.entry(
            hash,
            |counted| counted.value() == &value,
            |counted| make_hash(hash_builder, counted.value()),
        ) {
            Entry::Occupied(entry) => {
                let counted = entry.into_mut();
                counted.increment_by(n);
                counted
            },
            Entry::Vacant(entry) => {
                utils::trace!(count = n, "new value");
                entry.insert(Counted::with_count(value, n)).into_mut()
            },
        }
    }

    /// Stores `counted` as is, returning the entry it replaced, if any.
    pub fn insert(&mut self, counted: Counted<T>) -> Option<Counted<T>> {
        let hash_builder = &self.hash_builder;
        let hash = make_hash(hash_builder, counted.value());
        match self.table.entry(
            hash,
            |present| present == &counted,
            |present| make_hash(hash_builder, present.value()),
        ) {
            Entry::Occupied(mut entry) => Some(core::mem::replace(entry.get_mut(), counted)),
            Entry::Vacant(entry) => {
                entry.insert(counted);
                None
            },
        }
    }

    /// Takes `n` occurrences off the count of `key`, returning the new count.
    ///
    /// An absent key stays absent. A present one stays present even if its
    /// count reaches zero; see [`Tally::prune`].
    pub fn subtract<Q>(&mut self, key: &Q, n: i32) -> Option<i32>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let counted = self.get_mut(key)?;
        counted.decrement_by(n);
        let count = counted.count();
        if count <= 0 {
            utils::debug!(count, "count dropped to zero or below");
        }
        Some(count)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Counted<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = make_hash(&self.hash_builder, key);
        self.table.find(hash, |counted| Borrow::<Q>::borrow(counted.value()) == key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Counted<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = make_hash(&self.hash_builder, key);
        self.table.find_mut(hash, |counted| Borrow::<Q>::borrow(counted.value()) == key)
    }

    /// The count of `key`, or 0 if it was never added.
    pub fn count<Q>(&self, key: &Q) -> i32
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).map_or(0, Counted::count)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<Counted<T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = make_hash(&self.hash_builder, key);
        let (counted, _) = self
            .table
            .find_entry(hash, |counted| Borrow::<Q>::borrow(counted.value()) == key)
            .ok()?
            .remove();
        Some(counted)
    }

    /// Adds the counts of `other` to this tally.
    pub fn merge<S2>(&mut self, other: Tally<T, S2>) {
        self.extend(other)
    }

    /// Counts every item of `stream`, returning how many items it yielded.
    pub async fn count_stream<St>(&mut self, stream: St) -> usize
    where
        St: Stream<Item = T>,
    {
        let mut stream = pin!(stream);
        let mut observed = 0;
        while let Some(value) = stream.next().await {
            self.add(value);
            observed += 1;
        }
        utils::debug!(observed, distinct = self.len(), "stream counted");
        observed
    }
}

impl<T, S> Extend<T> for Tally<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, S> Extend<Counted<T>> for Tally<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = Counted<T>>>(&mut self, iter: I) {
        for counted in iter {
            let (value, count) = counted.into_parts();
            self.add_count(value, count);
        }
    }
}

impl<T, S> FromIterator<T> for Tally<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tally = Self::default();
        tally.extend(iter);
        tally
    }
}

impl<T, S> IntoIterator for Tally<T, S> {
    type Item = Counted<T>;
    type IntoIter = hash_table::IntoIter<Counted<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a Tally<T, S> {
    type Item = &'a Counted<T>;
    type IntoIter = hash_table::Iter<'a, Counted<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
