use core::borrow::Borrow;
use core::hash::{Hash, Hasher};

use crate::error::CountError;

const DEFAULT_COUNT: i32 = 1;

/// A value carrying a mutable occurrence count.
///
/// The value is fixed at construction, only the count changes. Equality and
/// hashing look at the value alone, so a `Counted<T>` can sit in a hash set and
/// be found (and bumped) by the `T` it wraps.
///
/// The unchecked counter operations never panic: they wrap around on overflow.
/// Use [`Counted::try_increment_by`] and [`Counted::try_decrement_by`] where
/// overflow must be detected.
#[derive(Clone)]
pub struct Counted<T> {
    value: T,
    count: i32,
}

impl<T> Counted<T> {
    /// Wraps `value` with a count of 1.
    pub fn new(value: T) -> Self {
        Self::with_count(value, DEFAULT_COUNT)
    }

    /// Wraps `value` with the given initial count. Any count is accepted.
    pub fn with_count(value: T, count: i32) -> Self {
        Self { value, count }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.increment_by(1)
    }

    /// Adds `n` to the count. A negative `n` decrements.
    pub fn increment_by(&mut self, n: i32) {
        self.count = self.count.wrapping_add(n);
    }

    pub fn decrement(&mut self) {
        self.decrement_by(1)
    }

    /// Subtracts `n` from the count. The count may go below zero.
    pub fn decrement_by(&mut self, n: i32) {
        self.count = self.count.wrapping_sub(n);
    }

    /// Adds `n` to the count, returning the new count.
    ///
    /// On overflow the count is left as it was.
    pub fn try_increment_by(&mut self, n: i32) -> Result<i32, CountError> {
        let count = self
            .count
            .checked_add(n)
            .ok_or_else(|| CountError::overflow(self.count, i64::from(n)))?;
        self.count = count;
        Ok(count)
    }

    /// Subtracts `n` from the count, returning the new count.
    ///
    /// On overflow the count is left as it was.
    pub fn try_decrement_by(&mut self, n: i32) -> Result<i32, CountError> {
        let count = self
            .count
            .checked_sub(n)
            .ok_or_else(|| CountError::overflow(self.count, -i64::from(n)))?;
        self.count = count;
        Ok(count)
    }

    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    /// Puts the count back to 1.
    pub fn reset(&mut self) {
        self.count = DEFAULT_COUNT;
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, i32) {
        (self.value, self.count)
    }
}

impl<T> From<T> for Counted<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<(T, i32)> for Counted<T> {
    fn from((value, count): (T, i32)) -> Self {
        Self::with_count(value, count)
    }
}

impl<T> Borrow<T> for Counted<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Counted<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Two wrappers are equal when their values are, whatever their counts.
///
/// Compare [`Counted::count`] explicitly where the counts matter.
impl<T> PartialEq for Counted<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.value == other.value
    }
}

impl<T> Eq for Counted<T> where T: Eq {}

// Must agree with `PartialEq` and with `Borrow<T>`: the count is not hashed.
impl<T> Hash for Counted<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}
