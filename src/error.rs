/// Returned by the checked counter operations of [`Counted`](crate::counted::Counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
pub enum CountError {
    #[cfg_attr(feature = "thiserror", error("Overflow: {count} + {delta}"))]
    Overflow { count: i32, delta: i64 },
}

impl CountError {
    pub fn overflow(count: i32, delta: i64) -> Self {
        Self::Overflow { count, delta }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// The count at the time the operation was attempted.
    pub fn count(&self) -> i32 {
        match *self {
            Self::Overflow { count, .. } => count,
        }
    }
}
