use core::fmt;

use crate::counted::Counted;
use crate::tally::Tally;

impl<T> fmt::Debug for Counted<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counted")
            .field("value", self.value())
            .field("count", &self.count())
            .finish()
    }
}

impl<T> fmt::Display for Counted<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.value(), self.count())
    }
}

impl<T, S> fmt::Debug for Tally<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|counted| (counted.value(), counted.count())))
            .finish()
    }
}
