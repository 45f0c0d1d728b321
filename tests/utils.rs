#![allow(dead_code)]

use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Equal to everything; records how many times it was compared.
#[derive(Debug, Clone, Default)]
pub struct EqProbe(Rc<Cell<usize>>);

impl EqProbe {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn calls(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for EqProbe {
    fn eq(&self, _other: &Self) -> bool {
        self.0.set(self.0.get() + 1);
        true
    }
}

/// ASCII string compared and hashed without regard to case.
#[derive(Debug, Clone, Copy)]
pub struct NoCase(pub &'static str);

impl PartialEq for NoCase {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl Eq for NoCase {}

impl Hash for NoCase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
